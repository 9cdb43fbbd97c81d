//! Multi-session hosting.
//!
//! `SessionRegistry` replaces a process-wide single game: every client gets
//! its own `GameEngine`, looked up by `SessionId` on each call and dropped
//! after a period of inactivity.

pub mod registry;

pub use registry::{SessionId, SessionRegistry};
