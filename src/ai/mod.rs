//! Computer opponent.
//!
//! - `OpponentPolicy`: how the AI seat picks its play
//! - `GreedyPolicy`: cash in a scoring card if possible, else discard the
//!   first card in priority order (the default)
//! - `RandomPolicy`: one uniformly random card

pub mod policy;

pub use policy::{policy_for, GreedyPolicy, OpponentPolicy, RandomPolicy};
