//! The game: state, the engine state machine, snapshots and checkpoints.
//!
//! ## Flow
//!
//! 1. `GameEngine::new` shuffles 54 cards and deals five to each seat.
//! 2. The seat to act calls `play_cards`; scoring cards (5, 10, K) go to
//!    that seat's score pile, hands are refilled and the turn passes.
//! 3. The game ends once the deck and both hands are empty; the higher
//!    score pile wins.
//!
//! `player_play` and `pass_turn` wrap this for a human-vs-AI client and
//! return a `GameSnapshot`.

pub mod checkpoint;
pub mod engine;
pub mod snapshot;
pub mod state;

pub use engine::GameEngine;
pub use snapshot::GameSnapshot;
pub use state::{GamePhase, GameState, PlayType, RoundState};
