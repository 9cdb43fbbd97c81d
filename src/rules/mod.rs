//! Scoring and game results.
//!
//! Points only come from 5, 10 and K. A finished game is decided purely by
//! comparing the two score-pile totals.

pub mod outcome;
pub mod scoring;

pub use outcome::Outcome;
pub use scoring::{score_of, scoring_cards};
