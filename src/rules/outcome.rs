//! Result of a finished game.

use serde::{Deserialize, Serialize};

/// Who won, decided by comparing the two score piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player,
    Opponent,
    Tie,
}

impl Outcome {
    /// Higher score wins; equal scores tie.
    #[must_use]
    pub fn from_scores(player: u32, opponent: u32) -> Self {
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => Outcome::Player,
            std::cmp::Ordering::Less => Outcome::Opponent,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}
