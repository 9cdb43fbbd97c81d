//! Client-facing view of a game and the turn operations that produce it.
//!
//! A host (HTTP handler, websocket session, CLI) calls `player_play` or
//! `pass_turn` and ships the resulting `GameSnapshot` as JSON. The AI's
//! reply is folded into the same call, so the client sees one round trip
//! per human move.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Hand};
use crate::core::Seat;
use crate::error::Result;
use crate::rules::Outcome;

use super::engine::GameEngine;

/// What the human player is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub player_hand: Vec<Card>,
    pub ai_hand_count: usize,
    pub player_score: u32,
    pub ai_score: u32,
    pub current_player: Seat,
    /// Cards the AI played during this call, if any.
    pub ai_cards: Vec<Card>,
    pub game_end: bool,
    pub winner: Option<Outcome>,
}

impl GameEngine {
    /// Current view, with `ai_cards` empty.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot_with(Hand::new())
    }

    fn snapshot_with(&self, ai_cards: Hand) -> GameSnapshot {
        GameSnapshot {
            player_hand: self.hand(Seat::Player).to_vec(),
            ai_hand_count: self.hand(Seat::Ai).len(),
            player_score: self.score(Seat::Player),
            ai_score: self.score(Seat::Ai),
            current_player: self.current_seat(),
            ai_cards: ai_cards.to_vec(),
            game_end: self.is_game_end(),
            winner: self.outcome(),
        }
    }

    /// Apply the player's play, then let the AI answer if it is its turn.
    pub fn player_play(&mut self, cards: &[Card]) -> Result<GameSnapshot> {
        self.play_cards(Seat::Player, cards)?;
        let ai_cards = self.run_ai_turn()?;
        Ok(self.snapshot_with(ai_cards))
    }

    /// Let the AI act without a player move. A no-op unless it is the AI's
    /// turn and the game is still running.
    pub fn pass_turn(&mut self) -> Result<GameSnapshot> {
        let ai_cards = self.run_ai_turn()?;
        Ok(self.snapshot_with(ai_cards))
    }

    fn run_ai_turn(&mut self) -> Result<Hand> {
        if self.is_game_end() || self.current_seat() != Seat::Ai {
            return Ok(Hand::new());
        }

        let cards = self.decide_ai_cards();
        debug!(cards = ?cards.as_slice(), "ai turn");
        self.play_cards(Seat::Ai, &cards)?;
        Ok(cards)
    }
}
