//! Game state: everything that changes while a game is played.
//!
//! ## GameState
//!
//! - Deck, both hands, both score piles, discard pile
//! - Whose turn it is
//! - The last play and the full play history
//!
//! Every card is in exactly one of deck, a hand, a score pile or the discard
//! pile, so `card_count()` is always 54.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Hand};
use crate::core::{Seat, SeatMap};
use crate::rules::{score_of, Outcome};

/// Classification of a play. Only single-card plays exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayType {
    #[default]
    Single,
}

/// One resolved play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// 1-based play counter.
    pub turn: u32,
    pub seat: Seat,
    pub play_type: PlayType,
    /// Cards that actually left the hand.
    pub cards: Hand,
    /// Subset of `cards` that went to the score pile.
    pub scored: Hand,
}

/// Game progress. `Ended` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Ended,
}

/// Complete mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Draw pile.
    pub deck: Deck,

    /// Cards in hand per seat.
    pub hands: SeatMap<Hand>,

    /// Scored cards per seat. Only grows.
    pub score_piles: SeatMap<Vec<Card>>,

    /// Played cards that scored nothing.
    pub discard: Vec<Card>,

    /// Seat to act next.
    pub current: Seat,

    /// Most recent play, overwritten every play.
    pub last_play: Option<RoundState>,

    /// Every play in order.
    pub history: Vector<RoundState>,
}

impl GameState {
    /// Fresh state around an undealt deck. The player acts first.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            hands: SeatMap::with_default(),
            score_piles: SeatMap::with_default(),
            discard: Vec::new(),
            current: Seat::Player,
            last_play: None,
            history: Vector::new(),
        }
    }

    /// Points in a seat's score pile.
    #[must_use]
    pub fn score(&self, seat: Seat) -> u32 {
        score_of(&self.score_piles[seat])
    }

    /// Deck and both hands are empty.
    #[must_use]
    pub fn is_game_end(&self) -> bool {
        self.deck.is_empty() && self.hands.iter().all(|(_, hand)| hand.is_empty())
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_game_end() {
            GamePhase::Ended
        } else {
            GamePhase::InProgress
        }
    }

    /// Winner once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_game_end()
            .then(|| Outcome::from_scores(self.score(Seat::Player), self.score(Seat::Ai)))
    }

    /// Cards across every pile. Always 54 for a game built from a full deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let held: usize = self.hands.iter().map(|(_, h)| h.len()).sum();
        let scored: usize = self.score_piles.iter().map(|(_, p)| p.len()).sum();
        self.deck.len() + held + scored + self.discard.len()
    }
}
