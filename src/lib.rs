//! # five-ten-king
//!
//! A two-player 5-10-K card game engine: the human player against a simple
//! computer opponent.
//!
//! ## Rules
//!
//! - 54 cards: 13 ranks × 4 suits plus a big and a small joker.
//! - Each seat holds five cards and is refilled from the deck after every
//!   play. The player acts first; turns alternate.
//! - Played 5s are worth 5 points, 10s and Ks 10. They go to the player's
//!   score pile; everything else is discarded.
//! - The game ends when the deck and both hands are empty. Higher score wins.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration
//! - `cards`: ranks, suits, cards, deck
//! - `rules`: score table and game outcome
//! - `game`: the `GameEngine` state machine, snapshots, checkpoints
//! - `ai`: opponent policies
//! - `session`: session registry for hosting many games
//!
//! ## Example
//!
//! ```
//! use five_ten_king::{GameConfig, GameEngine, Seat};
//!
//! let mut engine = GameEngine::new(GameConfig::default().with_seed(42));
//! let card = engine.hand(Seat::Player)[0];
//!
//! let snapshot = engine.player_play(&[card]).unwrap();
//! assert_eq!(snapshot.ai_cards.len(), 1);
//! assert_eq!(snapshot.current_player, Seat::Player);
//! ```

pub mod ai;
pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PolicyKind, RefillOrder, RegistryConfig, Seat, SeatMap};

pub use crate::cards::{Card, Deck, Hand, Rank, Suit, DECK_SIZE};

pub use crate::rules::{score_of, Outcome};

pub use crate::game::{GameEngine, GamePhase, GameSnapshot, GameState, PlayType, RoundState};

pub use crate::ai::{GreedyPolicy, OpponentPolicy, RandomPolicy};

pub use crate::session::{SessionId, SessionRegistry};

pub use crate::error::{GameError, Result};
