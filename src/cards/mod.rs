//! Card system: ranks, suits, cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: 13 regular ranks plus `BigJoker`/`SmallJoker`, with a fixed
//!   sort priority and point value
//! - `Suit`: ♠ ♥ ♣ ♦ (also the tie-break order)
//! - `Card`: (rank, suit) value type; jokers are suitless
//! - `Deck`: the 54-card draw pile

pub mod card;
pub mod deck;
pub mod rank;

pub use card::Card;
pub use deck::{Deck, DECK_SIZE};
pub use rank::{Rank, Suit};

/// A hand, or the cards of one play. Inline up to a full hand.
pub type Hand = smallvec::SmallVec<[Card; 5]>;
