//! Score table.
//!
//! | Rank | Points |
//! |------|--------|
//! | 5    | 5      |
//! | 10   | 10     |
//! | K    | 10     |
//!
//! Everything else, jokers included, is worth nothing.

use crate::cards::Card;

/// Total points in a pile. Additive and order independent.
#[must_use]
pub fn score_of(pile: &[Card]) -> u32 {
    pile.iter().map(Card::points).sum()
}

/// The cards of a play that go to the score pile.
pub fn scoring_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> impl Iterator<Item = Card> {
    cards.into_iter().copied().filter(Card::is_scoring)
}
