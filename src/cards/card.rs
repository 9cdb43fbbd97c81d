//! Card value type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::rank::{Rank, Suit};
use crate::error::GameError;

/// An immutable card. Jokers have no suit; every other rank has one.
///
/// Equality is by (rank, suit): two physical copies of ♠5 are the same card.
/// `Ord` follows the fixed hand-sorting order (rank priority, then suit with
/// jokers first) and is what the AI sorts by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRepr", into = "CardRepr")]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
}

impl Card {
    /// A suited card from a rank known to be a regular one.
    ///
    /// # Panics
    ///
    /// If `rank` is a joker. Use [`Card::joker`] for those, or
    /// [`Card::from_parts`] for ranks that come from input.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        assert!(!rank.is_joker(), "Jokers have no suit");
        Self {
            rank,
            suit: Some(suit),
        }
    }

    /// A joker from a rank known to be one of the two joker ranks.
    ///
    /// # Panics
    ///
    /// If `rank` is a regular rank. Input goes through [`Card::from_parts`].
    #[must_use]
    pub fn joker(rank: Rank) -> Self {
        assert!(rank.is_joker(), "Only joker ranks are suitless");
        Self { rank, suit: None }
    }

    /// Build from loose parts, rejecting suitless regular cards and suited
    /// jokers.
    pub fn from_parts(rank: Rank, suit: Option<Suit>) -> Result<Self, GameError> {
        match (rank.is_joker(), suit) {
            (true, None) | (false, Some(_)) => Ok(Self { rank, suit }),
            (true, Some(s)) => Err(GameError::InvalidCard(format!("{rank} cannot have suit {s}"))),
            (false, None) => Err(GameError::InvalidCard(format!("{rank} needs a suit"))),
        }
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.rank.points()
    }

    #[must_use]
    pub fn is_scoring(&self) -> bool {
        self.rank.is_scoring()
    }

    /// (rank priority, suit) with `None` below every suit.
    #[must_use]
    pub fn sort_key(&self) -> (u8, Option<Suit>) {
        (self.rank.priority(), self.suit)
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{suit}{}", self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}

/// Wire shape: `{"rank": "K", "suit": "♠"}`. `value` is accepted for `rank`.
#[derive(Serialize, Deserialize)]
struct CardRepr {
    #[serde(alias = "value")]
    rank: Rank,
    #[serde(default)]
    suit: Option<Suit>,
}

impl TryFrom<CardRepr> for Card {
    type Error = GameError;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        Card::from_parts(repr.rank, repr.suit)
    }
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_rank_and_suit() {
        assert_eq!(Card::new(Rank::Five, Suit::Spades), Card::new(Rank::Five, Suit::Spades));
        assert_ne!(Card::new(Rank::Five, Suit::Spades), Card::new(Rank::Five, Suit::Hearts));
        assert_ne!(Card::joker(Rank::BigJoker), Card::joker(Rank::SmallJoker));
    }

    #[test]
    #[should_panic(expected = "Jokers have no suit")]
    fn test_suited_joker_panics() {
        let _ = Card::new(Rank::BigJoker, Suit::Spades);
    }

    #[test]
    #[should_panic(expected = "Only joker ranks are suitless")]
    fn test_suitless_regular_rank_panics() {
        let _ = Card::joker(Rank::King);
    }

    #[test]
    fn test_from_parts_validation() {
        assert!(Card::from_parts(Rank::King, Some(Suit::Clubs)).is_ok());
        assert!(Card::from_parts(Rank::SmallJoker, None).is_ok());
        assert!(matches!(
            Card::from_parts(Rank::King, None),
            Err(GameError::InvalidCard(_))
        ));
        assert!(matches!(
            Card::from_parts(Rank::BigJoker, Some(Suit::Hearts)),
            Err(GameError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_ordering() {
        let mut cards = vec![
            Card::new(Rank::Four, Suit::Spades),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::joker(Rank::SmallJoker),
            Card::new(Rank::Seven, Suit::Spades),
            Card::joker(Rank::BigJoker),
        ];
        cards.sort();

        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Seven, Suit::Spades),
                Card::new(Rank::Seven, Suit::Diamonds),
                Card::joker(Rank::BigJoker),
                Card::joker(Rank::SmallJoker),
                Card::new(Rank::Four, Suit::Spades),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "♥10");
        assert_eq!(Card::joker(Rank::BigJoker).to_string(), "BJ");
    }

    #[test]
    fn test_serde_round_trip() {
        let cards = [Card::new(Rank::Ten, Suit::Diamonds), Card::joker(Rank::SmallJoker)];
        for card in cards {
            let json = serde_json::to_string(&card).unwrap();
            let back: Card = serde_json::from_str(&json).unwrap();
            assert_eq!(card, back);
        }
    }

    #[test]
    fn test_serde_wire_shape() {
        let json = serde_json::to_value(Card::joker(Rank::BigJoker)).unwrap();
        assert_eq!(json, serde_json::json!({"rank": "BJ", "suit": null}));

        let card: Card = serde_json::from_str(r#"{"value": "K", "suit": "♣"}"#).unwrap();
        assert_eq!(card, Card::new(Rank::King, Suit::Clubs));

        let joker: Card = serde_json::from_str(r#"{"rank": "SJ"}"#).unwrap();
        assert_eq!(joker, Card::joker(Rank::SmallJoker));

        assert!(serde_json::from_str::<Card>(r#"{"rank": "K"}"#).is_err());
    }
}
