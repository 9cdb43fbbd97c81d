//! Ranks and suits.
//!
//! The game does not use the usual 2..A ordering. Every rank has a fixed
//! priority used for sorting hands, and three ranks carry points.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Card face value, including the two jokers.
///
/// Variants are declared in priority order: `Seven` sorts first, `Four`
/// last. `priority()` relies on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Seven,
    BigJoker,
    SmallJoker,
    Five,
    Two,
    Three,
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Six,
    Four,
}

impl Rank {
    /// All 15 ranks in priority order.
    pub const ALL: [Rank; 15] = [
        Rank::Seven,
        Rank::BigJoker,
        Rank::SmallJoker,
        Rank::Five,
        Rank::Two,
        Rank::Three,
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Six,
        Rank::Four,
    ];

    /// Position in the fixed sort order (0 = sorts first).
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Point value when the card lands in a score pile.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Five => 5,
            Rank::Ten | Rank::King => 10,
            _ => 0,
        }
    }

    /// 5, 10 and K.
    #[must_use]
    pub const fn is_scoring(self) -> bool {
        self.points() > 0
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::BigJoker | Rank::SmallJoker)
    }

    /// Wire symbol, e.g. `"10"`, `"K"`, `"BJ"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::BigJoker => "BJ",
            Rank::SmallJoker => "SJ",
            Rank::Five => "5",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Six => "6",
            Rank::Four => "4",
        }
    }

    /// Parse a wire symbol. Case-insensitive.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Rank> {
        let s = s.trim().to_ascii_uppercase();
        Rank::ALL.into_iter().find(|r| r.symbol() == s)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rank::from_symbol(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid rank: {s}")))
    }
}

/// Card suit. Declared in tie-break order: ♠, ♥, ♣, ♦.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }

    /// Parse either the glyph or the ASCII letter (`S`, `H`, `C`, `D`).
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Suit> {
        match s.trim() {
            "♠" | "S" | "s" => Some(Suit::Spades),
            "♥" | "H" | "h" => Some(Suit::Hearts),
            "♣" | "C" | "c" => Some(Suit::Clubs),
            "♦" | "D" | "d" => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.symbol())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Suit::from_symbol(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matches_declared_order() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.priority() as usize, i);
        }
        assert!(Rank::Seven.priority() < Rank::BigJoker.priority());
        assert!(Rank::Five.priority() < Rank::King.priority());
        assert!(Rank::King.priority() < Rank::Ten.priority());
    }

    #[test]
    fn test_points() {
        assert_eq!(Rank::Five.points(), 5);
        assert_eq!(Rank::Ten.points(), 10);
        assert_eq!(Rank::King.points(), 10);

        let scoring: Vec<_> = Rank::ALL.into_iter().filter(|r| r.is_scoring()).collect();
        assert_eq!(scoring, vec![Rank::Five, Rank::King, Rank::Ten]);
        assert_eq!(Rank::BigJoker.points(), 0);
    }

    #[test]
    fn test_symbols_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_symbol(rank.symbol()), Some(rank));
        }
        assert_eq!(Rank::from_symbol("bj"), Some(Rank::BigJoker));
        assert_eq!(Rank::from_symbol("1"), None);

        for suit in Suit::ALL {
            assert_eq!(Suit::from_symbol(&suit.symbol().to_string()), Some(suit));
        }
        assert_eq!(Suit::from_symbol("d"), Some(Suit::Diamonds));
        assert_eq!(Suit::from_symbol("X"), None);
    }

    #[test]
    fn test_suit_tie_break_order() {
        let mut suits = vec![Suit::Diamonds, Suit::Clubs, Suit::Spades, Suit::Hearts];
        suits.sort();
        assert_eq!(suits, Suit::ALL.to_vec());
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Rank::Ten).unwrap(), "\"10\"");
        assert_eq!(serde_json::to_string(&Suit::Hearts).unwrap(), "\"♥\"");

        let rank: Rank = serde_json::from_str("\"SJ\"").unwrap();
        assert_eq!(rank, Rank::SmallJoker);
        assert!(serde_json::from_str::<Rank>("\"Z\"").is_err());
    }
}
