use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct card identities in a standard single deck
pub const DECK_SIZE: usize = 52;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("'{0}' is not a valid rank")]
    InvalidRank(String),
    #[error("'{0}' is not a valid suit")]
    InvalidSuit(String),
    #[error("'{0}' is not a valid card (expected rank then suit, e.g. 'AH' or '10d')")]
    InvalidCard(String),
}

/// Card ranks in canonical display order (ace high down to two)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "2")]
    Two,
}

impl Rank {
    /// All ranks in canonical display order
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Position in canonical order, 0..13
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Rank::ALL.len() {
            Some(Rank::ALL[index])
        } else {
            None
        }
    }

    /// Short display token ("A", "K", ..., "10", ..., "2")
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
            Rank::Five => "5",
            Rank::Four => "4",
            Rank::Three => "3",
            Rank::Two => "2",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.symbol() == token)
            .ok_or_else(|| ParseCardError::InvalidRank(s.to_string()))
    }
}

/// Card suits in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical display order
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position in canonical order, 0..4
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Full lowercase name ("hearts", "diamonds", "clubs", "spades")
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    /// One-letter symbol used in compact card notation
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        match token.as_str() {
            "h" | "hearts" => Ok(Suit::Hearts),
            "d" | "diamonds" => Ok(Suit::Diamonds),
            "c" | "clubs" => Ok(Suit::Clubs),
            "s" | "spades" => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(s.to_string())),
        }
    }
}

/// One of the 52 standard card identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardId {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        CardId { rank, suit }
    }

    /// Dense table index, 0..52 (rank-major, suits within rank)
    pub const fn index(self) -> usize {
        self.rank.index() * Suit::ALL.len() + self.suit.index()
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        match (
            Rank::from_index(index / Suit::ALL.len()),
            Suit::from_index(index % Suit::ALL.len()),
        ) {
            (Some(rank), Some(suit)) => Some(CardId { rank, suit }),
            _ => None,
        }
    }

    /// All 52 identities in canonical order
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE).filter_map(CardId::from_index)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

impl FromStr for CardId {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.len() < 2 || !token.is_ascii() {
            return Err(ParseCardError::InvalidCard(s.to_string()));
        }
        // Suit is always the final character; everything before it is the rank
        let (rank_part, suit_part) = token.split_at(token.len() - 1);
        let rank = rank_part
            .parse::<Rank>()
            .map_err(|_| ParseCardError::InvalidCard(s.to_string()))?;
        let suit = suit_part
            .parse::<Suit>()
            .map_err(|_| ParseCardError::InvalidCard(s.to_string()))?;
        Ok(CardId { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_sizes() {
        assert_eq!(Rank::ALL.len(), 13);
        assert_eq!(Suit::ALL.len(), 4);
        assert_eq!(CardId::all().count(), DECK_SIZE);
    }

    #[test]
    fn test_index_round_trip() {
        for card in CardId::all() {
            assert_eq!(CardId::from_index(card.index()), Some(card));
        }
        assert_eq!(CardId::from_index(DECK_SIZE), None);
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(CardId::new(Rank::Ace, Suit::Hearts).index(), 0);
        assert_eq!(CardId::new(Rank::Ace, Suit::Spades).index(), 3);
        assert_eq!(CardId::new(Rank::King, Suit::Hearts).index(), 4);
        assert_eq!(CardId::new(Rank::Two, Suit::Spades).index(), 51);
    }

    #[test]
    fn test_display_compact_notation() {
        assert_eq!(CardId::new(Rank::Ace, Suit::Hearts).to_string(), "AH");
        assert_eq!(CardId::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
    }

    #[test]
    fn test_parse_compact_notation() {
        assert_eq!(
            "AH".parse::<CardId>(),
            Ok(CardId::new(Rank::Ace, Suit::Hearts))
        );
        assert_eq!(
            "10d".parse::<CardId>(),
            Ok(CardId::new(Rank::Ten, Suit::Diamonds))
        );
        assert_eq!(
            "ks".parse::<CardId>(),
            Ok(CardId::new(Rank::King, Suit::Spades))
        );
        assert!("1H".parse::<CardId>().is_err());
        assert!("AX".parse::<CardId>().is_err());
        assert!("A".parse::<CardId>().is_err());
    }

    #[test]
    fn test_suit_parse_full_names() {
        assert_eq!("hearts".parse::<Suit>(), Ok(Suit::Hearts));
        assert_eq!("Spades".parse::<Suit>(), Ok(Suit::Spades));
        assert!("stars".parse::<Suit>().is_err());
    }

    #[test]
    fn test_suit_colors() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
    }
}
