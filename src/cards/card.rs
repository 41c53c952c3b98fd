//! Card representation.
//!
//! A `Card` packs rank and suit into one byte so that the derived ordering is
//! "by rank, then by suit". Ranks run from 2 to 14 (ace); the ace only takes
//! the value [`ACE_LOW`] inside a wheel straight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CardParseError;

/// Rank of a card (2-14: 2-A).
pub const RANK_2: u8 = 2;
pub const RANK_3: u8 = 3;
pub const RANK_4: u8 = 4;
pub const RANK_5: u8 = 5;
pub const RANK_6: u8 = 6;
pub const RANK_7: u8 = 7;
pub const RANK_8: u8 = 8;
pub const RANK_9: u8 = 9;
pub const RANK_T: u8 = 10;
pub const RANK_J: u8 = 11;
pub const RANK_Q: u8 = 12;
pub const RANK_K: u8 = 13;
pub const RANK_A: u8 = 14;

/// Value of the ace when it closes a wheel (A-2-3-4-5).
pub const ACE_LOW: u8 = 1;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Rank characters for display, indexed by `rank - 2`.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit of a card. Declaration order is the tie-break order between equal ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All four suits in ascending order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit index (0-3).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Suit from its index (0-3).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index & 3) as usize]
    }

    /// Lowercase suit character.
    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Parse a suit character, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Row of this suit in the Unicode playing cards block.
    fn glyph_row(self) -> u32 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    /// Card index 0-51: (rank - 2) * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (2-14) and suit.
    #[inline]
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((RANK_2..=RANK_A).contains(&rank), "rank must be 2-14");
        Self {
            id: (rank - RANK_2) * 4 + suit.index(),
        }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!((id as usize) < DECK_SIZE, "card id must be 0-51");
        Self { id }
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (2-14: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4 + RANK_2
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::from_index(self.id % 4)
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[(self.rank() - RANK_2) as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        self.suit().to_char()
    }

    /// The Unicode playing card for this card, e.g. `🂡` for the ace of spades.
    pub fn glyph(&self) -> char {
        // The block skips the knight, so queen and king sit one slot late.
        let column = match self.rank() {
            RANK_A => 1,
            RANK_Q => 13,
            RANK_K => 14,
            r => r as u32,
        };
        char::from_u32(0x1F0A0 + self.suit().glyph_row() * 16 + column).unwrap_or('?')
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Parse a rank token: one of `23456789TJQKA` (any case) or `10`.
fn parse_rank(token: &str) -> Option<u8> {
    if token == "10" {
        return Some(RANK_T);
    }
    let mut chars = token.chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    RANK_CHARS
        .iter()
        .position(|&r| r == c)
        .map(|i| i as u8 + RANK_2)
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parse a card from a string like "As", "kd", "10h".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if !(2..=3).contains(&len) {
            return Err(CardParseError::InvalidLength(s.to_string()));
        }
        let suit_at = s.char_indices().last().map_or(0, |(i, _)| i);
        let (rank_part, suit_part) = s.split_at(suit_at);
        let rank = parse_rank(rank_part)
            .ok_or_else(|| CardParseError::InvalidRank(rank_part.to_string()))?;
        let suit = suit_part
            .chars()
            .next()
            .and_then(Suit::from_char)
            .ok_or_else(|| CardParseError::InvalidSuit(suit_part.to_string()))?;
        Ok(Self::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parse several cards, e.g. "AhKs Qd" or "AhKsQd" or "10h 9h".
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardParseError> {
    let compact: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut cards = Vec::with_capacity(compact.len() / 2);
    let mut i = 0;
    while i < compact.len() {
        let width = if compact[i] == '1' && compact.get(i + 1) == Some(&'0') {
            3
        } else {
            2
        };
        if i + width > compact.len() {
            let rest: String = compact[i..].iter().collect();
            return Err(CardParseError::InvalidLength(rest));
        }
        let token: String = compact[i..i + width].iter().collect();
        cards.push(token.parse()?);
        i += width;
    }
    Ok(cards)
}

/// Render cards separated by spaces.
pub fn cards_str(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Street in a hand, as implied by the number of known board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Street for a board of `len` known cards, if it is a legal board size.
    pub fn from_board_len(len: usize) -> Option<Street> {
        match len {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    /// Number of board cards for this street.
    pub fn num_board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, Suit::Spades);
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.suit(), Suit::Spades);
        assert_eq!(ace_spades.to_string(), "As");

        let two_clubs = Card::new(RANK_2, Suit::Clubs);
        assert_eq!(two_clubs.rank(), RANK_2);
        assert_eq!(two_clubs.suit(), Suit::Clubs);
        assert_eq!(two_clubs.id(), 0);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_card_ordering() {
        let ks: Card = "Ks".parse().unwrap();
        let ac: Card = "Ac".parse().unwrap();
        let ad: Card = "Ad".parse().unwrap();
        assert!(ks < ac);
        assert!(ac < ad);
        assert_eq!(ad, Card::new(RANK_A, Suit::Diamonds));
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!("As".parse::<Card>().unwrap().to_string(), "As");
        assert_eq!("kd".parse::<Card>().unwrap().to_string(), "Kd");
        assert_eq!("10h".parse::<Card>().unwrap().to_string(), "Th");
        assert!(matches!("XX".parse::<Card>(), Err(CardParseError::InvalidRank(_))));
        assert!(matches!("Ax".parse::<Card>(), Err(CardParseError::InvalidSuit(_))));
        assert!(matches!("A".parse::<Card>(), Err(CardParseError::InvalidLength(_))));
    }

    #[test]
    fn test_parse_cards() {
        let cards = parse_cards("AhKs Qd").unwrap();
        assert_eq!(cards_str(&cards), "Ah Ks Qd");

        let cards = parse_cards("10h9h").unwrap();
        assert_eq!(cards_str(&cards), "Th 9h");

        assert!(parse_cards("AhK").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn test_all_ids_round_trip() {
        for id in 0..DECK_SIZE as u8 {
            let card = Card::from_id(id);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
        }
    }

    #[test]
    fn test_glyph() {
        assert_eq!(Card::new(RANK_A, Suit::Spades).glyph(), '\u{1F0A1}');
        assert_eq!(Card::new(RANK_K, Suit::Hearts).glyph(), '\u{1F0BE}');
        assert_eq!(Card::new(RANK_2, Suit::Clubs).glyph(), '\u{1F0D2}');
    }

    #[test]
    fn test_serde_as_notation() {
        let card = Card::new(RANK_Q, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qd\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
    }

    #[test]
    fn test_street_from_board() {
        assert_eq!(Street::from_board_len(0), Some(Street::Preflop));
        assert_eq!(Street::from_board_len(3), Some(Street::Flop));
        assert_eq!(Street::from_board_len(4), Some(Street::Turn));
        assert_eq!(Street::from_board_len(5), Some(Street::River));
        assert_eq!(Street::from_board_len(2), None);
        assert_eq!(Street::River.num_board_cards(), 5);
    }
}
