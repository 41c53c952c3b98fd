//! Hand categories, ordered from worst to best.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

/// Number of hand categories.
pub const NUM_CATEGORIES: usize = 10;

impl HandCategory {
    /// All categories, weakest first.
    pub const ALL: [HandCategory; NUM_CATEGORIES] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Zero-based position in [`HandCategory::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Categories whose defining cards form a run of five ranks.
    /// Royal flush is excluded since it can never be a wheel.
    pub fn is_straight_shaped(&self) -> bool {
        matches!(self, HandCategory::Straight | HandCategory::StraightFlush)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poker_strength_order() {
        use HandCategory::*;
        let expected = [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ];
        for pair in expected.windows(2) {
            assert!(pair[0] > pair[1], "{} should beat {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_index_matches_all() {
        for (i, category) in HandCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&HandCategory::ThreeOfAKind).unwrap();
        assert_eq!(json, "\"three_of_a_kind\"");
    }
}
