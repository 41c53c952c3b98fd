//! Comparable hand scores.
//!
//! A [`Score`] compares by category first, then by the category cards, then
//! by kickers. Equality follows the ordering, so two flushes with the same
//! ranks in different suits are equal.

use std::cmp::Ordering;
use std::fmt;

use super::category::HandCategory;
use super::detect::difference;
use crate::cards::{cards_str, Card, ACE_LOW, RANK_A, RANK_K};

/// Cards compared in a showdown.
const SHOWDOWN_CARDS: usize = 5;

/// The result of evaluating a set of cards.
#[derive(Debug, Clone)]
pub struct Score {
    category: HandCategory,
    /// Cards forming the category.
    cards: Vec<Card>,
    /// Best non-category cards, descending, filling out five cards.
    kickers: Vec<Card>,
    /// Every evaluated card, ascending.
    pool: Vec<Card>,
}

impl Score {
    /// Build a score from the cards forming `category` and the sorted pool
    /// they were found in.
    pub fn new(category: HandCategory, cards: Vec<Card>, pool: Vec<Card>) -> Self {
        debug_assert!(cards.iter().all(|c| pool.contains(c)));
        let mut kickers = difference(&pool, &cards);
        kickers.reverse();
        kickers.truncate(SHOWDOWN_CARDS.saturating_sub(cards.len()));
        Self {
            category,
            cards,
            kickers,
            pool,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The cards forming the category.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Tie-break cards outside the category.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// Every card the score was derived from, ascending.
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// Whether the ace counts high in this score. Only a wheel (an ace
    /// without a king in a straight-shaped hand) plays the ace low.
    pub fn ace_high(&self) -> bool {
        if !self.category.is_straight_shaped() {
            return true;
        }
        let has = |rank| self.cards.iter().any(|c| c.rank() == rank);
        !(has(RANK_A) && !has(RANK_K))
    }
}

/// Ranks in descending order, with the ace optionally played low.
fn ranks_desc(cards: &[Card], ace_high: bool) -> Vec<u8> {
    let mut ranks: Vec<u8> = cards
        .iter()
        .map(|c| match c.rank() {
            RANK_A if !ace_high => ACE_LOW,
            r => r,
        })
        .collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Element-wise comparison of descending ranks; a shorter exhausted list loses.
fn tiebreak(a: &[Card], a_ace_high: bool, b: &[Card], b_ace_high: bool) -> Ordering {
    ranks_desc(a, a_ace_high).cmp(&ranks_desc(b, b_ace_high))
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| tiebreak(&self.cards, self.ace_high(), &other.cards, other.ace_high()))
            .then_with(|| tiebreak(&self.kickers, true, &other.kickers, true))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.category, cards_str(&self.cards))?;
        if !self.kickers.is_empty() {
            write!(f, " + [{}]", cards_str(&self.kickers))?;
        }
        Ok(())
    }
}
