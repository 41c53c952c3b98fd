//! Exclusion-aware deck with random draw-without-replacement.

use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

use super::card::{Card, DECK_SIZE};

/// The 52-card universe minus a fixed set of excluded (already known) cards.
///
/// Drawing swaps the chosen card behind the live region instead of removing
/// it, so [`Deck::reset`] restores every non-excluded card without
/// reallocating.
#[derive(Clone)]
pub struct Deck {
    /// Non-excluded cards; `cards[..live]` are still undealt.
    cards: [Card; DECK_SIZE],
    /// Number of non-excluded cards.
    size: usize,
    /// Number of undealt cards.
    live: usize,
}

impl Deck {
    /// Create a full 52-card deck.
    pub fn new() -> Self {
        Self::without(&[])
    }

    /// Create a deck with specific cards removed. Those cards never come back
    /// on [`Deck::reset`].
    pub fn without(dead_cards: &[Card]) -> Self {
        let dead: FxHashSet<Card> = dead_cards.iter().copied().collect();
        let mut cards = [Card::from_id(0); DECK_SIZE];
        let mut size = 0;
        for id in 0..DECK_SIZE as u8 {
            let card = Card::from_id(id);
            if !dead.contains(&card) {
                cards[size] = card;
                size += 1;
            }
        }
        Self {
            cards,
            size,
            live: size,
        }
    }

    /// Draw one undealt card uniformly at random.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.live == 0 {
            return None;
        }
        let pick = rng.gen_range(0..self.live);
        self.live -= 1;
        self.cards.swap(pick, self.live);
        Some(self.cards[self.live])
    }

    /// Draw cards into `out` until it holds `len` cards. Returns `false` if
    /// the deck ran dry first.
    pub fn fill<R: Rng>(&mut self, out: &mut Vec<Card>, len: usize, rng: &mut R) -> bool {
        while out.len() < len {
            match self.draw(rng) {
                Some(card) => out.push(card),
                None => return false,
            }
        }
        true
    }

    /// Return every drawn card to the deck. Excluded cards stay out.
    #[inline]
    pub fn reset(&mut self) {
        self.live = self.size;
    }

    /// Get the number of undealt cards.
    pub fn remaining(&self) -> usize {
        self.live
    }

    /// Number of cards in the deck after exclusions, dealt or not.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get undealt cards as a slice (in no particular order).
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[..self.live]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({}/{} remaining)", self.live, self.size)
    }
}
