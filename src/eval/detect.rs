//! Per-category hand detection.
//!
//! Every finder takes cards sorted ascending by rank (then suit) and returns
//! the cards forming its category, or `None` if the category cannot be made.

use rustc_hash::FxHashSet;

use super::category::HandCategory;
use crate::cards::{Card, Suit, RANK_2, RANK_5, RANK_A, RANK_T};

/// Cards in a made hand.
const HAND_SIZE: usize = 5;

/// Find the cards forming `category` in `sorted`.
pub fn find_hand(sorted: &[Card], category: HandCategory) -> Option<Vec<Card>> {
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "cards must be sorted");
    match category {
        HandCategory::RoyalFlush => {
            let broadway: Vec<Card> = sorted.iter().copied().filter(|c| c.rank() >= RANK_T).collect();
            find_straight_flush(&broadway)
        }
        HandCategory::StraightFlush => find_straight_flush(sorted),
        HandCategory::FourOfAKind => find_n_kind(sorted, 4),
        HandCategory::FullHouse => find_full_house(sorted),
        HandCategory::Flush => find_flush(sorted),
        HandCategory::Straight => find_straight(sorted),
        HandCategory::ThreeOfAKind => find_n_kind(sorted, 3),
        HandCategory::TwoPair => find_two_pair(sorted),
        HandCategory::Pair => find_n_kind(sorted, 2),
        HandCategory::HighCard => sorted.last().map(|&c| vec![c]),
    }
}

/// `cards` minus every card in `remove`, order preserved.
pub fn difference(cards: &[Card], remove: &[Card]) -> Vec<Card> {
    let remove: FxHashSet<Card> = remove.iter().copied().collect();
    cards.iter().copied().filter(|c| !remove.contains(c)).collect()
}

/// `n` cards of the highest rank that appears at least `n` times.
fn find_n_kind(sorted: &[Card], n: usize) -> Option<Vec<Card>> {
    let mut run = 1;
    for i in (0..sorted.len().saturating_sub(1)).rev() {
        if sorted[i].rank() == sorted[i + 1].rank() {
            run += 1;
        } else {
            run = 1;
        }
        if run == n {
            return Some(sorted[i..i + n].to_vec());
        }
    }
    None
}

/// Highest five-rank run, high card first. Repeated ranks are skipped, so the
/// result always holds five distinct ranks. The wheel comes back as 5-4-3-2-A.
fn find_straight(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut run: Vec<Card> = Vec::with_capacity(HAND_SIZE);
    for &card in sorted.iter().rev() {
        match run.last().map(Card::rank) {
            Some(last) if last == card.rank() => continue,
            Some(last) if last == card.rank() + 1 => run.push(card),
            _ => {
                run.clear();
                run.push(card);
            }
        }
        if run.len() == HAND_SIZE {
            return Some(run);
        }
    }

    let ace = sorted.last().copied().filter(|c| c.rank() == RANK_A)?;
    let mut wheel = Vec::with_capacity(HAND_SIZE);
    for rank in (RANK_2..=RANK_5).rev() {
        wheel.push(sorted.iter().rev().copied().find(|c| c.rank() == rank)?);
    }
    wheel.push(ace);
    Some(wheel)
}

/// Top five cards of the best suit holding at least five cards.
fn find_flush(sorted: &[Card]) -> Option<Vec<Card>> {
    Suit::ALL
        .iter()
        .filter_map(|&suit| {
            let top: Vec<Card> = sorted
                .iter()
                .rev()
                .copied()
                .filter(|c| c.suit() == suit)
                .take(HAND_SIZE)
                .collect();
            (top.len() == HAND_SIZE).then_some(top)
        })
        .max_by(|a, b| a.iter().map(Card::rank).cmp(b.iter().map(Card::rank)))
}

/// Best straight within any single suit, by the straight's top card.
fn find_straight_flush(sorted: &[Card]) -> Option<Vec<Card>> {
    Suit::ALL
        .iter()
        .filter_map(|&suit| {
            let suited: Vec<Card> = sorted.iter().copied().filter(|c| c.suit() == suit).collect();
            find_straight(&suited)
        })
        // A straight's first card is its top, including the wheel's five.
        .max_by_key(|straight| straight[0].rank())
}

fn find_full_house(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut trips = find_n_kind(sorted, 3)?;
    let rest = difference(sorted, &trips);
    let pair = find_n_kind(&rest, 2)?;
    trips.extend(pair);
    Some(trips)
}

fn find_two_pair(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut first = find_n_kind(sorted, 2)?;
    let rest = difference(sorted, &first);
    let second = find_n_kind(&rest, 2)?;
    first.extend(second);
    Some(first)
}
