//! Poker hand evaluation.
//!
//! Scores the best five-card hand out of five or more cards. The default path
//! walks the [`EvaluationPlanner`] graph; [`HandEvaluator::score_exhaustive`]
//! tries every category from strongest to weakest and must agree with it.

use std::cmp::Ordering;

use super::category::HandCategory;
use super::detect::find_hand;
use super::planner::{planner, EvaluationPlanner};
use super::score::Score;
use crate::cards::Card;
use crate::error::EvalError;

/// Minimum number of cards needed to form a hand.
pub const MIN_CARDS: usize = 5;

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy)]
pub struct HandEvaluator {
    planner: &'static EvaluationPlanner,
}

impl HandEvaluator {
    /// Create a new hand evaluator backed by the shared planner.
    pub fn new() -> Self {
        Self { planner: planner() }
    }

    /// Score the best hand in `cards` using the pruned category search.
    pub fn score(&self, cards: &[Card]) -> Result<Score, EvalError> {
        let sorted = sorted_pool(cards)?;
        self.planner.search(&sorted).ok_or(EvalError::NoHandFormed)
    }

    /// Score the best hand by trying every category, strongest first.
    pub fn score_exhaustive(&self, cards: &[Card]) -> Result<Score, EvalError> {
        let sorted = sorted_pool(cards)?;
        HandCategory::ALL
            .iter()
            .rev()
            .find_map(|&category| {
                find_hand(&sorted, category).map(|found| Score::new(category, found, sorted.clone()))
            })
            .ok_or(EvalError::NoHandFormed)
    }

    /// Compare two players' hole cards on a shared board.
    pub fn compare(&self, hole1: &[Card], hole2: &[Card], board: &[Card]) -> Result<Ordering, EvalError> {
        let score1 = self.score(&[hole1, board].concat())?;
        let score2 = self.score(&[hole2, board].concat())?;
        Ok(score1.cmp(&score2))
    }
}

impl Default for HandEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Score the best hand in `cards` (at least five, any order).
pub fn score(cards: &[Card]) -> Result<Score, EvalError> {
    HandEvaluator::new().score(cards)
}

/// Score by brute force over all categories. Same result as [`score`].
pub fn score_exhaustive(cards: &[Card]) -> Result<Score, EvalError> {
    HandEvaluator::new().score_exhaustive(cards)
}

fn sorted_pool(cards: &[Card]) -> Result<Vec<Card>, EvalError> {
    if cards.len() < MIN_CARDS {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{cards_str, parse_cards, Deck, RANK_A};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn cards_from_str(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn score_str(s: &str) -> Score {
        score(&cards_from_str(s)).unwrap()
    }

    #[test]
    fn test_too_few_cards() {
        let cards = cards_from_str("As Kd Qh Jc");
        assert_eq!(score(&cards).unwrap_err(), EvalError::NotEnoughCards(4));
        assert_eq!(score_exhaustive(&[]).unwrap_err(), EvalError::NotEnoughCards(0));
    }

    #[test]
    fn test_high_card() {
        let s = score_str("As Kd Qh Jc 9s");
        assert_eq!(s.category(), HandCategory::HighCard);
        assert_eq!(cards_str(s.cards()), "As");
        assert_eq!(cards_str(s.kickers()), "Kd Qh Jc 9s");
    }

    #[test]
    fn test_each_category() {
        let cases = [
            ("As Kd Qh Jc 9s 4d 2c", HandCategory::HighCard),
            ("As Ad Kh Qc Js 4d 2c", HandCategory::Pair),
            ("As Ad Kh Kc Js 4d 2c", HandCategory::TwoPair),
            ("As Ad Ah Kc Js 4d 2c", HandCategory::ThreeOfAKind),
            ("Ts 9d 8h 7c 6s 2d 2c", HandCategory::Straight),
            ("As Ks 9s 7s 2s 3d 4c", HandCategory::Flush),
            ("As Ad Ah Kc Kd 4d 2c", HandCategory::FullHouse),
            ("As Ad Ah Ac Ks 4d 2c", HandCategory::FourOfAKind),
            ("9s 8s 7s 6s 5s Ad Ac", HandCategory::StraightFlush),
            ("As Ks Qs Js Ts 9s 2d", HandCategory::RoyalFlush),
        ];
        for (hand, expected) in cases {
            assert_eq!(score_str(hand).category(), expected, "{}", hand);
        }
    }

    #[test]
    fn test_wheel_straight() {
        let wheel = score_str("2d 3d 4h 5s Ac 9h Kc");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert!(wheel.cards().iter().any(|c| c.rank() == RANK_A));
        assert!(!wheel.ace_high());

        let broadway = score_str("Th Jd Qs Kc Ah 2c 3c");
        assert_eq!(broadway.category(), HandCategory::Straight);
        assert!(broadway.ace_high());
        assert!(broadway > wheel);
    }

    #[test]
    fn test_straight_flush_wheel_is_lowest() {
        let wheel = score_str("Ah 2h 3h 4h 5h Kc Qd");
        let six_high = score_str("2s 3s 4s 5s 6s Kc Qd");
        assert_eq!(wheel.category(), HandCategory::StraightFlush);
        assert_eq!(six_high.category(), HandCategory::StraightFlush);
        assert!(six_high > wheel);
    }

    #[test]
    fn test_royal_flush() {
        let s = score_str("Th Jh Qh Kh Ah 2c 7d");
        assert_eq!(s.category(), HandCategory::RoyalFlush);
        assert!(s.cards().iter().all(|c| c.rank() >= 10));
    }

    #[test]
    fn test_quads_beat_full_house() {
        let s = score_str("7c 7d 7h 7s Kc Kd 2h");
        assert_eq!(s.category(), HandCategory::FourOfAKind);
        assert_eq!(cards_str(s.kickers()), "Kd");
    }

    #[test]
    fn test_flush_tiebreak() {
        let hearts = score_str("Ah Jh 9h 6h 3h");
        let spades = score_str("As Js 9s 6s 3s");
        assert_eq!(hearts.cmp(&spades), Ordering::Equal);
        assert_eq!(hearts, spades);

        let lower_fifth = score_str("Ad Jd 9d 6d 2d");
        assert!(hearts > lower_fifth);
    }

    #[test]
    fn test_two_pair_kicker() {
        let better = score_str("Ac Ad 9c 9d 4h 4s 2c");
        let worse = score_str("Ah As 9h 9s 3h 3s 2d");
        assert_eq!(better.category(), HandCategory::TwoPair);
        assert!(better > worse);
    }

    #[test]
    fn test_reordering_does_not_change_score() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut cards = cards_from_str("Kc Kd 5h 5s 9c Qd 2h");
        let reference = score(&cards).unwrap();
        for _ in 0..50 {
            cards.shuffle(&mut rng);
            let shuffled = score(&cards).unwrap();
            assert_eq!(shuffled.category(), reference.category());
            assert_eq!(shuffled.cards(), reference.cards());
            assert_eq!(shuffled.kickers(), reference.kickers());
        }
    }

    #[test]
    fn test_category_cards_are_subset_of_pool() {
        let s = score_str("Kc Kd Kh 5c 5d 5h 2s");
        assert_eq!(s.category(), HandCategory::FullHouse);
        assert!(s.cards().iter().all(|c| s.pool().contains(c)));
        assert_eq!(s.pool().len(), 7);
    }

    #[test]
    fn test_pruned_matches_exhaustive() {
        let evaluator = HandEvaluator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::new();
        let mut cards = Vec::with_capacity(10);

        for round in 0..5000 {
            deck.reset();
            cards.clear();
            assert!(deck.fill(&mut cards, 5 + round % 6, &mut rng));

            let pruned = evaluator.score(&cards).unwrap();
            let brute = evaluator.score_exhaustive(&cards).unwrap();
            assert_eq!(pruned.category(), brute.category(), "{:?}", cards);
            assert_eq!(pruned.cards(), brute.cards(), "{:?}", cards);
            assert_eq!(pruned.kickers(), brute.kickers(), "{:?}", cards);
            assert_eq!(pruned, brute);
        }
    }

    #[test]
    fn test_pruned_matches_exhaustive_on_strong_hands() {
        // Random deals rarely hit the top categories, so check them directly.
        let evaluator = HandEvaluator::new();
        for hand in [
            "As Ks Qs Js Ts 9s 8s",
            "Ah 2h 3h 4h 5h 6h Kc",
            "7c 7d 7h 7s Kc Kd Kh",
            "Kc Kd Kh 5c 5d 5h 2s",
            "2h 5h 7h 9h Jh 3s 4s 6s 8s Ks",
            "Ac 2d 3h 4s 5c 6d 7h",
        ] {
            let cards = cards_from_str(hand);
            let pruned = evaluator.score(&cards).unwrap();
            let brute = evaluator.score_exhaustive(&cards).unwrap();
            assert_eq!(pruned.category(), brute.category(), "{}", hand);
            assert_eq!(pruned.cards(), brute.cards(), "{}", hand);
        }
    }

    #[test]
    fn test_hand_comparison() {
        let eval = HandEvaluator::new();

        // AA vs KK on a dry board - AA should win
        let aa = cards_from_str("AhAd");
        let kk = cards_from_str("KhKd");
        let board = cards_from_str("Qs Jc 7d 3s 2h");

        assert_eq!(eval.compare(&aa, &kk, &board).unwrap(), Ordering::Greater);
        assert_eq!(eval.compare(&kk, &aa, &board).unwrap(), Ordering::Less);

        // Board plays for both
        let board = cards_from_str("As Ks Qs Js Ts");
        assert_eq!(eval.compare(&aa, &kk, &board).unwrap(), Ordering::Equal);
    }
}
