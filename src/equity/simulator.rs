//! Monte Carlo equity estimation.
//!
//! Each trial completes the board and deals every opponent two cards from
//! the cards nobody has seen, then compares the caller's best hand against
//! the strongest opponent. Trials are split across independent workers; each
//! worker owns its deck, generator and tally, and the tallies are only summed
//! once every worker has returned.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::iter::Sum;

use super::config::{SimulationConfig, DEFAULT_TRIALS};
use crate::cards::{cards_str, Card, Deck, Street};
use crate::error::{ConfigError, EquityError};
use crate::eval::HandEvaluator;

/// Cards in a player's private hand.
pub const HOLE_CARDS: usize = 2;

/// Cards on a complete board.
pub const BOARD_CARDS: usize = 5;

/// Result of one trial from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Win/tie/loss counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub win: u64,
    pub tie: u64,
    pub loss: u64,
}

impl OutcomeTally {
    /// Count one outcome.
    #[inline]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.win += 1,
            Outcome::Tie => self.tie += 1,
            Outcome::Loss => self.loss += 1,
        }
    }

    /// Count for one outcome.
    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Tie => self.tie,
            Outcome::Loss => self.loss,
        }
    }

    /// Number of trials counted.
    pub fn total(&self) -> u64 {
        self.win + self.tie + self.loss
    }

    /// Sum of two tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            win: self.win + other.win,
            tie: self.tie + other.tie,
            loss: self.loss + other.loss,
        }
    }
}

impl Sum for OutcomeTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}

/// What to simulate: the caller's hand, the known board and the table size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityRequest {
    /// The caller's hole cards.
    pub hole: [Card; HOLE_CARDS],
    /// Known community cards (0-5).
    #[serde(default)]
    pub board: Vec<Card>,
    /// Number of opponents with unknown hands.
    pub opponents: usize,
    /// Requested trial count. Truncated to a multiple of the worker count.
    #[serde(default = "default_trials")]
    pub trials: u64,
}

fn default_trials() -> u64 {
    DEFAULT_TRIALS
}

impl EquityRequest {
    /// Create a request with the default trial count.
    pub fn new(hole: [Card; HOLE_CARDS], board: Vec<Card>, opponents: usize) -> Self {
        Self {
            hole,
            board,
            opponents,
            trials: DEFAULT_TRIALS,
        }
    }

    /// Builder method: set the trial count.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Hole and board cards, which are excluded from every deal.
    pub fn known_cards(&self) -> Vec<Card> {
        [&self.hole[..], &self.board].concat()
    }

    /// Cards each trial draws from the deck.
    pub fn cards_needed(&self) -> usize {
        BOARD_CARDS.saturating_sub(self.board.len()) + HOLE_CARDS * self.opponents
    }
}

/// Estimated outcome probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityResponse {
    pub win: f64,
    pub tie: f64,
    pub loss: f64,
    /// Trials actually executed.
    pub trials: u64,
    /// Raw counts behind the probabilities.
    pub tally: OutcomeTally,
}

impl EquityResponse {
    /// Normalize a tally by the number of trials it counts.
    pub fn from_tally(tally: OutcomeTally) -> Self {
        let total = tally.total();
        let share = |count: u64| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        };
        Self {
            win: share(tally.win),
            tie: share(tally.tie),
            loss: share(tally.loss),
            trials: total,
            tally,
        }
    }

    /// Pot share: wins plus half of ties.
    pub fn equity(&self) -> f64 {
        self.win + 0.5 * self.tie
    }
}

/// Runs equity simulations with a fixed configuration.
#[derive(Debug, Clone)]
pub struct EquitySimulator {
    config: SimulationConfig,
    evaluator: HandEvaluator,
}

impl EquitySimulator {
    /// Create a simulator, rejecting an invalid configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator: HandEvaluator::new(),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Estimate win/tie/loss probabilities for `request`.
    pub fn estimate(&self, request: &EquityRequest) -> Result<EquityResponse, EquityError> {
        if request.board.len() > BOARD_CARDS {
            return Err(EquityError::TooManyBoardCards(request.board.len()));
        }
        if request.trials == 0 {
            return Err(EquityError::NoTrials);
        }

        let deck = Deck::without(&request.known_cards());
        let needed = request.cards_needed();
        if needed > deck.size() {
            return Err(EquityError::NotEnoughCards {
                needed,
                available: deck.size(),
            });
        }

        let workers = self.config.worker_count().min(request.trials as usize).max(1);
        let per_worker = request.trials / workers as u64;
        debug!(
            "estimating [{}] on {} [{}] vs {} opponents: {} trials over {} workers",
            cards_str(&request.hole),
            street_name(request.board.len()),
            cards_str(&request.board),
            request.opponents,
            per_worker * workers as u64,
            workers
        );

        let tallies = (0..workers)
            .into_par_iter()
            .map(|worker| self.run_worker(request, &deck, per_worker, worker))
            .collect::<Result<Vec<OutcomeTally>, EquityError>>()?;
        let tally: OutcomeTally = tallies.into_iter().sum();

        let response = EquityResponse::from_tally(tally);
        info!(
            "[{}] vs {} opponents: win {:.4} tie {:.4} loss {:.4} ({} trials)",
            cards_str(&request.hole),
            request.opponents,
            response.win,
            response.tie,
            response.loss,
            response.trials
        );
        Ok(response)
    }

    /// Run `trials` trials on a private copy of `template`.
    fn run_worker(
        &self,
        request: &EquityRequest,
        template: &Deck,
        trials: u64,
        worker: usize,
    ) -> Result<OutcomeTally, EquityError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
            None => StdRng::from_entropy(),
        };
        let mut deal = Deal::new(request, template.clone());
        let mut tally = OutcomeTally::default();

        for _ in 0..trials {
            tally.record(deal.play(&self.evaluator, &mut rng)?);
        }

        trace!("worker {} finished {} trials: {:?}", worker, trials, tally);
        Ok(tally)
    }
}

/// Per-worker scratch state for dealing and scoring trials.
struct Deal<'a> {
    request: &'a EquityRequest,
    deck: Deck,
    board: Vec<Card>,
    opponents: Vec<Card>,
    hand: Vec<Card>,
}

impl<'a> Deal<'a> {
    fn new(request: &'a EquityRequest, deck: Deck) -> Self {
        Self {
            request,
            deck,
            board: Vec::with_capacity(BOARD_CARDS),
            opponents: Vec::with_capacity(HOLE_CARDS * request.opponents),
            hand: Vec::with_capacity(HOLE_CARDS + BOARD_CARDS),
        }
    }

    /// Deal one random completion and score it.
    fn play(&mut self, evaluator: &HandEvaluator, rng: &mut StdRng) -> Result<Outcome, EquityError> {
        self.deck.reset();
        self.board.clear();
        self.board.extend_from_slice(&self.request.board);
        self.opponents.clear();

        let dealt = self.deck.fill(&mut self.board, BOARD_CARDS, rng)
            && self
                .deck
                .fill(&mut self.opponents, HOLE_CARDS * self.request.opponents, rng);
        if !dealt {
            return Err(EquityError::NotEnoughCards {
                needed: self.request.cards_needed(),
                available: self.deck.size(),
            });
        }

        if self.request.opponents == 0 {
            return Ok(Outcome::Win);
        }

        self.hand.clear();
        self.hand.extend_from_slice(&self.request.hole);
        self.hand.extend_from_slice(&self.board);
        let mine = evaluator.score(&self.hand)?;

        let mut best = None;
        for hole in self.opponents.chunks(HOLE_CARDS) {
            self.hand.clear();
            self.hand.extend_from_slice(hole);
            self.hand.extend_from_slice(&self.board);
            let theirs = evaluator.score(&self.hand)?;
            if best.as_ref().map_or(true, |b| theirs > *b) {
                best = Some(theirs);
            }
        }

        Ok(match best.map(|b| mine.cmp(&b)) {
            Some(Ordering::Less) => Outcome::Loss,
            Some(Ordering::Equal) => Outcome::Tie,
            Some(Ordering::Greater) | None => Outcome::Win,
        })
    }
}

fn street_name(board_len: usize) -> String {
    match Street::from_board_len(board_len) {
        Some(street) => street.to_string(),
        None => format!("{}-card board", board_len),
    }
}

/// Estimate equity with the default configuration.
///
/// `trials` is split across one worker per rayon thread, so the executed
/// count in the response may be slightly lower than requested.
pub fn estimate_equity(
    hole: [Card; HOLE_CARDS],
    board: &[Card],
    opponents: usize,
    trials: u64,
) -> Result<EquityResponse, EquityError> {
    let simulator = EquitySimulator::new(SimulationConfig::default())?;
    let request = EquityRequest::new(hole, board.to_vec(), opponents).with_trials(trials);
    simulator.estimate(&request)
}
