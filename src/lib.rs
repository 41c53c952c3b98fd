//! # Poker Equity
//!
//! Texas Hold'em hand evaluation and Monte Carlo equity estimation.
//!
//! ## Features
//!
//! - **Hand Scoring**: Best five-card hand out of five or more cards, with a
//!   total order over scores
//! - **Pruned Search**: A category dependency graph skips categories that
//!   cannot beat the best hand already found
//! - **Parallel Simulation**: Trials split across rayon workers, each with its
//!   own deck and generator
//! - **Reproducible Runs**: Optional seeding per worker
//!
//! ## Quick Start
//!
//! ```
//! use poker_equity::cards::parse_cards;
//! use poker_equity::{score, EquityRequest, EquitySimulator, HandCategory, SimulationConfig};
//!
//! let hand = parse_cards("As Ks Qs Js Ts 2d 3c").unwrap();
//! assert_eq!(score(&hand).unwrap().category(), HandCategory::RoyalFlush);
//!
//! let hole = parse_cards("Ah Ad").unwrap();
//! let simulator = EquitySimulator::new(SimulationConfig::default().with_seed(1)).unwrap();
//! let request = EquityRequest::new([hole[0], hole[1]], vec![], 1).with_trials(2_000);
//! let response = simulator.estimate(&request).unwrap();
//! assert!(response.win > 0.7);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, notation parsing and the exclusion-aware deck
//! - [`eval`]: Hand categories, detection, scores and the evaluation planner
//! - [`equity`]: Monte Carlo simulator and its configuration
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        EquitySimulator                          │
//! │  - Splits trials across workers   - Sums per-worker tallies     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ per trial: deal + score
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    ┌─────────┐         ┌─────────────┐       ┌─────────────┐
//!    │  Deck   │         │HandEvaluator│──────►│  Evaluation │
//!    │         │         │   / Score   │       │   Planner   │
//!    └─────────┘         └─────────────┘       └─────────────┘
//! ```

#![warn(missing_docs)]

/// Cards, notation and decks.
pub mod cards;

/// Hand evaluation.
///
/// Scores the best hand from a pool of cards and orders scores.
pub mod eval;

/// Equity simulation.
pub mod equity;

/// Error types.
pub mod error;

// Re-export commonly used types at crate root for convenience
pub use cards::{Card, Deck, Suit};
pub use equity::{estimate_equity, EquityRequest, EquityResponse, EquitySimulator, SimulationConfig};
pub use error::{CardParseError, ConfigError, EquityError, EvalError};
pub use eval::{score, HandCategory, HandEvaluator, Score};
