//! Error types for evaluation, simulation, configuration and card parsing.

use thiserror::Error;

/// Errors from the hand evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Fewer than five cards were supplied.
    #[error("need at least 5 cards to score a hand, got {0}")]
    NotEnoughCards(usize),

    /// The planner finished without forming any hand. Only possible if the
    /// category graph is unsound, since high card is always formable.
    #[error("no hand category could be formed; the evaluation planner is unsound")]
    NoHandFormed,
}

/// Errors from the equity simulator.
#[derive(Debug, Error)]
pub enum EquityError {
    /// The board holds more than five cards.
    #[error("board has {0} cards, at most 5 allowed")]
    TooManyBoardCards(usize),

    /// Zero trials were requested.
    #[error("at least one trial is required")]
    NoTrials,

    /// The deck cannot cover the board completion plus all opponent hands.
    #[error("deal needs {needed} cards but only {available} remain in the deck")]
    NotEnoughCards {
        /// Cards needed per trial.
        needed: usize,
        /// Cards left after exclusions.
        available: usize,
    },

    /// Scoring a participant failed.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The simulation configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading or validating a simulation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Worker count was set to zero.
    #[error("worker count must be at least 1")]
    ZeroWorkers,

    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from parsing card notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("card '{0}' must be a rank followed by a suit, e.g. 'Kd'")]
    InvalidLength(String),

    #[error("unknown rank '{0}', expected one of 23456789TJQKA")]
    InvalidRank(String),

    #[error("unknown suit '{0}', expected one of cdhs")]
    InvalidSuit(String),
}
