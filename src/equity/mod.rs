//! Monte Carlo equity estimation.
//!
//! ## Modules
//!
//! - `config`: worker count and seeding for the simulator
//! - `simulator`: `EquitySimulator`, request/response types and tallies

pub mod config;
pub mod simulator;

pub use config::{SimulationConfig, DEFAULT_TRIALS};
pub use simulator::{
    estimate_equity, EquityRequest, EquityResponse, EquitySimulator, Outcome, OutcomeTally,
    BOARD_CARDS, HOLE_CARDS,
};
