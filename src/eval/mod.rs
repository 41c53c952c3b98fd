//! Hand evaluation.
//!
//! ## Modules
//!
//! - `category`: the ten hand categories and their strength order
//! - `detect`: per-category finders over sorted cards
//! - `score`: `Score` and its tie-break ordering
//! - `planner`: category dependency graph driving the pruned search
//! - `evaluator`: `HandEvaluator` and the `score` entry points

pub mod category;
pub mod detect;
pub mod evaluator;
pub mod planner;
pub mod score;

pub use category::HandCategory;
pub use evaluator::{score, score_exhaustive, HandEvaluator, MIN_CARDS};
pub use planner::{planner, EvaluationNode, EvaluationPlanner};
pub use score::Score;
