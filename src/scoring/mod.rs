pub mod category;
pub mod config;
pub mod engine;
pub mod explanation;
pub mod factors;
pub mod validation;

pub use category::PriorityCategory;
pub use config::*;
pub use engine::{calculate_score, round2, FactorContribution, ScoreResult};
pub use explanation::{explain, Tag};
pub use factors::{Bound, Factor};
pub use validation::validate_scoring;
