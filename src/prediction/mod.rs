//! Win-probability estimation for inhouse matches
//!
//! This module computes expected win probabilities over TrueSkill-style
//! ratings and adapts roster tables into the two-team shape the estimator
//! works on.

pub mod estimator;
pub mod side;

// Re-export commonly used types
pub use estimator::{ExtendedTrueSkillConfig, WinProbabilityEstimator};
pub use side::blue_side_winrate;
