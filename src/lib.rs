//! Rift Room - win prediction support for inhouse matchmaking bots
//!
//! This crate estimates expected win probabilities over TrueSkill-style
//! ratings, adapts (side, role)-keyed rosters into team matchups, and
//! manages the bot's locally stored Discord token.

pub mod config;
pub mod error;
pub mod prediction;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{PredictionError, Result};
pub use types::*;

// Re-export key components
pub use config::{AppConfig, CredentialStore};
pub use prediction::{blue_side_winrate, ExtendedTrueSkillConfig, WinProbabilityEstimator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
