//! TrueSkill win-probability estimator
//!
//! This module estimates the probability of one team outscoring another
//! under the Gaussian skill model, using the TrueSkill configuration from
//! the skillratings crate.

use crate::error::PredictionError;
use crate::types::SkillRating;
use serde::{Deserialize, Serialize};
use skillratings::trueskill::TrueSkillConfig;
use statrs::distribution::{ContinuousCDF, Normal};

/// Extended configuration for the TrueSkill prediction model
/// This wraps the skillratings TrueSkillConfig with additional parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedTrueSkillConfig {
    /// Core TrueSkill parameters
    pub trueskill_config: TrueSkillConfig,
    /// Initial rating for new players
    pub initial_rating: f64,
    /// Initial uncertainty for new players
    pub initial_uncertainty: f64,
}

impl Default for ExtendedTrueSkillConfig {
    fn default() -> Self {
        Self {
            trueskill_config: TrueSkillConfig::new(),
            initial_rating: 25.0,
            initial_uncertainty: 25.0 / 3.0,
        }
    }
}

impl ExtendedTrueSkillConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.trueskill_config.beta.is_finite() || self.trueskill_config.beta <= 0.0 {
            return Err(PredictionError::ConfigurationError {
                message: "Beta must be positive".to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.trueskill_config.draw_probability) {
            return Err(PredictionError::ConfigurationError {
                message: "Draw probability must be between 0 and 1".to_string(),
            }
            .into());
        }

        if self.trueskill_config.default_dynamics < 0.0 {
            return Err(PredictionError::ConfigurationError {
                message: "Dynamics factor must be non-negative".to_string(),
            }
            .into());
        }

        if self.initial_uncertainty <= 0.0 {
            return Err(PredictionError::ConfigurationError {
                message: "Initial uncertainty must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Win-probability estimator over TrueSkill ratings
///
/// Beta is taken from the supplied configuration and must match the rating
/// system that produced the input ratings; there is no hidden process-wide
/// environment.
#[derive(Debug, Clone)]
pub struct WinProbabilityEstimator {
    config: ExtendedTrueSkillConfig,
    standard_normal: Normal,
}

impl WinProbabilityEstimator {
    /// Create a new estimator with the given configuration
    pub fn new(config: ExtendedTrueSkillConfig) -> crate::error::Result<Self> {
        config.validate()?;

        let standard_normal = Normal::new(0.0, 1.0).map_err(|e| {
            PredictionError::InternalError {
                message: format!("Failed to construct standard normal distribution: {}", e),
            }
        })?;

        Ok(Self {
            config,
            standard_normal,
        })
    }

    /// Get the active configuration
    pub fn config(&self) -> &ExtendedTrueSkillConfig {
        &self.config
    }

    /// Get default rating for new players
    pub fn default_rating(&self) -> SkillRating {
        SkillRating {
            mu: self.config.initial_rating,
            sigma: self.config.initial_uncertainty,
        }
    }

    /// Estimate the probability that `team_one` outscores `team_two`
    ///
    /// Computes `Φ(Δμ / sqrt(n·β² + Σσ²))` where `Δμ` is the difference of
    /// summed mean skills, `Σσ²` the summed rating variances over both teams
    /// and `n` the total player count. The result is 0.5 exactly when the
    /// summed means are equal, and increases with `Δμ`.
    ///
    /// Teams may differ in size; one team may even be empty, which callers
    /// treat as incomplete match data rather than a 50/50 matchup. Both
    /// teams empty is an error, as is any rating with a negative sigma or a
    /// non-finite component.
    pub fn win_probability(
        &self,
        team_one: &[SkillRating],
        team_two: &[SkillRating],
    ) -> crate::error::Result<f64> {
        let size = team_one.len() + team_two.len();
        if size == 0 {
            return Err(PredictionError::InvalidRatingInput {
                reason: "Both teams are empty".to_string(),
            }
            .into());
        }

        for rating in team_one.iter().chain(team_two.iter()) {
            validate_rating(rating)?;
        }

        let delta_mu: f64 = team_one.iter().map(|r| r.mu).sum::<f64>()
            - team_two.iter().map(|r| r.mu).sum::<f64>();
        let sum_sigma_sq: f64 = team_one
            .iter()
            .chain(team_two.iter())
            .map(|r| r.sigma * r.sigma)
            .sum();

        let beta = self.config.trueskill_config.beta;
        let denominator = (size as f64 * beta * beta + sum_sigma_sq).sqrt();

        Ok(self.standard_normal.cdf(delta_mu / denominator))
    }
}

/// Reject ratings the skill model cannot meaningfully evaluate
fn validate_rating(rating: &SkillRating) -> crate::error::Result<()> {
    if !rating.mu.is_finite() {
        return Err(PredictionError::InvalidRatingInput {
            reason: format!("Rating mean must be finite, got {}", rating.mu),
        }
        .into());
    }

    if !rating.sigma.is_finite() || rating.sigma < 0.0 {
        return Err(PredictionError::InvalidRatingInput {
            reason: format!(
                "Rating uncertainty must be finite and non-negative, got {}",
                rating.sigma
            ),
        }
        .into());
    }

    Ok(())
}
