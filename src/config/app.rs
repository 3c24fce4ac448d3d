//! Main application configuration
//!
//! This module defines the primary configuration structures for the rift-room
//! prediction service, including environment variable loading, TOML file
//! loading and validation.

use crate::prediction::estimator::ExtendedTrueSkillConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use skillratings::trueskill::TrueSkillConfig;
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub prediction: PredictionSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Prediction-model settings
///
/// Mirrors the TrueSkill environment that produced the stored ratings; the
/// beta here must match that environment or win estimates drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionSettings {
    /// Assumed per-performance variance of the skill model
    pub beta: f64,
    /// Draw probability of the underlying rating environment
    pub draw_probability: f64,
    /// Dynamics factor of the underlying rating environment
    pub default_dynamics: f64,
    /// Initial mean skill for unrated players
    pub initial_rating: f64,
    /// Initial uncertainty for unrated players
    pub initial_uncertainty: f64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "rift-room".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for PredictionSettings {
    fn default() -> Self {
        let trueskill = TrueSkillConfig::new();
        Self {
            beta: trueskill.beta,
            draw_probability: trueskill.draw_probability,
            default_dynamics: trueskill.default_dynamics,
            initial_rating: 25.0,
            initial_uncertainty: 25.0 / 3.0,
        }
    }
}

impl From<PredictionSettings> for ExtendedTrueSkillConfig {
    fn from(settings: PredictionSettings) -> Self {
        Self {
            trueskill_config: TrueSkillConfig {
                draw_probability: settings.draw_probability,
                beta: settings.beta,
                default_dynamics: settings.default_dynamics,
            },
            initial_rating: settings.initial_rating,
            initial_uncertainty: settings.initial_uncertainty,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Prediction settings
        if let Ok(beta) = env::var("TRUESKILL_BETA") {
            config.prediction.beta = beta
                .parse()
                .map_err(|_| anyhow!("Invalid TRUESKILL_BETA value: {}", beta))?;
        }
        if let Ok(draw) = env::var("TRUESKILL_DRAW_PROBABILITY") {
            config.prediction.draw_probability = draw
                .parse()
                .map_err(|_| anyhow!("Invalid TRUESKILL_DRAW_PROBABILITY value: {}", draw))?;
        }
        if let Ok(dynamics) = env::var("TRUESKILL_DYNAMICS") {
            config.prediction.default_dynamics = dynamics
                .parse()
                .map_err(|_| anyhow!("Invalid TRUESKILL_DYNAMICS value: {}", dynamics))?;
        }
        if let Ok(rating) = env::var("INITIAL_RATING") {
            config.prediction.initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid INITIAL_RATING value: {}", rating))?;
        }
        if let Ok(uncertainty) = env::var("INITIAL_UNCERTAINTY") {
            config.prediction.initial_uncertainty = uncertainty
                .parse()
                .map_err(|_| anyhow!("Invalid INITIAL_UNCERTAINTY value: {}", uncertainty))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate prediction settings
    if !config.prediction.beta.is_finite() || config.prediction.beta <= 0.0 {
        return Err(anyhow!("Beta must be positive"));
    }
    if !(0.0..=1.0).contains(&config.prediction.draw_probability) {
        return Err(anyhow!("Draw probability must be between 0 and 1"));
    }
    if config.prediction.default_dynamics < 0.0 {
        return Err(anyhow!("Dynamics factor must be non-negative"));
    }
    if config.prediction.initial_uncertainty <= 0.0 {
        return Err(anyhow!("Initial uncertainty must be positive"));
    }

    Ok(())
}
