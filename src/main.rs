//! Main entry point for the Rift Room prediction tool
//!
//! Loads configuration, makes sure a Discord token is available when asked
//! to, and prints the expected blue-side winrate for a rostered match.

use anyhow::{Context, Result};
use clap::Parser;
use rift_room::config::{validate_config, AppConfig, CredentialStore};
use rift_room::prediction::{blue_side_winrate, WinProbabilityEstimator};
use rift_room::types::{MatchRoster, Side};
use rift_room::utils::{format_winrate, rating_difference};
use std::path::PathBuf;
use tracing::{info, warn};

/// Rift Room Prediction Tool - expected winrates for inhouse matches
#[derive(Parser)]
#[command(
    name = "rift-room",
    version,
    about = "Win-probability estimation for inhouse matchmaking",
    long_about = "Rift Room estimates the expected blue-side winrate of an inhouse match \
                 from the TrueSkill ratings of the rostered players, and manages the \
                 locally stored Discord token the surrounding bot runs with."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Roster to predict a winrate for
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to a roster file (JSON format)"
    )]
    roster: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// TrueSkill beta override
    #[arg(
        long,
        value_name = "BETA",
        help = "Override the assumed per-performance variance of the skill model"
    )]
    beta: Option<f64>,

    /// Ensure a Discord token is stored
    #[arg(long, help = "Check for a stored Discord token, prompting if absent")]
    token_check: bool,

    /// Dry run mode (validate config and exit)
    #[arg(
        long,
        help = "Validate configuration and exit without doing anything else"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Print the expected winrates for a roster file
fn predict_roster(config: &AppConfig, path: &PathBuf) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let roster: MatchRoster = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roster file {}", path.display()))?;

    info!("Loaded roster with {} slots", roster.len());

    let estimator = WinProbabilityEstimator::new(config.prediction.clone().into())?;
    let blue_winrate = blue_side_winrate(&estimator, &roster)?;

    let blue_mean_sum: f64 = roster.side_ratings(&Side::Blue).iter().map(|r| r.mu).sum();
    let red_mean_sum: f64 = roster.side_ratings(&Side::Red).iter().map(|r| r.mu).sum();

    println!("Blue side winrate: {}", format_winrate(blue_winrate));
    println!("Red side winrate:  {}", format_winrate(1.0 - blue_winrate));
    println!(
        "Mean skill gap:    {:.1}",
        rating_difference(blue_mean_sum, red_mean_sum)
    );

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration file wins over environment, CLI flags win over both
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };
    if let Some(log_level) = args.log_level {
        config.service.log_level = log_level;
    }
    if let Some(beta) = args.beta {
        config.prediction.beta = beta;
    }
    validate_config(&config)?;

    init_logging(&config.service.log_level)?;
    info!("Starting {} v{}", config.service.name, rift_room::VERSION);

    if args.dry_run {
        info!("Configuration is valid");
        return Ok(());
    }

    if args.token_check {
        let store = CredentialStore::from_env()?;
        let token = store.load_or_prompt()?;
        info!("Discord token present ({} characters)", token.len());
    }

    match &args.roster {
        Some(path) => predict_roster(&config, path)?,
        None => {
            if !args.token_check {
                warn!("Nothing to do; pass --roster <FILE> to predict a match");
            }
        }
    }

    Ok(())
}
