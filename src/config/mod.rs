//! Configuration management for the rift-room service
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, default values, and local credential storage.

pub mod app;
pub mod credentials;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, PredictionSettings, ServiceSettings};
pub use credentials::CredentialStore;
