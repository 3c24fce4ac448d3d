//! Error types for the win-prediction service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific prediction scenarios
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Invalid rating input: {reason}")]
    InvalidRatingInput { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Credential storage error: {message}")]
    CredentialError { message: String },

    #[error("Internal service error: {message}")]
    InternalError { message: String },
}
