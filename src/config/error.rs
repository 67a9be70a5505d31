//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("CORS origins must be listed in production")]
    CorsOriginsRequired,

    #[error("Index path must not be empty")]
    EmptyIndexPath,

    #[error("AI base URL must use http or https")]
    InvalidBaseUrl,

    #[error("AI model must not be empty")]
    EmptyModel,

    #[error("AI timeout must be greater than zero")]
    InvalidAiTimeout,

    #[error("AI max retries must be at most 5")]
    TooManyRetries,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Max output tokens must be greater than zero")]
    InvalidMaxOutputTokens,

    #[error("Session idle TTL must be between 1 second and one year")]
    InvalidIdleTtl,

    #[error("Session sweep interval must be between 1 second and one day")]
    InvalidSweepInterval,
}
