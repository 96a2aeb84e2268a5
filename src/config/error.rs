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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Default Hurwitz alpha must be within [0, 1], got {0}")]
    InvalidDefaultAlpha(f64),

    #[error("Probability tolerance must be within (0, 1), got {0}")]
    InvalidProbabilityTolerance(f64),

    #[error("Unknown report format: {0}")]
    UnknownReportFormat(String),
}
