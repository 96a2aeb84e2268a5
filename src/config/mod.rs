//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_CRITERIA` prefix and nested values use double underscores as separators.
//! Every setting has a default, so loading succeeds with no variables set.
//!
//! # Example
//!
//! ```no_run
//! use decision_criteria::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports written to {}", config.export.output_dir.display());
//! ```

mod analysis;
mod error;
mod export;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analysis defaults (Hurwitz α, probability tolerance)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Report export (output directory, default format)
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging (filter directive, JSON output)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_CRITERIA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_CRITERIA__ANALYSIS__DEFAULT_ALPHA=0.3` -> `analysis.default_alpha = 0.3`
    /// - `DECISION_CRITERIA__EXPORT__OUTPUT_DIR=out` -> `export.output_dir = "out"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_CRITERIA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ReportFormat;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("DECISION_CRITERIA__ANALYSIS__DEFAULT_ALPHA");
        env::remove_var("DECISION_CRITERIA__ANALYSIS__PROBABILITY_TOLERANCE");
        env::remove_var("DECISION_CRITERIA__EXPORT__OUTPUT_DIR");
        env::remove_var("DECISION_CRITERIA__EXPORT__DEFAULT_FORMAT");
        env::remove_var("DECISION_CRITERIA__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis.default_alpha, 0.5);
        assert_eq!(config.analysis.probability_tolerance, 0.01);
        assert_eq!(config.export.output_dir, PathBuf::from("reports"));
        assert_eq!(config.export.default_format, "json");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_CRITERIA__ANALYSIS__DEFAULT_ALPHA", "0.25");
        env::set_var("DECISION_CRITERIA__EXPORT__OUTPUT_DIR", "out");
        env::set_var("DECISION_CRITERIA__EXPORT__DEFAULT_FORMAT", "markdown");
        env::set_var("DECISION_CRITERIA__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.default_alpha, 0.25);
        assert_eq!(config.export.output_dir, PathBuf::from("out"));
        assert_eq!(config.export.format(), Ok(ReportFormat::Markdown));
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_alpha() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_CRITERIA__ANALYSIS__DEFAULT_ALPHA", "2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDefaultAlpha(2.0))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = AppConfig {
            export: ExportConfig {
                default_format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownReportFormat(_))
        ));
    }
}
