//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::criteria::DEFAULT_HURWITZ_ALPHA;

/// Defaults applied when running an analysis
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Hurwitz α used when a request does not supply one
    #[serde(default = "default_alpha")]
    pub default_alpha: f64,

    /// Allowed deviation of a probability vector's sum from 1
    #[serde(default = "default_probability_tolerance")]
    pub probability_tolerance: f64,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.default_alpha) {
            return Err(ValidationError::InvalidDefaultAlpha(self.default_alpha));
        }
        if !(self.probability_tolerance > 0.0 && self.probability_tolerance < 1.0) {
            return Err(ValidationError::InvalidProbabilityTolerance(
                self.probability_tolerance,
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_alpha: default_alpha(),
            probability_tolerance: default_probability_tolerance(),
        }
    }
}

fn default_alpha() -> f64 {
    DEFAULT_HURWITZ_ALPHA
}

fn default_probability_tolerance() -> f64 {
    0.01
}
