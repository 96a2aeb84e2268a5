//! Report export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ReportFormat;

/// Where and how reports are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory reports are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Format used when none is requested (json, yaml, markdown)
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl ExportConfig {
    /// Parses the configured default format
    pub fn format(&self) -> Result<ReportFormat, ValidationError> {
        self.default_format
            .parse()
            .map_err(|_| ValidationError::UnknownReportFormat(self.default_format.clone()))
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        self.format()?;
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_format() -> String {
    "json".to_string()
}
