//! Report Writer Port - Persistence interface for rendered analysis reports.
//!
//! This port defines the contract for storing a rendered report somewhere
//! durable. The application depends on this trait, while adapters (like
//! `LocalReportWriter`) provide the implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Port for persisting rendered reports.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial content on failure)
/// - Return the location the report was written to
/// - Overwrite a previous report with the same filename
///
/// # Usage
///
/// ```rust,ignore
/// let writer: &dyn ReportWriter = get_writer();
///
/// let exported = renderer.render(&report, ReportFormat::Json)?;
/// let path = writer.write(&exported).await?;
/// ```
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Persist an exported report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the report cannot be stored.
    async fn write(&self, report: &ExportedReport) -> Result<PathBuf, ExportError>;
}

/// Formats a report can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Full report as pretty-printed JSON.
    Json,
    /// Full report as YAML.
    Yaml,
    /// Human-readable summary.
    Markdown,
}

impl ReportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Yaml => "application/yaml",
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Yaml => write!(f, "yaml"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered report with content and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    /// The rendered content.
    pub content: String,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename, extension included.
    pub filename: String,
    /// The format that was used.
    pub format: ReportFormat,
}

impl ExportedReport {
    /// Create a new exported report named `{base_filename}.{extension}`.
    pub fn new(content: String, format: ReportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Report could not be serialized.
    #[error("Report serialization failed: {0}")]
    Serialization(String),

    /// I/O error while writing.
    #[error("I/O error during export: {0}")]
    Io(String),
}

impl ExportError {
    /// Create a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }

    /// Create an I/O error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
