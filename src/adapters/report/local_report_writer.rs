//! Local Filesystem Report Writer - Implementation of ReportWriter.
//!
//! Writes rendered reports into a single output directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{ExportError, ExportedReport, ReportWriter};

/// Local filesystem writer for analysis reports.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// # Usage
///
/// ```rust,ignore
/// let writer = LocalReportWriter::new("reports");
/// let path = writer.write(&exported).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalReportWriter {
    /// Directory reports are written into.
    base_path: PathBuf,
}

impl LocalReportWriter {
    /// Creates a writer rooted at `base_path`. The directory is created on first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolves the final path, rejecting names that would escape the base directory.
    fn report_path(&self, filename: &str) -> Result<PathBuf, ExportError> {
        let is_plain_name = Path::new(filename)
            .file_name()
            .is_some_and(|name| name == filename);
        if !is_plain_name {
            return Err(ExportError::io(format!(
                "Invalid report filename: {:?}",
                filename
            )));
        }
        Ok(self.base_path.join(filename))
    }
}

#[async_trait]
impl ReportWriter for LocalReportWriter {
    async fn write(&self, report: &ExportedReport) -> Result<PathBuf, ExportError> {
        let final_path = self.report_path(&report.filename)?;
        let temp_path = self.base_path.join(format!("{}.tmp", report.filename));

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create report directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        // Write to temp file
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(report.content.as_bytes()).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        // Sync to disk
        file.sync_all().await.map_err(|e| {
            ExportError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        // Atomic rename
        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        Ok(final_path)
    }
}
