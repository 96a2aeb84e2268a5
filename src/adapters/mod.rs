//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `report` - Report rendering (JSON, YAML, Markdown) and local file output

pub mod report;

pub use report::{LocalReportWriter, ReportRenderer};
