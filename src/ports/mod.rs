//! Ports - Trait seams between the application and the outside world.
//!
//! Adapters in `crate::adapters` implement these traits.

mod report_writer;

pub use report_writer::{ExportError, ExportedReport, ReportFormat, ReportWriter};
