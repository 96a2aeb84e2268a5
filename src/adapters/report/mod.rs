//! Report adapters - rendering and persisting analysis reports.

mod local_report_writer;
mod renderer;

pub use local_report_writer::LocalReportWriter;
pub use renderer::ReportRenderer;
