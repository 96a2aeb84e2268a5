//! Analysis command handlers.
//!
//! Handlers that run decision criteria against a payoff matrix.

mod run_analysis;

pub use run_analysis::{
    AnalysisError, AnalysisReport, AnalysisSettings, RunAnalysisCommand, RunAnalysisHandler,
};
