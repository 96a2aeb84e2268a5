//! RunAnalysisHandler - Command handler that evaluates every criterion of a mode.
//!
//! Validates the mode parameters, builds each criterion through the factory,
//! evaluates it against the payoff matrix and feeds a fresh aggregator. A
//! criterion that faults is recorded as undetermined; the batch continues.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::domain::aggregation::{AnalysisStatistics, Recommendation, ResultsAggregator};
use crate::domain::criteria::{
    Criterion, CriterionFactory, CriterionParams, CriterionResult, EvaluationMode,
    DEFAULT_HURWITZ_ALPHA,
};
use crate::domain::foundation::AnalysisId;
use crate::domain::matrix::PayoffMatrix;

/// Command to analyse a payoff matrix under one evaluation mode.
#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    pub matrix: PayoffMatrix,
    pub mode: EvaluationMode,
    /// Hurwitz α; the configured default applies when absent.
    pub alpha: Option<f64>,
    /// State probabilities; required in risk mode.
    pub probabilities: Option<Vec<f64>>,
}

impl RunAnalysisCommand {
    /// Command for decisions under uncertainty.
    pub fn uncertainty(matrix: PayoffMatrix, alpha: Option<f64>) -> Self {
        Self {
            matrix,
            mode: EvaluationMode::Uncertainty,
            alpha,
            probabilities: None,
        }
    }

    /// Command for decisions under risk.
    pub fn risk(matrix: PayoffMatrix, probabilities: Vec<f64>) -> Self {
        Self {
            matrix,
            mode: EvaluationMode::Risk,
            alpha: None,
            probabilities: Some(probabilities),
        }
    }
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    pub matrix: PayoffMatrix,
    /// Parameters the criteria were built with.
    pub parameters: CriterionParams,
    /// Successful criterion results, in evaluation order.
    pub results: Vec<CriterionResult>,
    /// One recommendation per criterion, failures included.
    pub recommendations: Vec<Recommendation>,
    pub statistics: AnalysisStatistics,
}

/// Errors rejecting an analysis before any criterion runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Risk analysis requires state probabilities")]
    MissingProbabilities,

    #[error("Invalid probabilities: {0}")]
    InvalidProbabilities(String),

    #[error("Hurwitz alpha must be within [0, 1], got {0}")]
    InvalidAlpha(f64),
}

/// Tunables the handler reads from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub default_alpha: f64,
    pub probability_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_alpha: DEFAULT_HURWITZ_ALPHA,
            probability_tolerance: 0.01,
        }
    }
}

impl From<&AnalysisConfig> for AnalysisSettings {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            default_alpha: config.default_alpha,
            probability_tolerance: config.probability_tolerance,
        }
    }
}

/// Handler for running analyses.
#[derive(Debug, Clone, Default)]
pub struct RunAnalysisHandler {
    settings: AnalysisSettings,
}

impl RunAnalysisHandler {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<AnalysisReport, AnalysisError> {
        // 1. Validate mode parameters
        let params = self.params_for(&cmd)?;

        let analysis_id = AnalysisId::new();
        if cmd.matrix.is_degenerate() {
            warn!(
                analysis_id = %analysis_id,
                strategies = cmd.matrix.strategy_count(),
                states = cmd.matrix.state_count(),
                "Payoff matrix is degenerate, all criteria will be undetermined"
            );
        }

        // 2. Fresh aggregator per run
        let mut aggregator = ResultsAggregator::new();
        aggregator.set_analysis_type(cmd.mode);

        // 3. Evaluate each criterion of the mode in isolation
        let mut results = Vec::new();
        for &kind in cmd.mode.criteria() {
            let outcome = CriterionFactory::create_kind(kind, &params)
                .and_then(|criterion| criterion.calculate(&cmd.matrix));

            match outcome {
                Ok(result) => {
                    debug!(
                        analysis_id = %analysis_id,
                        criterion = %kind,
                        strategy = %result.strategy,
                        optimal_value = ?result.optimal_value,
                        "Criterion evaluated"
                    );
                    aggregator.add_result(result.clone());
                    results.push(result);
                }
                Err(err) => {
                    warn!(
                        analysis_id = %analysis_id,
                        criterion = %kind,
                        error = %err,
                        "Criterion failed, recording as undetermined"
                    );
                    aggregator.add_failure(kind.display_name(), kind, err.to_string());
                }
            }
        }

        // 4. Snapshot
        Ok(AnalysisReport {
            analysis_id,
            matrix: cmd.matrix,
            parameters: params,
            results,
            recommendations: aggregator.recommendations().to_vec(),
            statistics: aggregator.statistics(),
        })
    }

    fn params_for(&self, cmd: &RunAnalysisCommand) -> Result<CriterionParams, AnalysisError> {
        match cmd.mode {
            EvaluationMode::Uncertainty => {
                let alpha = cmd.alpha.unwrap_or(self.settings.default_alpha);
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(AnalysisError::InvalidAlpha(alpha));
                }
                Ok(CriterionParams::new().with_alpha(alpha))
            }
            EvaluationMode::Risk => {
                let probabilities = cmd
                    .probabilities
                    .clone()
                    .ok_or(AnalysisError::MissingProbabilities)?;
                self.check_probabilities(&probabilities)?;
                Ok(CriterionParams::new().with_probabilities(probabilities))
            }
        }
    }

    fn check_probabilities(&self, probabilities: &[f64]) -> Result<(), AnalysisError> {
        if probabilities.is_empty() {
            return Err(AnalysisError::MissingProbabilities);
        }
        if let Some(p) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(AnalysisError::InvalidProbabilities(format!(
                "each probability must be a non-negative number, got {}",
                p
            )));
        }
        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > self.settings.probability_tolerance {
            return Err(AnalysisError::InvalidProbabilities(format!(
                "probabilities must sum to 1 (±{}), got {}",
                self.settings.probability_tolerance, sum
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregation::{Confidence, RecommendationDetails};
    use crate::domain::criteria::CriterionKind;

    fn scenario_matrix() -> PayoffMatrix {
        PayoffMatrix::builder()
            .states(vec!["Boom", "Growth", "Stagnation", "Recession"])
            .row("Bonds", vec![320.0, 780.0, 640.0, 500.0])
            .row("Stocks", vec![900.0, 400.0, 300.0, 700.0])
            .row("Property", vec![600.0, 950.0, 200.0, 450.0])
            .row("Savings", vec![500.0, 550.0, 850.0, 300.0])
            .build()
    }

    fn handler() -> RunAnalysisHandler {
        RunAnalysisHandler::new(AnalysisSettings::default())
    }

    #[test]
    fn uncertainty_runs_four_criteria() {
        let report = handler()
            .handle(RunAnalysisCommand::uncertainty(scenario_matrix(), None))
            .unwrap();

        let strategies: Vec<_> = report.results.iter().map(|r| r.strategy.as_str()).collect();
        assert_eq!(strategies, vec!["Bonds", "Property", "Savings", "Stocks"]);
        assert_eq!(report.recommendations.len(), 4);
        assert_eq!(report.parameters.alpha, Some(0.5));

        let rec = &report.statistics.most_frequent;
        assert_eq!(rec.strategy.as_deref(), Some("Bonds"));
        assert!(rec.has_tie);
        assert_eq!(rec.percentage.value(), 25);
        assert_eq!(rec.confidence, Confidence::Low);
        assert_eq!(report.statistics.analysis_type, Some(EvaluationMode::Uncertainty));
    }

    #[test]
    fn risk_with_uniform_probabilities_agrees() {
        let report = handler()
            .handle(RunAnalysisCommand::risk(scenario_matrix(), vec![0.25; 4]))
            .unwrap();

        assert_eq!(report.results.len(), 2);
        let rec = &report.statistics.most_frequent;
        assert_eq!(rec.strategy.as_deref(), Some("Stocks"));
        assert_eq!(rec.percentage.value(), 100);
        assert_eq!(rec.confidence, Confidence::High);
        assert!(!rec.has_tie);
    }

    #[test]
    fn configured_default_alpha_is_used() {
        let handler = RunAnalysisHandler::new(AnalysisSettings {
            default_alpha: 1.0,
            ..Default::default()
        });
        let report = handler
            .handle(RunAnalysisCommand::uncertainty(scenario_matrix(), None))
            .unwrap();

        let hurwitz = report
            .results
            .iter()
            .find(|r| r.kind == CriterionKind::Hurwitz)
            .unwrap();
        assert_eq!(hurwitz.strategy, "Property");
    }

    #[test]
    fn rejects_alpha_outside_unit_interval() {
        let err = handler()
            .handle(RunAnalysisCommand::uncertainty(scenario_matrix(), Some(-0.1)))
            .unwrap_err();
        assert_eq!(err, AnalysisError::InvalidAlpha(-0.1));
    }

    #[test]
    fn risk_requires_probabilities() {
        let cmd = RunAnalysisCommand {
            probabilities: None,
            ..RunAnalysisCommand::risk(scenario_matrix(), vec![])
        };
        assert_eq!(handler().handle(cmd).unwrap_err(), AnalysisError::MissingProbabilities);
    }

    #[test]
    fn risk_rejects_probabilities_not_summing_to_one() {
        let err = handler()
            .handle(RunAnalysisCommand::risk(scenario_matrix(), vec![0.5, 0.5, 0.5, 0.5]))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidProbabilities(_)));
    }

    #[test]
    fn risk_accepts_sum_within_tolerance() {
        let result = handler().handle(RunAnalysisCommand::risk(
            scenario_matrix(),
            vec![0.25, 0.25, 0.25, 0.255],
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn risk_rejects_negative_probability() {
        let err = handler()
            .handle(RunAnalysisCommand::risk(scenario_matrix(), vec![1.5, -0.5, 0.0, 0.0]))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidProbabilities(_)));
    }

    #[test]
    fn criterion_failure_is_isolated() {
        // Length mismatch faults Bayes; Laplace still runs.
        let report = handler()
            .handle(RunAnalysisCommand::risk(scenario_matrix(), vec![0.5, 0.5]))
            .unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].kind, CriterionKind::Laplace);
        assert_eq!(report.recommendations.len(), 2);

        let bayes = &report.recommendations[0];
        assert!(bayes.is_undetermined());
        assert!(matches!(bayes.details, RecommendationDetails::Failed { .. }));
        assert_eq!(bayes.criterion_name, "Bayes (expected value)");
        assert_eq!(report.statistics.valid_recommendations, 1);
        assert_eq!(report.statistics.most_frequent.percentage.value(), 50);
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let report = handler()
            .handle(RunAnalysisCommand::risk(scenario_matrix(), vec![0.5, 0.5]))
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("analysisId").is_some());
        assert!(json.get("analysis_id").is_none());
        let failed = &json["recommendations"][0];
        assert_eq!(failed["criterionName"], "Bayes (expected value)");
        assert_eq!(failed["criterionType"], "bayes");
        assert!(json["results"][0].get("tiedIndices").is_some());
    }

    #[test]
    fn degenerate_matrix_yields_undetermined_report() {
        let report = handler()
            .handle(RunAnalysisCommand::uncertainty(PayoffMatrix::empty(), None))
            .unwrap();

        assert_eq!(report.recommendations.len(), 4);
        assert!(report.recommendations.iter().all(|r| r.is_undetermined()));
        assert_eq!(report.statistics.most_frequent.strategy, None);
        assert_eq!(report.statistics.valid_recommendations, 0);
    }
}
