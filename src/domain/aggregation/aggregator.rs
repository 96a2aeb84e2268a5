//! Results Aggregator - collects per-criterion verdicts into one conclusion.

use serde::Serialize;

use super::{FinalRecommendation, FrequencyTable, Recommendation, RecommendationDetails};
use crate::domain::criteria::{CriterionKind, CriterionResult, EvaluationMode};
use crate::domain::foundation::Timestamp;

/// Lifecycle of an aggregator between `clear()` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregatorState {
    /// No recommendations recorded.
    Idle,
    /// At least one recommendation recorded.
    Accumulating,
}

/// Read-only snapshot of an aggregator, used as the export contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStatistics {
    pub total_criteria: usize,
    pub valid_recommendations: usize,
    pub unique_strategies: usize,
    pub most_frequent: FinalRecommendation,
    pub distribution: FrequencyTable,
    pub analysis_type: Option<EvaluationMode>,
    pub timestamp: Option<Timestamp>,
}

/// Accumulates recommendations for a single analysis session.
///
/// Never rejects input: a criterion that failed upstream is recorded as an
/// undetermined recommendation and simply does not count towards any
/// strategy. Single-writer; concurrent analyses use separate instances.
#[derive(Debug, Clone, Default)]
pub struct ResultsAggregator {
    recommendations: Vec<Recommendation>,
    analysis_type: Option<EvaluationMode>,
    timestamp: Option<Timestamp>,
}

impl ResultsAggregator {
    /// Creates an idle aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags the session with its mode and stamps the current time.
    ///
    /// Existing recommendations are kept.
    pub fn set_analysis_type(&mut self, analysis_type: EvaluationMode) {
        self.analysis_type = Some(analysis_type);
        self.timestamp = Some(Timestamp::now());
    }

    /// Records one criterion's verdict.
    pub fn add_recommendation(
        &mut self,
        criterion_name: impl Into<String>,
        strategy: Option<&str>,
        criterion_type: CriterionKind,
        details: RecommendationDetails,
    ) {
        self.recommendations.push(Recommendation::new(
            criterion_name,
            strategy,
            criterion_type,
            details,
        ));
    }

    /// Records a criterion result.
    pub fn add_result(&mut self, result: CriterionResult) {
        self.recommendations.push(Recommendation::from_result(result));
    }

    /// Records a criterion that faulted, as undetermined.
    pub fn add_failure(
        &mut self,
        criterion_name: impl Into<String>,
        criterion_type: CriterionKind,
        error: impl Into<String>,
    ) {
        self.recommendations
            .push(Recommendation::failed(criterion_name, criterion_type, error));
    }

    /// Discards all recommendations, the mode and the timestamp.
    pub fn clear(&mut self) {
        self.recommendations.clear();
        self.analysis_type = None;
        self.timestamp = None;
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> AggregatorState {
        if self.recommendations.is_empty() {
            AggregatorState::Idle
        } else {
            AggregatorState::Accumulating
        }
    }

    /// Recorded recommendations, in insertion order.
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn analysis_type(&self) -> Option<EvaluationMode> {
        self.analysis_type
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    /// Counts citations per strategy, ignoring undetermined recommendations.
    pub fn frequency_analysis(&self) -> FrequencyTable {
        self.recommendations
            .iter()
            .filter(|r| !r.is_undetermined())
            .map(|r| r.strategy.as_str())
            .collect()
    }

    /// Derives the consensus recommendation.
    pub fn final_recommendation(&self) -> FinalRecommendation {
        FinalRecommendation::from_frequencies(
            &self.frequency_analysis(),
            self.recommendations.len(),
        )
    }

    /// Returns true when more than one strategy shares the highest count.
    pub fn has_conflicts(&self) -> bool {
        self.frequency_analysis().leaders().len() > 1
    }

    /// Builds a snapshot of the session.
    pub fn statistics(&self) -> AnalysisStatistics {
        let distribution = self.frequency_analysis();
        AnalysisStatistics {
            total_criteria: self.recommendations.len(),
            valid_recommendations: distribution.total(),
            unique_strategies: distribution.len(),
            most_frequent: FinalRecommendation::from_frequencies(
                &distribution,
                self.recommendations.len(),
            ),
            distribution,
            analysis_type: self.analysis_type,
            timestamp: self.timestamp,
        }
    }
}
