//! Recommendation - one criterion's verdict as recorded by the aggregator.

use serde::{Deserialize, Serialize};

use crate::domain::criteria::{CriterionKind, CriterionResult, UNDETERMINED_STRATEGY};

/// What backs a recommendation: the full result, or the fault that replaced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationDetails {
    Result(CriterionResult),
    Failed { error: String },
}

/// A criterion's recommended strategy. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub criterion_name: String,
    /// Strategy name, or [`UNDETERMINED_STRATEGY`].
    pub strategy: String,
    pub criterion_type: CriterionKind,
    pub details: RecommendationDetails,
}

impl Recommendation {
    /// Creates a recommendation. A missing or empty strategy becomes undetermined.
    ///
    /// Any other name is kept byte-for-byte so it matches the matrix row.
    pub fn new(
        criterion_name: impl Into<String>,
        strategy: Option<&str>,
        criterion_type: CriterionKind,
        details: RecommendationDetails,
    ) -> Self {
        let strategy = match strategy {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNDETERMINED_STRATEGY.to_string(),
        };

        Self {
            criterion_name: criterion_name.into(),
            strategy,
            criterion_type,
            details,
        }
    }

    /// Records a criterion result.
    pub fn from_result(result: CriterionResult) -> Self {
        let name = result.name.clone();
        let strategy = result.strategy.clone();
        Self::new(
            name,
            Some(&strategy),
            result.kind,
            RecommendationDetails::Result(result),
        )
    }

    /// Records a criterion that faulted.
    pub fn failed(
        criterion_name: impl Into<String>,
        criterion_type: CriterionKind,
        error: impl Into<String>,
    ) -> Self {
        Self::new(
            criterion_name,
            None,
            criterion_type,
            RecommendationDetails::Failed {
                error: error.into(),
            },
        )
    }

    /// Returns true when no strategy was recommended.
    pub fn is_undetermined(&self) -> bool {
        self.strategy == UNDETERMINED_STRATEGY
    }
}
