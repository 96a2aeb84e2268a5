//! Criterion results and their audit trace.

use serde::{Deserialize, Serialize};

use super::{CriterionKind, Objective};
use crate::domain::matrix::{MatrixError, PayoffMatrix};

/// Strategy name recorded when no optimum could be determined.
pub const UNDETERMINED_STRATEGY: &str = "undetermined";

/// Intermediate arithmetic behind one strategy's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDetail {
    /// Wald: score is the minimum of these payoffs.
    RowMinimum { payoffs: Vec<f64> },
    /// Maximax: score is the maximum of these payoffs.
    RowMaximum { payoffs: Vec<f64> },
    /// Savage: `regrets[j] = column_maxima[j] - payoff[j]`, score is their maximum.
    #[serde(rename_all = "camelCase")]
    Regret {
        column_maxima: Vec<f64>,
        regrets: Vec<f64>,
    },
    /// Hurwitz: `alpha * row_max + (1 - alpha) * row_min`.
    #[serde(rename_all = "camelCase")]
    Hurwitz {
        alpha: f64,
        row_max: f64,
        row_min: f64,
    },
    /// Bayes and Laplace: `Σ payoffs[j] * probabilities[j]`.
    ExpectedValue {
        payoffs: Vec<f64>,
        probabilities: Vec<f64>,
    },
}

/// One strategy's entry in the audit trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStep {
    pub strategy_index: usize,
    pub strategy: String,
    pub value: f64,
    pub detail: StepDetail,
}

impl CalculationStep {
    /// Creates a trace entry.
    pub fn new(
        strategy_index: usize,
        strategy: impl Into<String>,
        value: f64,
        detail: StepDetail,
    ) -> Self {
        Self {
            strategy_index,
            strategy: strategy.into(),
            value,
            detail,
        }
    }
}

/// Output of evaluating one criterion against a payoff matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    /// Human-readable name, parameterized where relevant.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CriterionKind,
    /// One score per strategy, in matrix row order.
    pub values: Vec<f64>,
    pub optimal_index: Option<usize>,
    pub optimal_value: Option<f64>,
    /// Resolved strategy name, or [`UNDETERMINED_STRATEGY`].
    pub strategy: String,
    /// Every strategy index that attains the optimum. The first one wins.
    pub tied_indices: Vec<usize>,
    pub calculations: Vec<CalculationStep>,
}

impl CriterionResult {
    /// Result for a matrix on which no optimum can be determined.
    pub fn undetermined(name: impl Into<String>, kind: CriterionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            values: Vec::new(),
            optimal_index: None,
            optimal_value: None,
            strategy: UNDETERMINED_STRATEGY.to_string(),
            tied_indices: Vec::new(),
            calculations: Vec::new(),
        }
    }

    /// Picks the optimum of `values` in the direction of `kind`.
    ///
    /// Ties go to the first strategy in row order.
    pub fn select(
        name: impl Into<String>,
        kind: CriterionKind,
        values: Vec<f64>,
        calculations: Vec<CalculationStep>,
        matrix: &PayoffMatrix,
    ) -> Result<Self, MatrixError> {
        let best = match kind.objective() {
            Objective::Maximize => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Objective::Minimize => values.iter().copied().fold(f64::INFINITY, f64::min),
        };

        let tied_indices: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == best)
            .map(|(i, _)| i)
            .collect();

        let Some(&optimal_index) = tied_indices.first() else {
            let mut result = Self::undetermined(name, kind);
            result.values = values;
            result.calculations = calculations;
            return Ok(result);
        };

        Ok(Self {
            name: name.into(),
            kind,
            strategy: matrix.strategy_name(optimal_index)?.to_string(),
            optimal_value: Some(values[optimal_index]),
            optimal_index: Some(optimal_index),
            values,
            tied_indices,
            calculations,
        })
    }

    /// Returns true when the criterion produced a recommendation.
    pub fn is_determined(&self) -> bool {
        self.optimal_index.is_some()
    }

    /// Returns true when more than one strategy attains the optimum.
    pub fn has_tie(&self) -> bool {
        self.tied_indices.len() > 1
    }
}
