//! Payoff Matrix - strategies x states table of numeric outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a query addresses a row or column the matrix does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Strategy index {index} out of bounds (matrix has {count} strategies)")]
    RowOutOfBounds { index: usize, count: usize },

    #[error("State index {index} out of bounds (matrix has {count} states)")]
    ColumnOutOfBounds { index: usize, count: usize },
}

/// Read-only payoff table consumed by the criteria.
///
/// Rows are strategies, columns are states of nature. `data[i][j]` is the
/// payoff of strategy `i` when state `j` occurs. Ragged rows are accepted on
/// construction; they make the matrix degenerate rather than unconstructible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    /// Ordered strategy (row) names.
    pub strategies: Vec<String>,
    /// Ordered state-of-nature (column) names.
    pub states: Vec<String>,
    /// Row-major payoff values.
    pub data: Vec<Vec<f64>>,
}

impl PayoffMatrix {
    /// Creates a matrix from names and rows.
    pub fn new(
        strategies: Vec<impl Into<String>>,
        states: Vec<impl Into<String>>,
        data: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            strategies: strategies.into_iter().map(Into::into).collect(),
            states: states.into_iter().map(Into::into).collect(),
            data,
        }
    }

    /// Creates a matrix with generated names (`Strategy 1..S`, `State 1..N`).
    pub fn from_rows(data: Vec<Vec<f64>>) -> Self {
        let columns = data.first().map(Vec::len).unwrap_or(0);
        Self {
            strategies: (1..=data.len()).map(|i| format!("Strategy {}", i)).collect(),
            states: (1..=columns).map(|j| format!("State {}", j)).collect(),
            data,
        }
    }

    /// Creates an empty matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a payoff matrix.
    pub fn builder() -> PayoffMatrixBuilder {
        PayoffMatrixBuilder::new()
    }

    /// Returns the number of strategies (S).
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Returns the number of states of nature (N).
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the name of strategy `index`.
    pub fn strategy_name(&self, index: usize) -> Result<&str, MatrixError> {
        self.strategies
            .get(index)
            .map(String::as_str)
            .ok_or(MatrixError::RowOutOfBounds {
                index,
                count: self.strategy_count(),
            })
    }

    /// Returns the payoffs of strategy `index`.
    pub fn row(&self, index: usize) -> Result<&[f64], MatrixError> {
        self.data
            .get(index)
            .filter(|_| index < self.strategy_count())
            .map(Vec::as_slice)
            .ok_or(MatrixError::RowOutOfBounds {
                index,
                count: self.strategy_count(),
            })
    }

    /// Returns the smallest payoff of strategy `index`.
    pub fn row_min(&self, index: usize) -> Result<f64, MatrixError> {
        Ok(self.row(index)?.iter().copied().fold(f64::INFINITY, f64::min))
    }

    /// Returns the largest payoff of strategy `index`.
    pub fn row_max(&self, index: usize) -> Result<f64, MatrixError> {
        Ok(self
            .row(index)?
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// Returns the largest payoff any strategy achieves under state `index`.
    pub fn column_max(&self, index: usize) -> Result<f64, MatrixError> {
        if index >= self.state_count() {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                count: self.state_count(),
            });
        }

        let mut max = f64::NEG_INFINITY;
        for row in self.data.iter().take(self.strategy_count()) {
            let value = row.get(index).copied().ok_or(MatrixError::ColumnOutOfBounds {
                index,
                count: row.len(),
            })?;
            max = max.max(value);
        }
        Ok(max)
    }

    /// Returns true if the matrix has no strategies.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Returns true when S >= 1, N >= 1 and every row has exactly N cells.
    pub fn is_complete(&self) -> bool {
        let states = self.state_count();
        self.strategy_count() > 0
            && states > 0
            && self.data.len() == self.strategy_count()
            && self.data.iter().all(|row| row.len() == states)
    }

    /// Returns true when the matrix is complete and every cell is finite.
    pub fn is_valid(&self) -> bool {
        self.is_complete() && self.data.iter().flatten().all(|v| v.is_finite())
    }

    /// Returns true when criteria cannot produce a determined result.
    pub fn is_degenerate(&self) -> bool {
        !self.is_valid()
    }
}

/// Builder for constructing PayoffMatrix instances.
#[derive(Debug, Default)]
pub struct PayoffMatrixBuilder {
    strategies: Vec<String>,
    states: Vec<String>,
    data: Vec<Vec<f64>>,
}

impl PayoffMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state names.
    pub fn states(mut self, names: Vec<impl Into<String>>) -> Self {
        self.states = names.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a strategy with its payoffs.
    pub fn row(mut self, strategy: impl Into<String>, payoffs: Vec<f64>) -> Self {
        self.strategies.push(strategy.into());
        self.data.push(payoffs);
        self
    }

    /// Builds the payoff matrix.
    pub fn build(self) -> PayoffMatrix {
        PayoffMatrix {
            strategies: self.strategies,
            states: self.states,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_matrix() -> PayoffMatrix {
        PayoffMatrix::from_rows(vec![
            vec![320.0, 780.0, 640.0, 500.0],
            vec![900.0, 400.0, 300.0, 700.0],
            vec![600.0, 950.0, 200.0, 450.0],
            vec![500.0, 550.0, 850.0, 300.0],
        ])
    }

    #[test]
    fn from_rows_generates_names() {
        let matrix = scenario_matrix();
        assert_eq!(matrix.strategy_count(), 4);
        assert_eq!(matrix.state_count(), 4);
        assert_eq!(matrix.strategy_name(0).unwrap(), "Strategy 1");
        assert_eq!(matrix.states[3], "State 4");
    }

    #[test]
    fn builder_creates_named_matrix() {
        let matrix = PayoffMatrix::builder()
            .states(vec!["Boom", "Bust"])
            .row("Expand", vec![100.0, -50.0])
            .row("Hold", vec![20.0, 10.0])
            .build();

        assert_eq!(matrix.strategies, vec!["Expand", "Hold"]);
        assert_eq!(matrix.row(1).unwrap(), &[20.0, 10.0]);
        assert!(matrix.is_valid());
    }

    #[test]
    fn row_queries_return_extremes() {
        let matrix = scenario_matrix();
        assert_eq!(matrix.row_min(0).unwrap(), 320.0);
        assert_eq!(matrix.row_max(2).unwrap(), 950.0);
    }

    #[test]
    fn column_max_scans_all_strategies() {
        let matrix = scenario_matrix();
        assert_eq!(matrix.column_max(0).unwrap(), 900.0);
        assert_eq!(matrix.column_max(1).unwrap(), 950.0);
        assert_eq!(matrix.column_max(2).unwrap(), 850.0);
        assert_eq!(matrix.column_max(3).unwrap(), 700.0);
    }

    #[test]
    fn reading_missing_row_is_an_error() {
        let matrix = scenario_matrix();
        assert_eq!(
            matrix.row_min(4),
            Err(MatrixError::RowOutOfBounds { index: 4, count: 4 })
        );
        assert!(matrix.strategy_name(9).is_err());
    }

    #[test]
    fn reading_missing_column_is_an_error() {
        let matrix = scenario_matrix();
        assert_eq!(
            matrix.column_max(4),
            Err(MatrixError::ColumnOutOfBounds { index: 4, count: 4 })
        );
    }

    #[test]
    fn empty_matrix_is_degenerate() {
        let matrix = PayoffMatrix::empty();
        assert!(matrix.is_empty());
        assert!(!matrix.is_complete());
        assert!(matrix.is_degenerate());
    }

    #[test]
    fn ragged_row_is_incomplete() {
        let matrix = PayoffMatrix::new(
            vec!["A", "B"],
            vec!["S1", "S2"],
            vec![vec![1.0, 2.0], vec![3.0]],
        );
        assert!(!matrix.is_complete());
        assert!(matrix.is_degenerate());
    }

    #[test]
    fn non_finite_cell_is_invalid_but_complete() {
        let matrix = PayoffMatrix::from_rows(vec![vec![1.0, f64::NAN]]);
        assert!(matrix.is_complete());
        assert!(!matrix.is_valid());
    }

    #[test]
    fn strategies_without_states_are_degenerate() {
        let matrix = PayoffMatrix::new(vec!["A"], Vec::<String>::new(), vec![vec![]]);
        assert!(matrix.is_degenerate());
    }

    #[test]
    fn matrix_deserializes_from_json() {
        let json = r#"{
            "strategies": ["A", "B"],
            "states": ["S1"],
            "data": [[1.5], [-2]]
        }"#;

        let matrix: PayoffMatrix = serde_json::from_str(json).unwrap();
        assert_eq!(matrix.strategy_count(), 2);
        assert_eq!(matrix.row(1).unwrap(), &[-2.0]);
    }
}
