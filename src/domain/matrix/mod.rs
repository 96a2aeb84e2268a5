//! Matrix Module - the read-only payoff table the criteria evaluate.
//!
//! Editing and resizing belong to whoever owns the matrix. Criteria only
//! query rows, columns and the validity predicates.

mod payoff_matrix;

pub use payoff_matrix::{MatrixError, PayoffMatrix, PayoffMatrixBuilder};
