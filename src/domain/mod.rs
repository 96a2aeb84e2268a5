//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, percentages, errors)
//! - `matrix` - Payoff matrix the decision rules read from
//! - `criteria` - Classical decision criteria and their factory
//! - `aggregation` - Consensus across criterion recommendations
//!
//! Nothing in this layer performs I/O or logging.

pub mod aggregation;
pub mod criteria;
pub mod foundation;
pub mod matrix;
