//! Decision Criteria - classical decision rules over a payoff matrix
//!
//! This crate evaluates Wald, Maximax, Savage, Hurwitz, Bayes and Laplace
//! against a strategies-by-states payoff matrix, aggregates their
//! recommendations into a consensus with a confidence band, and exports the
//! result as JSON, YAML or Markdown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
