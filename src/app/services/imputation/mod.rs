//! Regression-based imputation of missing feature values
//!
//! Framing imputation as supervised regression across the fully-observed
//! columns leverages correlation between features (a derived score column is
//! frequently near-deterministic given the other scores for the same record)
//! instead of discarding that structure the way mean/median imputation would.
//!
//! ## Architecture
//!
//! - [`solve`] - Dense linear algebra: Cholesky solve with Gauss-Jordan fallback
//! - [`regressor`] - OLS/Ridge (closed form) and Lasso/ElasticNet (coordinate descent)
//! - [`engine`] - Row/column partitioning, fit on complete rows, predict the rest

pub mod engine;
pub mod regressor;
pub mod solve;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::{ImputationEngine, ImputedValues};
pub use regressor::LinearModel;
