//! Configuration for imputation runs.
//!
//! Provides the run configuration assembled from CLI arguments: regressor
//! selection with hyperparameters, output compression, and the diagnostics
//! side channel. Diagnostics are an explicit per-run setting rather than a
//! process-wide toggle.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_ALPHA, DEFAULT_L1_RATIO};
use crate::{Error, Result};

/// Regression model used to predict missing feature values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegressorKind {
    /// Ordinary least squares (no regularization)
    OrdinaryLeastSquares,
    /// L2-regularized least squares
    Ridge,
    /// L1-regularized least squares (coordinate descent)
    Lasso,
    /// Combined L1/L2 regularization (coordinate descent)
    ElasticNet,
}

/// Hyperparameters for the selected regressor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegressorParams {
    /// Regularization strength (ignored for OLS)
    pub alpha: f64,

    /// L1/L2 mixing ratio in [0, 1] (ElasticNet only; 1 = pure L1)
    pub l1_ratio: f64,
}

impl Default for RegressorParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            l1_ratio: DEFAULT_L1_RATIO,
        }
    }
}

/// Diagnostics side-channel configuration
///
/// When enabled, the writer collects the imputed-value population (split by
/// label) and the observed population for the same feature, counts soft
/// constraint breaks against an optional reference feature, and renders the
/// two comparison histograms into `plot_dir`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Collect and report imputation diagnostics
    pub enabled: bool,

    /// Feature used for the soft consistency check (imputed value expected
    /// to be >= this column's value when both are nonzero). Skipped when
    /// unset or absent from the header.
    pub reference_feature: Option<String>,

    /// Directory for diagnostic histogram images (unset = no plots)
    pub plot_dir: Option<PathBuf>,
}

/// Complete configuration for one imputation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImputeConfig {
    /// Regression model for imputation
    pub regressor: RegressorKind,

    /// Regressor hyperparameters
    pub params: RegressorParams,

    /// Append a constant bias column to the feature matrix
    pub include_bias: bool,

    /// Gzip-compress the output PIN file
    pub gzip_output: bool,

    /// Diagnostics side channel
    pub diagnostics: DiagnosticsConfig,
}

impl Default for ImputeConfig {
    fn default() -> Self {
        Self {
            regressor: RegressorKind::OrdinaryLeastSquares,
            params: RegressorParams::default(),
            include_bias: false,
            gzip_output: false,
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl ImputeConfig {
    /// Validate hyperparameter ranges for the selected regressor
    pub fn validate(&self) -> Result<()> {
        if self.params.alpha < 0.0 {
            return Err(Error::configuration(format!(
                "Regularization strength must be non-negative, got {}",
                self.params.alpha
            )));
        }

        if !(0.0..=1.0).contains(&self.params.l1_ratio) {
            return Err(Error::configuration(format!(
                "ElasticNet l1_ratio must be in [0, 1], got {}",
                self.params.l1_ratio
            )));
        }

        Ok(())
    }
}
