//! Linear regression models for imputation
//!
//! OLS and Ridge use the closed-form normal equations with mean centering;
//! Lasso and ElasticNet use cyclic coordinate descent with soft thresholding.
//! Multi-output targets are fitted independently per output column against
//! the shared input block.

use ndarray::{Array1, Array2, Axis};

use super::solve::solve_symmetric;
use crate::config::{RegressorKind, RegressorParams};
use crate::constants::{COORDINATE_DESCENT_MAX_ITER, COORDINATE_DESCENT_TOL};
use crate::{Error, Result};

/// A fitted linear model: one weight column and intercept per target
#[derive(Debug, Clone)]
pub struct LinearModel {
    /// (n_inputs x n_targets) weight matrix
    weights: Array2<f64>,

    /// Per-target intercept
    intercept: Array1<f64>,
}

impl LinearModel {
    /// Fit a model of the given kind on `x` (n_samples x n_inputs) against
    /// `y` (n_samples x n_targets)
    pub fn fit(
        kind: RegressorKind,
        params: &RegressorParams,
        x: &Array2<f64>,
        y: &Array2<f64>,
    ) -> Result<Self> {
        let n_samples = x.nrows();
        let n_inputs = x.ncols();
        let n_targets = y.ncols();

        if y.nrows() != n_samples {
            return Err(Error::regression(format!(
                "shape mismatch: {} input rows vs {} target rows",
                n_samples,
                y.nrows()
            )));
        }
        if n_samples == 0 {
            return Err(Error::regression("cannot fit on zero samples"));
        }

        // Center inputs and targets; the intercept absorbs the means. With no
        // input columns this degenerates to a per-target mean model.
        let x_mean = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(n_inputs));
        let y_mean = y
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(n_targets));
        let x_centered = x - &x_mean.view().insert_axis(Axis(0));
        let y_centered = y - &y_mean.view().insert_axis(Axis(0));

        let mut weights = Array2::zeros((n_inputs, n_targets));
        if n_inputs > 0 {
            match kind {
                RegressorKind::OrdinaryLeastSquares | RegressorKind::Ridge => {
                    let alpha = match kind {
                        RegressorKind::Ridge => params.alpha,
                        _ => 0.0,
                    };
                    let mut xtx = x_centered.t().dot(&x_centered);
                    for i in 0..n_inputs {
                        xtx[[i, i]] += alpha;
                    }
                    for target in 0..n_targets {
                        let xty = x_centered.t().dot(&y_centered.column(target));
                        let w = solve_symmetric(&xtx, &xty).ok_or_else(|| {
                            Error::regression(
                                "normal equations are singular; try Ridge with a positive alpha",
                            )
                        })?;
                        weights.column_mut(target).assign(&w);
                    }
                }
                RegressorKind::Lasso | RegressorKind::ElasticNet => {
                    let l1_ratio = match kind {
                        RegressorKind::Lasso => 1.0,
                        _ => params.l1_ratio,
                    };
                    for target in 0..n_targets {
                        let y_col = y_centered.column(target).to_owned();
                        let w =
                            coordinate_descent(&x_centered, &y_col, params.alpha, l1_ratio);
                        weights.column_mut(target).assign(&w);
                    }
                }
            }
        }

        let intercept = &y_mean - &x_mean.dot(&weights);

        Ok(Self { weights, intercept })
    }

    /// Predict targets for `x` (n_samples x n_inputs)
    pub fn predict(&self, x: &Array2<f64>) -> Array2<f64> {
        x.dot(&self.weights) + &self.intercept.view().insert_axis(Axis(0))
    }

    /// Fitted weight matrix (n_inputs x n_targets)
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Fitted per-target intercepts
    pub fn intercept(&self) -> &Array1<f64> {
        &self.intercept
    }
}

/// Cyclic coordinate descent for the elastic-net objective
///
/// Minimizes `1/(2n) ||y - Xw||^2 + alpha * l1_ratio * ||w||_1
/// + alpha * (1 - l1_ratio) / 2 * ||w||^2` on centered data.
fn coordinate_descent(x: &Array2<f64>, y: &Array1<f64>, alpha: f64, l1_ratio: f64) -> Array1<f64> {
    let n_samples = x.nrows() as f64;
    let n_inputs = x.ncols();

    let l1_penalty = alpha * l1_ratio;
    let l2_penalty = alpha * (1.0 - l1_ratio);

    let column_sq: Vec<f64> = (0..n_inputs)
        .map(|j| x.column(j).mapv(|v| v * v).sum())
        .collect();

    let mut weights: Array1<f64> = Array1::zeros(n_inputs);
    let mut residual = y.clone();

    for _ in 0..COORDINATE_DESCENT_MAX_ITER {
        let mut max_update: f64 = 0.0;

        for j in 0..n_inputs {
            if column_sq[j] == 0.0 {
                continue;
            }
            let old = weights[j];
            // Correlation of column j with the partial residual (j excluded)
            let rho = x.column(j).dot(&residual) + column_sq[j] * old;
            let denominator = column_sq[j] / n_samples + l2_penalty;
            let new = soft_threshold(rho / n_samples, l1_penalty) / denominator;

            if new != old {
                let delta = new - old;
                residual = &residual - &(&x.column(j) * delta);
                weights[j] = new;
                max_update = max_update.max(delta.abs());
            }
        }

        if max_update < COORDINATE_DESCENT_TOL {
            break;
        }
    }

    weights
}

/// Soft thresholding operator for L1 shrinkage
fn soft_threshold(value: f64, threshold: f64) -> f64 {
    if value > threshold {
        value - threshold
    } else if value < -threshold {
        value + threshold
    } else {
        0.0
    }
}

#[cfg(test)]
mod cd_tests {
    use super::*;

    #[test]
    fn test_soft_threshold_shrinks_toward_zero() {
        assert_eq!(soft_threshold(3.0, 1.0), 2.0);
        assert_eq!(soft_threshold(-3.0, 1.0), -2.0);
        assert_eq!(soft_threshold(0.5, 1.0), 0.0);
        assert_eq!(soft_threshold(-0.5, 1.0), 0.0);
    }
}
