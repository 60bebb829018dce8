//! Imputation engine: partition, fit, predict
//!
//! Rows are partitioned into complete and incomplete using the tracker's
//! missing-row set, columns into known and unknown using the missing-column
//! set. One model is fitted on `matrix[complete, known]` against
//! `matrix[complete, unknown]` and applied to `matrix[incomplete, known]`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use ndarray::{Array2, Axis};
use tracing::{debug, info};

use super::regressor::LinearModel;
use crate::config::{RegressorKind, RegressorParams};
use crate::{Error, Result};

/// Predicted values for every (missing row x missing column) pair
///
/// When exactly one column is missing (the common case this tool targets)
/// [`ImputedValues::scalar_map`] exposes the flat row-to-scalar view.
#[derive(Debug, Clone, Default)]
pub struct ImputedValues {
    columns: Vec<usize>,
    rows: Vec<usize>,
    predictions: HashMap<usize, Vec<f64>>,
}

impl ImputedValues {
    /// Missing matrix-column indices, ascending
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Missing row indices, ascending
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// True when no predictions were produced
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Number of rows with predictions
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Predicted value for one (row, matrix column) pair
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        let position = self.columns.iter().position(|&c| c == column)?;
        self.predictions.get(&row).map(|values| values[position])
    }

    /// Flat row-to-scalar mapping when exactly one column is missing
    pub fn scalar_map(&self) -> Option<BTreeMap<usize, f64>> {
        if self.columns.len() != 1 {
            return None;
        }
        Some(
            self.predictions
                .iter()
                .map(|(&row, values)| (row, values[0]))
                .collect(),
        )
    }
}

/// Engine fitting one regression model per imputation run
#[derive(Debug, Clone)]
pub struct ImputationEngine {
    kind: RegressorKind,
    params: RegressorParams,
}

impl ImputationEngine {
    pub fn new(kind: RegressorKind, params: RegressorParams) -> Self {
        Self { kind, params }
    }

    /// Impute all missing cells of `matrix`
    ///
    /// `missing_rows` and `missing_cols` come from the tracker; matrix
    /// content never drives the split, so placeholder zeros cannot be
    /// mistaken for true observations. An empty column set yields an empty
    /// result; an empty complete-row set is a fatal error.
    pub fn impute(
        &self,
        matrix: &Array2<f64>,
        missing_rows: &BTreeSet<usize>,
        missing_cols: &BTreeSet<usize>,
    ) -> Result<ImputedValues> {
        if missing_cols.is_empty() {
            debug!("No missing columns; nothing to impute");
            return Ok(ImputedValues::default());
        }

        let n_rows = matrix.nrows();
        let n_cols = matrix.ncols();

        let incomplete: Vec<usize> = missing_rows.iter().copied().collect();
        let complete: Vec<usize> = (0..n_rows).filter(|r| !missing_rows.contains(r)).collect();
        let unknown: Vec<usize> = missing_cols.iter().copied().collect();
        let known: Vec<usize> = (0..n_cols).filter(|c| !missing_cols.contains(c)).collect();

        if complete.is_empty() {
            return Err(Error::insufficient_training_data(format!(
                "all {n_rows} rows have missing values; no fully-observed rows to train on"
            )));
        }

        debug!(
            "Partition: {} complete / {} incomplete rows, {} known / {} unknown columns",
            complete.len(),
            incomplete.len(),
            known.len(),
            unknown.len()
        );

        let train_x = matrix.select(Axis(0), &complete).select(Axis(1), &known);
        let train_y = matrix.select(Axis(0), &complete).select(Axis(1), &unknown);
        let model = LinearModel::fit(self.kind, &self.params, &train_x, &train_y)?;

        let test_x = matrix.select(Axis(0), &incomplete).select(Axis(1), &known);
        let predicted = model.predict(&test_x);

        let mut predictions = HashMap::with_capacity(incomplete.len());
        for (offset, &row) in incomplete.iter().enumerate() {
            predictions.insert(row, predicted.row(offset).to_vec());
        }

        info!(
            "Imputed {} values across {} rows and {} columns",
            predictions.len() * unknown.len(),
            predictions.len(),
            unknown.len()
        );

        Ok(ImputedValues {
            columns: unknown,
            rows: incomplete,
            predictions,
        })
    }
}
