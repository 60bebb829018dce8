//! Dense feature matrix construction
//!
//! Converts parsed records into an `ndarray` matrix whose column order
//! matches the resolved feature-column order. Cells the tracker flagged as
//! missing are forced to the 0.0 placeholder regardless of their raw content;
//! training/test splits are always driven by the tracker's row/column sets,
//! never by matrix content.

use ndarray::Array2;
use tracing::debug;

use super::missing_values::MissingValueTracker;
use super::pin_reader::ColumnRoles;
use crate::app::models::{Record, RecordMeta};
use crate::constants::MISSING_PLACEHOLDER;
use crate::{Error, Result};

/// Dense feature matrix with parallel row/column metadata
///
/// Row order equals input file order; this ordering is the shared contract
/// between the tracker, the imputation engine and the writer.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    /// (numRecords x numFeatureColumns [+ bias]) value matrix
    pub values: Array2<f64>,

    /// Per-row labels (+1 / -1), aligned by row index
    pub labels: Vec<i32>,

    /// Feature names matching the matrix columns (bias column excluded)
    pub feature_names: Vec<String>,

    /// Per-row record metadata, aligned by row index
    pub meta: Vec<RecordMeta>,
}

/// Builder converting records into a [`FeatureMatrix`]
#[derive(Debug, Clone, Default)]
pub struct FeatureMatrixBuilder {
    include_bias: bool,
}

impl FeatureMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constant 1.0 bias column after the feature columns
    pub fn with_bias(mut self, include_bias: bool) -> Self {
        self.include_bias = include_bias;
        self
    }

    /// Build the dense matrix from parsed records and the tracker's cell set
    pub fn build(
        &self,
        records: &[Record],
        tracker: &MissingValueTracker,
        roles: &ColumnRoles,
    ) -> Result<FeatureMatrix> {
        let rows = records.len();
        let feature_count = roles.feature_count();
        let columns = feature_count + usize::from(self.include_bias);

        let missing_cells = tracker.cell_set();
        let mut values = Array2::zeros((rows, columns));
        let mut labels = Vec::with_capacity(rows);
        let mut meta = Vec::with_capacity(rows);

        for (row, record) in records.iter().enumerate() {
            for (column, raw) in record.features.iter().enumerate() {
                values[[row, column]] = if missing_cells.contains(&(row, column)) {
                    MISSING_PLACEHOLDER
                } else {
                    raw.parse::<f64>().map_err(|_| {
                        Error::malformed_feature(record.line, &roles.feature_columns[column], raw)
                    })?
                };
            }
            if self.include_bias {
                values[[row, feature_count]] = 1.0;
            }
            labels.push(record.label);
            meta.push(record.meta());
        }

        debug!(
            "Built {}x{} feature matrix (bias: {})",
            rows, columns, self.include_bias
        );

        Ok(FeatureMatrix {
            values,
            labels,
            feature_names: roles.feature_columns.clone(),
            meta,
        })
    }
}
