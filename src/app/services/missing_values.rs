//! Missing-value detection and tracking
//!
//! The detection pass walks every record's feature columns once, recording a
//! (row, column, identifier) triple for each cell whose raw value is a
//! recognized missing marker. Row and column indices refer to positions in
//! the resolved feature-column order, not raw file positions.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info};

use super::pin_reader::ColumnRoles;
use crate::app::models::Record;
use crate::constants::MISSING_MARKERS;
use crate::{Error, Result};

/// One missing cell found during detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCell {
    /// Row index (input file order, 0-based)
    pub row: usize,

    /// Column index within the feature-column order
    pub column: usize,

    /// Identifier of the affected record
    pub psm_id: String,
}

/// Tracker for missing values across a feature matrix
///
/// The cell list is append-only during detection and read-only afterward.
/// Distinct rows, columns and feature names are derived on demand.
#[derive(Debug, Clone)]
pub struct MissingValueTracker {
    markers: HashSet<String>,
    features: BTreeSet<String>,
    cells: Vec<MissingCell>,
}

impl Default for MissingValueTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MissingValueTracker {
    /// Create a tracker recognizing the default markers ("NA", "na")
    pub fn new() -> Self {
        Self::with_markers(MISSING_MARKERS.iter().map(|m| m.to_string()))
    }

    /// Create a tracker with a custom marker set
    pub fn with_markers(markers: impl IntoIterator<Item = String>) -> Self {
        Self {
            markers: markers.into_iter().collect(),
            features: BTreeSet::new(),
            cells: Vec::new(),
        }
    }

    /// Whether a raw field value is a recognized missing marker
    pub fn is_marker(&self, raw: &str) -> bool {
        self.markers.contains(raw)
    }

    /// Run the detection pass over parsed records
    ///
    /// Every feature cell must either parse as a float or match a recognized
    /// marker; anything else is a fatal malformed-feature error. Labels were
    /// already validated against {+1, -1} when the records were parsed.
    pub fn detect(mut self, records: &[Record], roles: &ColumnRoles) -> Result<Self> {
        for (row, record) in records.iter().enumerate() {
            for (column, raw) in record.features.iter().enumerate() {
                if raw.parse::<f64>().is_ok() {
                    continue;
                }
                if self.is_marker(raw) {
                    self.record_missing(&roles.feature_columns[column], row, column, &record.psm_id);
                } else {
                    return Err(Error::malformed_feature(
                        record.line,
                        &roles.feature_columns[column],
                        raw,
                    ));
                }
            }
        }

        if self.cells.is_empty() {
            debug!("No missing values found in {} records", records.len());
        } else {
            info!(
                "Found {} missing cells across {} rows; features: {:?}",
                self.cells.len(),
                self.missing_rows().len(),
                self.features
            );
        }

        Ok(self)
    }

    fn record_missing(&mut self, feature: &str, row: usize, column: usize, psm_id: &str) {
        self.features.insert(feature.to_string());
        self.cells.push(MissingCell {
            row,
            column,
            psm_id: psm_id.to_string(),
        });
    }

    /// All recorded missing cells, in detection order
    pub fn cells(&self) -> &[MissingCell] {
        &self.cells
    }

    /// Whether any missing cell was recorded
    pub fn has_missing(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Distinct row indices with at least one missing cell
    pub fn missing_rows(&self) -> BTreeSet<usize> {
        self.cells.iter().map(|cell| cell.row).collect()
    }

    /// Distinct feature-column indices with at least one missing cell
    pub fn missing_columns(&self) -> BTreeSet<usize> {
        self.cells.iter().map(|cell| cell.column).collect()
    }

    /// Distinct feature names observed with at least one missing instance
    pub fn missing_features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Identifiers of the affected records, in detection order
    pub fn missing_psm_ids(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.psm_id.as_str()).collect()
    }

    /// (row, column) lookup set for placeholder substitution
    pub fn cell_set(&self) -> HashSet<(usize, usize)> {
        self.cells
            .iter()
            .map(|cell| (cell.row, cell.column))
            .collect()
    }
}
