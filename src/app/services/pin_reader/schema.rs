//! Header schema resolution for PIN files
//!
//! PIN headers use several synonymous names for the structural columns
//! (identifier, sequence, protein grouping). This module resolves them once
//! into a canonical [`ColumnRoles`] mapping consumed by both the detection
//! pass and the output pass.

use crate::constants::{GROUPING_COLUMNS, ID_COLUMNS, LABEL_COLUMN, SCAN_COLUMN, SEQUENCE_COLUMNS};
use crate::{Error, Result};

/// Canonical column-role mapping for one PIN header
///
/// Feature columns are every header field not claimed by a structural role.
/// `ScanNr` counts as a feature for the matrix (it is numeric and fully
/// observed) but is emitted in the structural prefix of the output header.
#[derive(Debug, Clone)]
pub struct ColumnRoles {
    /// Original header fields in file order
    pub header: Vec<String>,

    /// Resolved identifier column name and its header position
    pub id_column: String,
    pub id_index: usize,

    /// Label column header position
    pub label_index: usize,

    /// Resolved sequence column name and position
    pub sequence_column: String,
    pub sequence_index: usize,

    /// Resolved grouping column name and position
    pub grouping_column: String,
    pub grouping_index: usize,

    /// Feature column names in original header order
    pub feature_columns: Vec<String>,

    /// Header positions parallel to `feature_columns`
    pub feature_indices: Vec<usize>,

    /// Position of the scan column within `feature_columns`, when present
    pub scan_feature_index: Option<usize>,
}

impl ColumnRoles {
    /// Resolve column roles from a PIN header
    ///
    /// Fails with a schema error before any data row is read when the
    /// identifier, label, sequence or grouping column cannot be located.
    pub fn resolve(header: &[String], file: &str) -> Result<Self> {
        let find = |candidates: &[&str]| -> Option<(String, usize)> {
            for candidate in candidates {
                if let Some(index) = header.iter().position(|h| h == candidate) {
                    return Some((candidate.to_string(), index));
                }
            }
            None
        };

        let (id_column, id_index) = find(ID_COLUMNS).ok_or_else(|| {
            Error::schema(
                file,
                format!(
                    "no identifier column found (expected one of: {})",
                    ID_COLUMNS.join(", ")
                ),
            )
        })?;

        let label_index = header
            .iter()
            .position(|h| h == LABEL_COLUMN)
            .ok_or_else(|| Error::schema(file, format!("no '{LABEL_COLUMN}' column found")))?;

        let (sequence_column, sequence_index) = find(SEQUENCE_COLUMNS).ok_or_else(|| {
            Error::schema(
                file,
                format!(
                    "no peptide column found (expected one of: {})",
                    SEQUENCE_COLUMNS.join(", ")
                ),
            )
        })?;

        let (grouping_column, grouping_index) = find(GROUPING_COLUMNS).ok_or_else(|| {
            Error::schema(
                file,
                format!(
                    "no protein column found (expected one of: {})",
                    GROUPING_COLUMNS.join(", ")
                ),
            )
        })?;

        // Everything not claimed by a structural role is a feature column,
        // kept in original header order.
        let structural = [id_index, label_index, sequence_index, grouping_index];
        let mut feature_columns = Vec::new();
        let mut feature_indices = Vec::new();
        let mut scan_feature_index = None;

        for (index, name) in header.iter().enumerate() {
            if structural.contains(&index) || name.is_empty() {
                continue;
            }
            if name == SCAN_COLUMN {
                scan_feature_index = Some(feature_columns.len());
            }
            feature_columns.push(name.clone());
            feature_indices.push(index);
        }

        Ok(Self {
            header: header.to_vec(),
            id_column,
            id_index,
            label_index,
            sequence_column,
            sequence_index,
            grouping_column,
            grouping_index,
            feature_columns,
            feature_indices,
            scan_feature_index,
        })
    }

    /// Number of feature columns (matrix width before any bias column)
    pub fn feature_count(&self) -> usize {
        self.feature_columns.len()
    }

    /// Position of a feature column by name within the feature-column order
    pub fn feature_position(&self, name: &str) -> Option<usize> {
        self.feature_columns.iter().position(|f| f == name)
    }

    /// Feature columns emitted in the output feature block, in order
    ///
    /// The scan column is excluded here because the writer emits it in the
    /// structural prefix (identifier, label, scan number).
    pub fn output_feature_columns(&self) -> Vec<(usize, &str)> {
        self.feature_columns
            .iter()
            .enumerate()
            .filter(|(position, _)| Some(*position) != self.scan_feature_index)
            .map(|(position, name)| (position, name.as_str()))
            .collect()
    }
}
