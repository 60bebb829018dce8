//! Format-preserving PIN output
//!
//! Re-traverses the original file and emits one output row per input row in
//! the same order, substituting predictions only into cells the tracker
//! flagged. Output column order is the fixed permutation: identifier, label,
//! scan number (when present), feature columns in original relative order,
//! then sequence and grouping fields.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::{debug, info, warn};

use super::diagnostics::ImputationDiagnostics;
use crate::app::services::imputation::ImputedValues;
use crate::app::services::missing_values::MissingValueTracker;
use crate::app::services::pin_reader::{ColumnRoles, PinReader};
use crate::config::DiagnosticsConfig;
use crate::constants::{GZIP_EXTENSION, LABEL_COLUMN};
use crate::{Error, Result};

/// Writer for the substituted output PIN file
#[derive(Debug, Clone)]
pub struct ResultWriter {
    output_path: PathBuf,
    gzip: bool,
    diagnostics: DiagnosticsConfig,
}

impl ResultWriter {
    pub fn new(
        output_path: impl Into<PathBuf>,
        gzip: bool,
        diagnostics: DiagnosticsConfig,
    ) -> Self {
        Self {
            output_path: output_path.into(),
            gzip,
            diagnostics,
        }
    }

    /// Destination path after extension adjustment
    ///
    /// A `.gz` extension is stripped when compression is off; when
    /// compression is on the requested name is used exactly as given.
    pub fn resolved_output_path(&self) -> PathBuf {
        if !self.gzip
            && self
                .output_path
                .extension()
                .map(|ext| ext == GZIP_EXTENSION)
                .unwrap_or(false)
        {
            return self.output_path.with_extension("");
        }
        self.output_path.clone()
    }

    /// Re-read the input and write the substituted output file
    ///
    /// Returns the number of data rows written and the collected diagnostics
    /// when the side channel is enabled.
    pub fn write(
        &self,
        reader: &PinReader,
        tracker: &MissingValueTracker,
        imputed: &ImputedValues,
    ) -> Result<(usize, Option<ImputationDiagnostics>)> {
        let destination = self.resolved_output_path();
        debug!(
            "Writing imputed PIN to {} (gzip: {})",
            destination.display(),
            self.gzip
        );

        let file = File::create(&destination)
            .map_err(|e| Error::io(format!("Failed to create {}", destination.display()), e))?;

        let result = if self.gzip {
            let mut out = BufWriter::new(GzEncoder::new(file, Compression::default()));
            let result = self.emit(&mut out, reader, tracker, imputed)?;
            let encoder = out
                .into_inner()
                .map_err(|e| Error::io("Failed to flush output buffer", e.into_error()))?;
            encoder
                .finish()
                .map_err(|e| Error::io("Failed to finalize gzip stream", e))?;
            result
        } else {
            let mut out = BufWriter::new(file);
            let result = self.emit(&mut out, reader, tracker, imputed)?;
            out.flush()
                .map_err(|e| Error::io("Failed to flush output file", e))?;
            result
        };

        let (rows, ref diagnostics) = result;
        info!("Wrote {} rows to {}", rows, destination.display());

        if let Some(diagnostics) = diagnostics {
            diagnostics.log_summary();
            if let Some(plot_dir) = &self.diagnostics.plot_dir {
                // Rendering failures are diagnostic-only, never fatal
                if let Err(e) = diagnostics.render_plots(plot_dir) {
                    warn!("Failed to render diagnostic histograms: {}", e);
                }
            }
        }

        Ok(result)
    }

    fn emit<W: Write>(
        &self,
        out: &mut W,
        reader: &PinReader,
        tracker: &MissingValueTracker,
        imputed: &ImputedValues,
    ) -> Result<(usize, Option<ImputationDiagnostics>)> {
        let mut records = reader.records()?;
        let roles = records.roles().clone();
        write_header(out, &roles)?;

        let missing_cells = tracker.cell_set();
        let output_features = roles.output_feature_columns();

        // The diagnostic populations track the first imputed column
        let designated = imputed.columns().first().copied();
        let mut diagnostics = match designated {
            Some(column) if self.diagnostics.enabled => {
                let (reference_name, reference_position) = match self.reference_position(&roles) {
                    Some((name, position)) => (Some(name), Some(position)),
                    None => (None, None),
                };
                Some((
                    column,
                    reference_position,
                    ImputationDiagnostics::new(
                        roles.feature_columns[column].clone(),
                        reference_name,
                    ),
                ))
            }
            _ => None,
        };

        let mut rows = 0usize;
        for (row, record) in (&mut records).enumerate() {
            let record = record?;

            let mut fields: Vec<String> =
                Vec::with_capacity(3 + output_features.len());
            fields.push(record.psm_id.clone());
            fields.push(record.label_raw.clone());
            if let Some(scan) = &record.scan {
                fields.push(scan.clone());
            }

            for &(position, _) in &output_features {
                if missing_cells.contains(&(row, position)) {
                    let value = imputed.value(row, position).ok_or_else(|| {
                        Error::regression(format!(
                            "no prediction available for row {row}, column {position}"
                        ))
                    })?;
                    fields.push(format!("{value}"));
                } else {
                    fields.push(record.features[position].clone());
                }
            }

            writeln!(
                out,
                "{}\t{}\t{}",
                fields.join("\t"),
                record.sequence,
                record.proteins
            )
            .map_err(|e| Error::io("Failed to write output row", e))?;

            if let Some((column, reference_position, diag)) = &mut diagnostics {
                let reference = reference_position
                    .and_then(|position| record.features[position].parse::<f64>().ok());
                if missing_cells.contains(&(row, *column)) {
                    if let Some(value) = imputed.value(row, *column) {
                        diag.record_imputed(value, record.label, reference);
                    }
                } else if let Ok(value) = record.features[*column].parse::<f64>() {
                    diag.record_observed(value);
                }
            }

            rows += 1;
        }

        Ok((rows, diagnostics.map(|(_, _, diag)| diag)))
    }

    /// Resolve the configured reference feature to its feature position
    fn reference_position(&self, roles: &ColumnRoles) -> Option<(String, usize)> {
        let name = self.diagnostics.reference_feature.as_ref()?;
        match roles.feature_position(name) {
            Some(position) => Some((name.clone(), position)),
            None => {
                warn!("Reference feature '{}' not found in header; skipping consistency check", name);
                None
            }
        }
    }
}

/// Emit the output header: identifier, label, scan number, features in
/// original relative order, then sequence and grouping columns
fn write_header<W: Write>(out: &mut W, roles: &ColumnRoles) -> Result<()> {
    let mut fields: Vec<&str> = vec![roles.id_column.as_str(), LABEL_COLUMN];
    if let Some(position) = roles.scan_feature_index {
        fields.push(roles.feature_columns[position].as_str());
    }
    for (_, name) in roles.output_feature_columns() {
        fields.push(name);
    }

    writeln!(
        out,
        "{}\t{}\t{}",
        fields.join("\t"),
        roles.sequence_column,
        roles.grouping_column
    )
    .map_err(|e| Error::io("Failed to write output header", e))
}
