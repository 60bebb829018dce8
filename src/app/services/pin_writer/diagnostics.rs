//! Diagnostic collection for imputed values
//!
//! Purely informational side channel: collects the imputed population (split
//! by target/decoy label) and the observed population for the designated
//! feature, and counts soft consistency breaks against a reference feature.
//! Nothing here can fail a run.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::plotting::render_histogram;
use crate::{Error, Result};

/// Collected diagnostic populations for one imputation run
#[derive(Debug, Clone)]
pub struct ImputationDiagnostics {
    /// Feature the populations refer to (the first imputed column)
    feature: String,

    /// Reference feature used for the soft consistency check, when any
    reference: Option<String>,

    observed: Vec<f64>,
    imputed: Vec<f64>,
    target_imputed: Vec<f64>,
    decoy_imputed: Vec<f64>,
    broken_constraints: usize,
}

impl ImputationDiagnostics {
    pub fn new(feature: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            feature: feature.into(),
            reference,
            observed: Vec::new(),
            imputed: Vec::new(),
            target_imputed: Vec::new(),
            decoy_imputed: Vec::new(),
            broken_constraints: 0,
        }
    }

    /// Record one imputed value with its row label and optional reference
    ///
    /// The soft constraint counts imputed values below a nonzero reference
    /// when the imputed value is itself nonzero.
    pub fn record_imputed(&mut self, value: f64, label: i32, reference: Option<f64>) {
        self.imputed.push(value);
        if label == 1 {
            self.target_imputed.push(value);
        } else {
            self.decoy_imputed.push(value);
        }

        if let Some(reference) = reference {
            if reference != 0.0 && value != 0.0 && value < reference {
                self.broken_constraints += 1;
                debug!(
                    "imputed {} = {} below reference value {}",
                    self.feature, value, reference
                );
            }
        }
    }

    /// Record the observed value of the designated feature for a row that
    /// needed no imputation
    pub fn record_observed(&mut self, value: f64) {
        self.observed.push(value);
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    pub fn imputed(&self) -> &[f64] {
        &self.imputed
    }

    pub fn target_imputed(&self) -> &[f64] {
        &self.target_imputed
    }

    pub fn decoy_imputed(&self) -> &[f64] {
        &self.decoy_imputed
    }

    pub fn broken_constraints(&self) -> usize {
        self.broken_constraints
    }

    /// Log the one-line run summary
    pub fn log_summary(&self) {
        info!(
            "{} imputed values, {} broken constraints",
            self.imputed.len(),
            self.broken_constraints
        );
    }

    /// Render the observed-vs-imputed and target-vs-decoy histograms
    pub fn render_plots(&self, plot_dir: &Path) -> Result<()> {
        fs::create_dir_all(plot_dir).map_err(|e| {
            Error::io(
                format!("Failed to create plot directory {}", plot_dir.display()),
                e,
            )
        })?;

        render_histogram(
            &self.observed,
            &self.imputed,
            &plot_dir.join("imputed_hist.png"),
            "Observed values",
            "Imputed values",
        )?;
        render_histogram(
            &self.target_imputed,
            &self.decoy_imputed,
            &plot_dir.join("td_imputed_hist.png"),
            "Target imputed values",
            "Decoy imputed values",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_split_target_and_decoy() {
        let mut diag = ImputationDiagnostics::new("featB", None);
        diag.record_imputed(1.5, 1, None);
        diag.record_imputed(-0.5, -1, None);
        diag.record_imputed(2.5, 1, None);

        assert_eq!(diag.imputed().len(), 3);
        assert_eq!(diag.target_imputed(), &[1.5, 2.5]);
        assert_eq!(diag.decoy_imputed(), &[-0.5]);
    }

    #[test]
    fn test_broken_constraint_requires_both_nonzero() {
        let mut diag = ImputationDiagnostics::new("featB", Some("refFeat".to_string()));

        diag.record_imputed(0.2, 1, Some(0.8)); // imputed < reference: broken
        diag.record_imputed(0.9, 1, Some(0.8)); // imputed >= reference: fine
        diag.record_imputed(0.0, 1, Some(0.8)); // imputed zero: skipped
        diag.record_imputed(0.2, 1, Some(0.0)); // reference zero: skipped
        diag.record_imputed(0.2, 1, None); // no reference: skipped

        assert_eq!(diag.broken_constraints(), 1);
    }
}
