//! Application constants for the PIN imputer
//!
//! This module contains the column-role synonyms, missing-value markers,
//! and default hyperparameters used throughout the application.

// =============================================================================
// PIN Column Roles and Synonyms
// =============================================================================

/// Accepted identifier column names, in resolution order
pub const ID_COLUMNS: &[&str] = &["SpecId", "PSMId"];

/// Label column name (required, exact)
pub const LABEL_COLUMN: &str = "Label";

/// Scan/run number column name (structural when present)
pub const SCAN_COLUMN: &str = "ScanNr";

/// Accepted peptide sequence column names, in resolution order
pub const SEQUENCE_COLUMNS: &[&str] = &["peptide", "Peptide"];

/// Accepted protein grouping column names, in resolution order
pub const GROUPING_COLUMNS: &[&str] = &["proteinIds", "Proteins", "Protein"];

// =============================================================================
// Missing-Value Detection
// =============================================================================

/// Raw field values recognized as missing markers (case-sensitive)
pub const MISSING_MARKERS: &[&str] = &["NA", "na"];

/// Placeholder written into the feature matrix for missing cells
pub const MISSING_PLACEHOLDER: f64 = 0.0;

// =============================================================================
// Regression Defaults
// =============================================================================

/// Default regularization strength for Ridge, Lasso and ElasticNet
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Default L1/L2 mixing ratio for ElasticNet
pub const DEFAULT_L1_RATIO: f64 = 0.5;

/// Maximum coordinate descent iterations (Lasso/ElasticNet)
pub const COORDINATE_DESCENT_MAX_ITER: usize = 1000;

/// Coordinate descent convergence tolerance on the max coefficient update
pub const COORDINATE_DESCENT_TOL: f64 = 1e-6;

// =============================================================================
// Output
// =============================================================================

/// Default output PIN file name
pub const DEFAULT_OUTPUT_PIN: &str = "imputed.pin";

/// File extension treated as gzip-compressed
pub const GZIP_EXTENSION: &str = "gz";

/// Number of bins used for diagnostic histograms
pub const HISTOGRAM_BINS: usize = 40;
