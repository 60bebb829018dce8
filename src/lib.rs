//! PIN Imputer Library
//!
//! A Rust library for imputing missing numeric feature values in Percolator
//! PIN files (tab-delimited scored-record files of peptide-spectrum matches).
//!
//! This library provides tools for:
//! - Parsing PIN files with header synonym resolution and gzip support
//! - Detecting and tracking missing-value cells across the feature columns
//! - Building a dense feature matrix with placeholder substitution
//! - Fitting a regression model on fully-observed rows and predicting the
//!   missing cells (OLS, Ridge, Lasso or ElasticNet)
//! - Re-emitting the file with imputed values substituted in place, with
//!   optional gzip compression and diagnostic histograms

pub mod config;
pub mod constants;
pub mod plotting;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod feature_matrix;
        pub mod imputation;
        pub mod missing_values;
        pub mod pin_reader;
        pub mod pin_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Record, RecordMeta};
pub use config::ImputeConfig;

/// Result type alias for the PIN imputer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PIN imputation operations
///
/// Every error is unrecoverable for the current run: the tool either produces
/// one complete output file or none. The top-level boundary in `main` maps
/// each kind onto a distinguished exit code via [`Error::exit_code`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV-level parsing error (malformed delimited structure)
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Required column absent from the PIN header
    #[error("Schema error in file '{file}': {message}")]
    Schema { file: String, message: String },

    /// Label value outside {+1, -1}
    #[error("Invalid label '{value}' on line {line}: labels must be 1 or -1")]
    InvalidLabel { line: usize, value: String },

    /// Non-numeric, non-marker value in a feature column
    #[error(
        "Malformed feature '{column}' on line {line}: value '{value}' is neither numeric nor a recognized missing marker"
    )]
    MalformedFeature {
        line: usize,
        column: String,
        value: String,
    },

    /// No fully-observed rows available to fit a regression model
    #[error("Insufficient training data: {message}")]
    InsufficientTrainingData { message: String },

    /// Regression fitting or prediction failure
    #[error("Regression error: {message}")]
    Regression { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Histogram rendering error (diagnostic side channel only)
    #[error("Plotting error: {message}")]
    Plotting { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a schema error
    pub fn schema(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an invalid label error
    pub fn invalid_label(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidLabel {
            line,
            value: value.into(),
        }
    }

    /// Create a malformed feature error
    pub fn malformed_feature(
        line: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedFeature {
            line,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create an insufficient training data error
    pub fn insufficient_training_data(message: impl Into<String>) -> Self {
        Self::InsufficientTrainingData {
            message: message.into(),
        }
    }

    /// Create a regression error
    pub fn regression(message: impl Into<String>) -> Self {
        Self::Regression {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a plotting error
    pub fn plotting(message: impl Into<String>) -> Self {
        Self::Plotting {
            message: message.into(),
        }
    }

    /// Process exit code for this error kind
    ///
    /// Calling tooling branches on failure cause: 2 for schema problems,
    /// 3 for data-content problems, 4 for model-fitting problems, 1 for
    /// everything else (I/O, configuration, rendering).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Schema { .. } => 2,
            Self::InvalidLabel { .. } | Self::MalformedFeature { .. } => 3,
            Self::InsufficientTrainingData { .. } | Self::Regression { .. } => 4,
            _ => 1,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
