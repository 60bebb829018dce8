//! Command-line argument definitions for the PIN imputer
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{DiagnosticsConfig, ImputeConfig, RegressorKind, RegressorParams};
use crate::constants::{DEFAULT_ALPHA, DEFAULT_L1_RATIO, DEFAULT_OUTPUT_PIN};
use crate::{Error, Result};

/// CLI arguments for the PIN imputer
///
/// Imputes missing (NA) numeric feature values in Percolator PIN files by
/// regressing the affected columns on the fully-observed ones.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pin-imputer",
    version,
    about = "Impute missing feature values in Percolator PIN files",
    long_about = "Fills missing (NA) numeric feature values in Percolator PIN files by fitting a \
                  regression model (OLS, Ridge, Lasso or ElasticNet) on the fully-observed rows \
                  and predicting the missing cells. All other fields round-trip byte-for-byte, \
                  so the output drops straight back into a Percolator workflow."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the PIN imputer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Impute missing feature values and write a new PIN file (default command)
    Impute(ImputeArgs),
    /// Report missing values in a PIN file without writing anything
    Scan(ScanArgs),
}

/// Arguments for the impute command (main workflow)
#[derive(Debug, Clone, Parser)]
pub struct ImputeArgs {
    /// Input PIN file
    ///
    /// Tab-delimited Percolator input, plain or gzip-compressed (detected by
    /// a .gz extension).
    #[arg(
        short = 'i',
        long = "pin",
        value_name = "FILE",
        help = "Input PIN file (plain or .gz)"
    )]
    pub pin: PathBuf,

    /// Output PIN file
    ///
    /// A trailing .gz extension is stripped unless --gzip-output is set.
    #[arg(
        short = 'o',
        long = "output-pin",
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT_PIN,
        help = "Output PIN file"
    )]
    pub output_pin: PathBuf,

    /// Regression model used to predict missing values
    #[arg(
        short = 'r',
        long = "regressor",
        value_enum,
        default_value = "ols",
        help = "Regression model for imputation"
    )]
    pub regressor: RegressorArg,

    /// Regularization strength (Ridge, Lasso, ElasticNet)
    #[arg(
        long = "alpha",
        value_name = "FLOAT",
        default_value_t = DEFAULT_ALPHA,
        help = "Regularization strength (ignored for OLS)"
    )]
    pub alpha: f64,

    /// L1/L2 mixing ratio for ElasticNet
    ///
    /// 1.0 is pure Lasso, 0.0 pure Ridge-style shrinkage.
    #[arg(
        long = "l1-ratio",
        value_name = "FLOAT",
        default_value_t = DEFAULT_L1_RATIO,
        help = "ElasticNet L1/L2 mixing ratio in [0, 1]"
    )]
    pub l1_ratio: f64,

    /// Append a constant bias column to the feature matrix
    ///
    /// The fitted models already center the data, so this mainly matters when
    /// comparing against pipelines that train on the raw matrix.
    #[arg(long = "include-bias", help = "Append a constant 1.0 bias column")]
    pub include_bias: bool,

    /// Gzip-compress the output file
    #[arg(long = "gzip-output", help = "Write the output PIN gzip-compressed")]
    pub gzip_output: bool,

    /// Collect and report imputation diagnostics
    ///
    /// Logs the imputed-value summary and, with --plot-dir, renders the
    /// observed-vs-imputed and target-vs-decoy histograms.
    #[arg(long = "diagnostics", help = "Collect imputation diagnostics")]
    pub diagnostics: bool,

    /// Reference feature for the soft consistency check
    ///
    /// When set, counts imputed values that fall below this column's value on
    /// the same row (both nonzero). Requires --diagnostics.
    #[arg(
        long = "reference-feature",
        value_name = "COLUMN",
        help = "Feature column for the soft consistency check",
        requires = "diagnostics"
    )]
    pub reference_feature: Option<String>,

    /// Directory for diagnostic histogram images
    #[arg(
        long = "plot-dir",
        value_name = "PATH",
        help = "Directory for diagnostic histograms (requires --diagnostics)",
        requires = "diagnostics"
    )]
    pub plot_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the scan command (detection report only)
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Input PIN file
    #[arg(
        short = 'i',
        long = "pin",
        value_name = "FILE",
        help = "Input PIN file (plain or .gz)"
    )]
    pub pin: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Regressor choices exposed on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RegressorArg {
    /// Ordinary least squares
    Ols,
    /// L2-regularized least squares
    Ridge,
    /// L1-regularized least squares
    Lasso,
    /// Combined L1/L2 regularization
    ElasticNet,
}

impl From<RegressorArg> for RegressorKind {
    fn from(arg: RegressorArg) -> Self {
        match arg {
            RegressorArg::Ols => RegressorKind::OrdinaryLeastSquares,
            RegressorArg::Ridge => RegressorKind::Ridge,
            RegressorArg::Lasso => RegressorKind::Lasso,
            RegressorArg::ElasticNet => RegressorKind::ElasticNet,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ImputeArgs {
    /// Validate the impute command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.pin.exists() {
            return Err(Error::configuration(format!(
                "Input PIN file does not exist: {}",
                self.pin.display()
            )));
        }

        if !self.pin.is_file() {
            return Err(Error::configuration(format!(
                "Input PIN path is not a file: {}",
                self.pin.display()
            )));
        }

        self.to_config().validate()
    }

    /// Assemble the run configuration from the parsed arguments
    pub fn to_config(&self) -> ImputeConfig {
        ImputeConfig {
            regressor: self.regressor.into(),
            params: RegressorParams {
                alpha: self.alpha,
                l1_ratio: self.l1_ratio,
            },
            include_bias: self.include_bias,
            gzip_output: self.gzip_output,
            diagnostics: DiagnosticsConfig {
                enabled: self.diagnostics,
                reference_feature: self.reference_feature.clone(),
                plot_dir: self.plot_dir.clone(),
            },
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ScanArgs {
    /// Validate the scan command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.pin.exists() {
            return Err(Error::configuration(format!(
                "Input PIN file does not exist: {}",
                self.pin.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info", // scan exists to print its report
            1 => "debug",
            _ => "trace",
        }
    }
}
