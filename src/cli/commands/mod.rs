//! Command implementations for the PIN imputer CLI
//!
//! Each command is implemented in its own module:
//! - `impute`: the full detect/fit/substitute workflow (default command)
//! - `scan`: detection-only missing-value report
//! - `shared`: logging setup and run statistics

pub mod impute;
pub mod scan;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the appropriate subcommand handler
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Impute(impute_args) => impute::run_impute(impute_args),
        Commands::Scan(scan_args) => scan::run_scan(scan_args),
    }
}
