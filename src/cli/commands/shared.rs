//! Shared components for CLI commands
//!
//! Common logging setup and the run statistics reported back to `main`.

use std::path::PathBuf;

use tracing::debug;

use crate::Result;

/// Run statistics for reporting across commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of data rows read from the input file
    pub records: usize,
    /// Number of missing cells detected
    pub missing_cells: usize,
    /// Number of values imputed
    pub imputed_values: usize,
    /// Number of soft consistency breaks (diagnostics only)
    pub broken_constraints: usize,
    /// Path the output file was written to, when one was produced
    pub output_path: Option<PathBuf>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging for a command
///
/// Uses `try_init` so repeated initialization (library callers, test runs)
/// is harmless.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pin_imputer={}", log_level)));

    let result = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}
