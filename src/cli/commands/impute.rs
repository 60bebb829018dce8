//! Impute command implementation
//!
//! Runs the full two-pass workflow: parse and detect, build the feature
//! matrix, fit and predict, then re-emit the file with imputed values
//! substituted.

use std::path::Path;
use std::time::Instant;

use colored::*;
use tracing::{info, warn};

use super::shared::{RunStats, setup_logging};
use crate::app::services::feature_matrix::FeatureMatrixBuilder;
use crate::app::services::imputation::ImputationEngine;
use crate::app::services::missing_values::MissingValueTracker;
use crate::app::services::pin_reader::PinReader;
use crate::app::services::pin_writer::ResultWriter;
use crate::cli::args::ImputeArgs;
use crate::config::ImputeConfig;
use crate::Result;

/// Main entry point for the impute command
pub fn run_impute(args: ImputeArgs) -> Result<RunStats> {
    args.validate()?;
    setup_logging(args.get_log_level(), args.quiet)?;

    let config = args.to_config();
    let stats = execute(&args.pin, &args.output_pin, &config)?;

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Run the imputation workflow against already-validated inputs
///
/// Split out from [`run_impute`] so library callers and integration tests can
/// drive the workflow without touching the global logging setup.
pub fn execute(pin: &Path, output_pin: &Path, config: &ImputeConfig) -> Result<RunStats> {
    config.validate()?;
    let start = Instant::now();

    info!("Imputing missing values in {}", pin.display());

    // Pass 1: parse, detect, build the matrix
    let reader = PinReader::new(pin);
    let (roles, records) = reader.read_all()?;
    let tracker = MissingValueTracker::new().detect(&records, &roles)?;

    if !tracker.has_missing() {
        info!("No missing values found; output will mirror the input");
    } else {
        info!(
            "Missing values in features {:?} across {} rows",
            tracker.missing_features(),
            tracker.missing_rows().len()
        );
    }

    let matrix = FeatureMatrixBuilder::new()
        .with_bias(config.include_bias)
        .build(&records, &tracker, &roles)?;

    // Fit on the complete rows, predict the rest
    let engine = ImputationEngine::new(config.regressor, config.params);
    let imputed = engine.impute(
        &matrix.values,
        &tracker.missing_rows(),
        &tracker.missing_columns(),
    )?;

    // Pass 2: re-read from disk and substitute
    let writer = ResultWriter::new(output_pin, config.gzip_output, config.diagnostics.clone());
    let (rows, diagnostics) = writer.write(&reader, &tracker, &imputed)?;

    if rows != records.len() {
        warn!(
            "Input row count changed between passes: read {}, wrote {}",
            records.len(),
            rows
        );
    }

    // every tracked cell was substituted; the writer errors otherwise
    Ok(RunStats {
        records: rows,
        missing_cells: tracker.cells().len(),
        imputed_values: tracker.cells().len(),
        broken_constraints: diagnostics
            .as_ref()
            .map(|d| d.broken_constraints())
            .unwrap_or(0),
        output_path: Some(writer.resolved_output_path()),
        processing_time: start.elapsed(),
    })
}

/// Print the human-readable run summary
fn print_summary(stats: &RunStats) {
    println!();
    println!("{}", "PIN imputation complete".green().bold());
    println!("   Records processed: {}", stats.records);
    println!("   Missing cells:     {}", stats.missing_cells);
    println!("   Values imputed:    {}", stats.imputed_values);
    if stats.broken_constraints > 0 {
        println!(
            "   {} {}",
            "Broken constraints:".yellow(),
            stats.broken_constraints
        );
    }
    if let Some(output) = &stats.output_path {
        println!("   Output file:       {}", output.display());
    }
    println!("   Processing time:   {:.2?}", stats.processing_time);
    println!();
}
