//! Scan command implementation
//!
//! Detection-only pass: reports where missing values sit in a PIN file
//! without producing any output file. Useful for deciding whether a run
//! needs regularization or whether the file needs imputation at all.

use std::time::Instant;

use colored::*;
use tracing::info;

use super::shared::{RunStats, setup_logging};
use crate::Result;
use crate::app::services::missing_values::MissingValueTracker;
use crate::app::services::pin_reader::PinReader;
use crate::cli::args::ScanArgs;

/// Main entry point for the scan command
pub fn run_scan(args: ScanArgs) -> Result<RunStats> {
    args.validate()?;
    setup_logging(args.get_log_level(), false)?;

    let start = Instant::now();
    info!("Scanning {} for missing values", args.pin.display());

    let reader = PinReader::new(&args.pin);
    let (roles, records) = reader.read_all()?;
    let tracker = MissingValueTracker::new().detect(&records, &roles)?;

    print_report(&args, records.len(), roles.feature_count(), &tracker);

    Ok(RunStats {
        records: records.len(),
        missing_cells: tracker.cells().len(),
        imputed_values: 0,
        broken_constraints: 0,
        output_path: None,
        processing_time: start.elapsed(),
    })
}

/// Print the human-readable scan report
fn print_report(args: &ScanArgs, records: usize, feature_count: usize, tracker: &MissingValueTracker) {
    println!();
    println!("{} {}", "Scan report for".bold(), args.pin.display());
    println!("   Records:          {}", records);
    println!("   Feature columns:  {}", feature_count);
    println!("   Missing cells:    {}", tracker.cells().len());

    if !tracker.has_missing() {
        println!("   {}", "File is fully observed".green());
        println!();
        return;
    }

    println!("   Affected rows:    {}", tracker.missing_rows().len());
    println!(
        "   Affected features: {}",
        tracker
            .missing_features()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );

    // per-record detail at the end, one line per missing cell
    println!();
    for cell in tracker.cells() {
        println!(
            "   {} row {} (feature column {})",
            cell.psm_id.yellow(),
            cell.row + 1,
            cell.column
        );
    }
    println!();
}
