use clap::Parser;
use pin_imputer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with a code that
            // tells calling tooling what went wrong
            eprintln!("Error: {:#}", error);
            process::exit(error.exit_code());
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("PIN Imputer - Percolator PIN missing-value imputation");
    println!("=====================================================");
    println!();
    println!("Fill missing (NA) numeric feature values in Percolator PIN files by");
    println!("regression over the fully-observed feature columns. Everything else");
    println!("round-trips byte-for-byte.");
    println!();
    println!("USAGE:");
    println!("    pin-imputer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    impute      Impute missing values and write a new PIN file (main command)");
    println!("    scan        Report missing values without writing anything");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Impute with ordinary least squares (default):");
    println!("    pin-imputer impute --pin input.pin --output-pin imputed.pin");
    println!();
    println!("    # Ridge regression with diagnostics and histograms:");
    println!("    pin-imputer impute --pin input.pin.gz --regressor ridge --alpha 0.5 \\");
    println!("                       --diagnostics --plot-dir plots/");
    println!();
    println!("    # Check a file for missing values first:");
    println!("    pin-imputer scan --pin input.pin");
    println!();
    println!("For detailed help on any command, use:");
    println!("    pin-imputer <COMMAND> --help");
}
