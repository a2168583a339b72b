// trackrip-cli/src/main.rs
//
// Entry point for the Trackrip CLI. Parses arguments, initializes logging,
// dispatches to the command modules, and maps failures to a red error line
// and a non-zero exit code. A failed operation never leaves corrupted state
// behind; the user can simply retry with another file or selection.

use clap::Parser;
use std::process;
use trackrip_cli::cli::{Cli, Commands};
use trackrip_cli::output::print_error;
use trackrip_cli::{run_extract, run_list, run_streams};

fn main() {
    // Logging is developer diagnostics, controlled by RUST_LOG; user-facing
    // status stays on ordinary stdout/stderr.
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List(args) => run_list(args),
        Commands::Streams(args) => run_streams(args),
        Commands::Extract(args) => run_extract(args),
    };

    if let Err(e) = result {
        print_error(&format!("Error: {e}"));
        process::exit(1);
    }
}
