//! Main entry point for the alz CLI.
//!
//! Reads a landing-zone YAML configuration and writes any of:
//! - Bicep parameters JSON (`--bicep-output`)
//! - Terraform variables (`--terraform-output`)
//! - A Markdown status report (`--status-report`)
//!
//! `--all` writes all three using default file names.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics through the stderr logger
    alz::logging::install(alz::init_logger(cli.verbose, cli.quiet));

    let global = GlobalOptions { quiet: cli.quiet };

    match cli.generate.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{}", utils::format_failure(&e.to_string()));
            std::process::exit(e.exit_code());
        }
    }
}
