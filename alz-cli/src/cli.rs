//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! The tool has a single action, so the generation arguments are flattened
//! into the top-level command.

use crate::commands::GenerateCommand;
use clap::Parser;

/// Render an Azure landing-zone YAML configuration into deployment files.
#[derive(Parser)]
#[command(name = "alz")]
#[command(
    version,
    about = "Render Azure landing-zone configuration into Bicep, Terraform and report files",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub generate: GenerateCommand,
}
