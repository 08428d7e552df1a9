//! Library exports for alz-cli.
//!
//! This module exports the CLI structure so tests and tooling can inspect
//! the argument definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
