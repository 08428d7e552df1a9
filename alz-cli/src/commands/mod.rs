//! CLI command implementations.
//!
//! - `generate`: Load a configuration and write the requested artifacts

pub mod generate;

pub use generate::GenerateCommand;
