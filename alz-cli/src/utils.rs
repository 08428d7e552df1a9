//! Utility functions for CLI operations.

/// Marker printed before success messages.
pub const SUCCESS_MARKER: &str = "✅";

/// Marker printed before error messages.
pub const FAILURE_MARKER: &str = "❌";

/// Global CLI options shared across commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Print a success line to stdout unless `--quiet` was given.
pub fn print_success(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        println!("{SUCCESS_MARKER} {message}");
    }
}

/// Format an error line for stderr.
pub fn format_failure(message: &str) -> String {
    format!("{FAILURE_MARKER} Error: {message}")
}
