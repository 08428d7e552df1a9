//! Error types for the alz library.
//!
//! This module provides the error hierarchy for loading, merging and
//! rendering landing-zone configuration, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an alz error.
///
/// # Examples
///
/// ```
/// use alz::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("sandbox")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the alz library.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration document does not exist.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The configuration document is not valid YAML.
    #[error("invalid configuration in {origin}: {source}")]
    Parse {
        /// Where the document came from (a path or a caller-supplied label).
        origin: String,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration document parsed, but has the wrong shape.
    #[error("invalid configuration in {origin}: {message}")]
    InvalidDocument {
        /// Where the document came from.
        origin: String,
        /// A description of the problem.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An `inherits` chain refers back to an environment already in the chain.
    #[error("environment inheritance cycle: {}", chain.join(" -> "))]
    ConfigCycle {
        /// The environments in the chain, ending with the repeated one.
        chain: Vec<String>,
    },

    /// An `inherits` chain is longer than the supported maximum.
    #[error("environment inheritance chain exceeds {limit} levels at '{environment}'")]
    ConfigTooDeep {
        /// The environment at which the limit was hit.
        environment: String,
        /// The maximum supported depth.
        limit: usize,
    },

    /// Converting an artifact to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if error indicates the configuration file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use alz::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { path: PathBuf::from("/nonexistent.yaml") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error comes from an environment inheritance problem.
    #[must_use]
    pub fn is_inheritance_error(&self) -> bool {
        matches!(self, Self::ConfigCycle { .. } | Self::ConfigTooDeep { .. })
    }
}
