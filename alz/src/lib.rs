#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # alz
//!
//! A library for rendering Azure landing-zone configuration into deployment
//! artifacts.
//!
//! A single YAML document describes the landing zone. Environment-specific
//! overrides (with optional inheritance between environments) are merged onto
//! it, and the merged configuration is then projected into:
//!
//! - a Bicep parameters JSON file,
//! - a Terraform `tfvars` file,
//! - a Markdown component status report.
//!
//! ## Core Types
//!
//! - [`ConfigLoader`] and [`MergedConfig`]: Loading and environment merging
//! - [`ConfigMerger`]: The recursive override merge
//! - [`ArtifactKind`] and [`ArtifactGenerator`]: Output projections
//! - [`GeneratePlan`]: Which artifacts to write and where
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use alz::{ArtifactKind, ConfigLoader};
//!
//! let yaml = "global:\n  environment: prod\n  location: eastus\n";
//! let config = ConfigLoader::load_str(yaml, "inline").unwrap();
//! assert_eq!(config.environment(), "prod");
//!
//! let json = ArtifactKind::BicepParameters.render(&config).unwrap();
//! assert!(json.contains("\"eastus\""));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, ConfigMerger, MergedConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{GenerateOptions, GeneratePlan, PlannedArtifact};
pub use output::{write_artifact, ArtifactGenerator, ArtifactKind};
