//! Artifact generation operations.
//!
//! Generation is split into two phases:
//! 1. **Planning**: resolve which artifacts were requested and where each
//!    one goes ([`GeneratePlan`])
//! 2. **Execution**: render and write each planned artifact in order
//!    ([`PlannedArtifact::execute`])
//!
//! Artifacts written before a failure stay on disk.
//!
//! # Examples
//!
//! ```no_run
//! use alz::{ConfigLoader, GenerateOptions, GeneratePlan};
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_file(Path::new("alz-components.yaml")).unwrap();
//! let plan = GeneratePlan::new(GenerateOptions::new().with_all(true));
//!
//! for artifact in plan.artifacts() {
//!     artifact.execute(&config).unwrap();
//! }
//! ```

pub mod generate;

pub use generate::{GenerateOptions, GeneratePlan, PlannedArtifact};
