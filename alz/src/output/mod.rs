//! Artifact generation for merged landing-zone configuration.
//!
//! Each artifact is a read-only projection of a [`MergedConfig`]:
//!
//! - Bicep parameters JSON (`main.parameters.generated.json`)
//! - Terraform variables (`terraform.generated.tfvars`)
//! - Markdown component status report (`component-status.md`)
//!
//! Generators share no state and can run in any order.

mod bicep;
mod report;
mod tfvars;
mod writer;

use crate::config::MergedConfig;
use crate::Result;

pub use bicep::{BicepParametersGenerator, ParametersFile, CONTENT_VERSION, PARAMETERS_SCHEMA};
pub use report::{StatusReportGenerator, DISABLED_MARKER, ENABLED_MARKER};
pub use tfvars::{hcl_literal, TerraformVariablesGenerator};
pub use writer::write_artifact;

/// Trait for projecting a merged configuration into one artifact format.
pub trait ArtifactGenerator {
    /// Render the artifact as the exact text to write to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration value cannot be represented in
    /// the target format.
    fn render(&self, config: &MergedConfig) -> Result<String>;
}

/// The artifacts this crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Bicep deployment parameters JSON.
    BicepParameters,
    /// Terraform `tfvars` assignments.
    TerraformVariables,
    /// Markdown component status report.
    StatusReport,
}

impl ArtifactKind {
    /// All artifact kinds, in generation order.
    pub const ALL: [Self; 3] = [
        Self::BicepParameters,
        Self::TerraformVariables,
        Self::StatusReport,
    ];

    /// File name used when the caller does not supply a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use alz::ArtifactKind;
    ///
    /// assert_eq!(ArtifactKind::StatusReport.default_file_name(), "component-status.md");
    /// ```
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::BicepParameters => "main.parameters.generated.json",
            Self::TerraformVariables => "terraform.generated.tfvars",
            Self::StatusReport => "component-status.md",
        }
    }

    /// Human-readable name used in progress messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BicepParameters => "Bicep parameters",
            Self::TerraformVariables => "Terraform variables",
            Self::StatusReport => "status report",
        }
    }

    /// Create the generator for this artifact.
    #[must_use]
    pub fn create_generator(self) -> Box<dyn ArtifactGenerator> {
        match self {
            Self::BicepParameters => Box::new(BicepParametersGenerator),
            Self::TerraformVariables => Box::new(TerraformVariablesGenerator),
            Self::StatusReport => Box::new(StatusReportGenerator),
        }
    }

    /// Render this artifact for `config`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying generator.
    pub fn render(self, config: &MergedConfig) -> Result<String> {
        self.create_generator().render(config)
    }
}
