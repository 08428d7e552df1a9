//! Generate command implementation.
//!
//! Loads the configuration, resolves the requested artifacts and writes
//! them one at a time, reporting each file as it is written.

use crate::error::CliError;
use crate::utils::{print_success, GlobalOptions};
use alz::{ConfigLoader, GenerateOptions, GeneratePlan};
use clap::Args;
use std::path::PathBuf;

/// Generate deployment files from a landing-zone configuration.
#[derive(Args)]
pub struct GenerateCommand {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output path for Bicep parameters JSON
    #[arg(long, value_name = "PATH")]
    pub bicep_output: Option<PathBuf>,

    /// Output path for Terraform tfvars
    #[arg(long, value_name = "PATH")]
    pub terraform_output: Option<PathBuf>,

    /// Output path for status report markdown
    #[arg(long, value_name = "PATH")]
    pub status_report: Option<PathBuf>,

    /// Generate all output files with default names
    #[arg(long)]
    pub all: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let plan = GeneratePlan::new(
            GenerateOptions::new()
                .with_bicep_output(self.bicep_output)
                .with_terraform_output(self.terraform_output)
                .with_status_report(self.status_report)
                .with_all(self.all),
        );

        if let Some(path) = plan.duplicate_path() {
            return Err(CliError::InvalidArguments(format!(
                "{} is requested for more than one output",
                path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config)?;
        log::info!(
            "Loaded {} for environment '{}'",
            self.config.display(),
            config.environment()
        );

        if plan.is_empty() {
            log::warn!("No outputs requested; use --all or an output flag to write files");
            return Ok(());
        }

        for artifact in plan.artifacts() {
            artifact.execute(&config)?;
            print_success(
                global,
                &format!(
                    "Generated {}: {}",
                    artifact.kind.description(),
                    artifact.path.display()
                ),
            );
        }

        Ok(())
    }
}
