//! Planning and writing the requested artifacts.

use std::path::{Path, PathBuf};

use crate::config::MergedConfig;
use crate::output::{write_artifact, ArtifactKind};
use crate::Result;

/// Which artifacts to generate and where to write them.
///
/// An explicit path requests that artifact. `all` requests every artifact,
/// using default file names for any without an explicit path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Output path for the Bicep parameters JSON.
    pub bicep_output: Option<PathBuf>,
    /// Output path for the Terraform variables file.
    pub terraform_output: Option<PathBuf>,
    /// Output path for the Markdown status report.
    pub status_report: Option<PathBuf>,
    /// Generate every artifact.
    pub all: bool,
    /// Directory that default file names are resolved against.
    pub output_dir: Option<PathBuf>,
}

impl GenerateOptions {
    /// Options that request nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Bicep parameters output path.
    #[must_use]
    pub fn with_bicep_output(mut self, path: Option<PathBuf>) -> Self {
        self.bicep_output = path;
        self
    }

    /// Set the Terraform variables output path.
    #[must_use]
    pub fn with_terraform_output(mut self, path: Option<PathBuf>) -> Self {
        self.terraform_output = path;
        self
    }

    /// Set the status report output path.
    #[must_use]
    pub fn with_status_report(mut self, path: Option<PathBuf>) -> Self {
        self.status_report = path;
        self
    }

    /// Request every artifact.
    #[must_use]
    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    /// Resolve default file names against `dir` instead of the working
    /// directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    fn explicit_path(&self, kind: ArtifactKind) -> Option<&Path> {
        match kind {
            ArtifactKind::BicepParameters => self.bicep_output.as_deref(),
            ArtifactKind::TerraformVariables => self.terraform_output.as_deref(),
            ArtifactKind::StatusReport => self.status_report.as_deref(),
        }
    }

    fn default_path(&self, kind: ArtifactKind) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(kind.default_file_name()),
            None => PathBuf::from(kind.default_file_name()),
        }
    }
}

/// One artifact to render and its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedArtifact {
    /// The artifact to render.
    pub kind: ArtifactKind,
    /// Where to write it.
    pub path: PathBuf,
}

impl PlannedArtifact {
    /// Render this artifact for `config` and write it to disk.
    ///
    /// # Errors
    ///
    /// Returns rendering errors and [`crate::Error::Io`] on write failure.
    pub fn execute(&self, config: &MergedConfig) -> Result<()> {
        let contents = self.kind.render(config)?;
        write_artifact(&self.path, &contents)
    }
}

/// The ordered list of artifacts to produce.
///
/// Artifacts always come in the order Bicep parameters, Terraform
/// variables, status report.
///
/// # Examples
///
/// ```
/// use alz::{ArtifactKind, GenerateOptions, GeneratePlan};
/// use std::path::PathBuf;
///
/// let options = GenerateOptions::new().with_status_report(Some(PathBuf::from("status.md")));
/// let plan = GeneratePlan::new(options);
///
/// assert_eq!(plan.artifacts().len(), 1);
/// assert_eq!(plan.artifacts()[0].kind, ArtifactKind::StatusReport);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratePlan {
    artifacts: Vec<PlannedArtifact>,
}

impl GeneratePlan {
    /// Resolve `options` into a plan.
    #[must_use]
    pub fn new(options: GenerateOptions) -> Self {
        let artifacts = ArtifactKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let path = match options.explicit_path(kind) {
                    Some(path) => path.to_path_buf(),
                    None if options.all => options.default_path(kind),
                    None => return None,
                };
                Some(PlannedArtifact { kind, path })
            })
            .collect();

        Self { artifacts }
    }

    /// The planned artifacts, in generation order.
    #[must_use]
    pub fn artifacts(&self) -> &[PlannedArtifact] {
        &self.artifacts
    }

    /// Whether nothing was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Returns the first path planned for more than one artifact, if any.
    #[must_use]
    pub fn duplicate_path(&self) -> Option<&Path> {
        self.artifacts.iter().enumerate().find_map(|(i, artifact)| {
            self.artifacts[i + 1..]
                .iter()
                .any(|other| other.path == artifact.path)
                .then_some(artifact.path.as_path())
        })
    }

    /// Render and write every planned artifact, stopping at the first error.
    ///
    /// Returns the written paths in order.
    ///
    /// # Errors
    ///
    /// Returns the first failure; earlier artifacts remain on disk.
    pub fn execute(&self, config: &MergedConfig) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            artifact.execute(config)?;
            written.push(artifact.path.clone());
        }
        Ok(written)
    }
}
