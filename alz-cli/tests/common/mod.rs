//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working directory
//! - Command builder helpers
//! - Configuration fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Landing zone with prod overrides inheriting from a shared layer.
#[allow(dead_code)]
pub const FULL_CONFIG: &str = "\
global:
  environment: prod
  location: eastus
  organizationPrefix: contoso
networking:
  hubVnet:
    enabled: true
  spokeVnet:
    enabled: true
    addressSpace: 10.1.0.0/16
security:
  azureBastion:
    enabled: false
containers:
  containerRegistry:
    enabled: true
  aks:
    enabled: false
environments:
  hardened:
    security:
      azureBastion:
        enabled: true
  prod:
    inherits: hardened
    containers:
      containerRegistry:
        sku: Premium
      aks:
        enabled: true
";

/// Minimal configuration without an `environments` section.
#[allow(dead_code)]
pub const MINIMAL_CONFIG: &str = "\
global:
  environment: prod
  location: eastus
containers:
  containerRegistry:
    enabled: true
    sku: Premium
";

/// Test environment with an isolated working directory.
///
/// Commands run with the temporary directory as their working directory,
/// so default output names land inside it.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the temporary directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("alz").expect("Failed to find alz binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("ALZ_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a configuration file and return its path.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Read a file relative to the temporary directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name))
            .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
    }

    /// Whether a file exists relative to the temporary directory.
    pub fn exists(&self, name: &str) -> bool {
        self.temp_path.join(name).exists()
    }
}
