//! Configuration file loading and environment resolution.
//!
//! This module reads a landing-zone document, picks the active environment
//! from `global.environment`, and merges that environment's overrides onto
//! the document.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::config::merged::{active_environment, MergedConfig, ENVIRONMENTS_KEY};
use crate::config::merger::ConfigMerger;
use crate::error::{Error, Result};

/// Loads landing-zone configuration documents.
///
/// # Examples
///
/// ```no_run
/// use alz::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("config/alz-components.yaml")).unwrap();
/// println!("Active environment: {}", config.environment());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a YAML file and apply its environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `path` does not exist, [`Error::Io`] if
    /// it cannot be read, [`Error::Parse`] or [`Error::InvalidDocument`] if
    /// it is not a YAML mapping, and inheritance errors from the merge.
    pub fn load_file(path: &Path) -> Result<MergedConfig> {
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Self::load_str(&contents, &path.display().to_string())
    }

    /// Parse YAML text and apply its environment overrides.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load_file`], minus the file errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use alz::ConfigLoader;
    ///
    /// let yaml = "\
    /// global:
    ///   environment: dev
    ///   location: westeurope
    /// environments:
    ///   dev:
    ///     global:
    ///       location: northeurope
    /// ";
    /// let config = ConfigLoader::load_str(yaml, "inline").unwrap();
    /// assert_eq!(config.global("location").and_then(|v| v.as_str()), Some("northeurope"));
    /// ```
    pub fn load_str(contents: &str, origin: &str) -> Result<MergedConfig> {
        let document = Self::parse_document(contents, origin)?;
        let merged = Self::apply_environment(document)?;
        Ok(MergedConfig::new(merged))
    }

    /// Parse YAML text into the root mapping.
    ///
    /// An empty document is treated as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for invalid YAML and
    /// [`Error::InvalidDocument`] if the root is not a mapping.
    pub fn parse_document(contents: &str, origin: &str) -> Result<Mapping> {
        let value: Value = serde_yaml::from_str(contents).map_err(|source| Error::Parse {
            origin: origin.to_string(),
            source,
        })?;

        match value {
            Value::Mapping(root) => Ok(root),
            Value::Null => Ok(Mapping::new()),
            other => Err(Error::InvalidDocument {
                origin: origin.to_string(),
                message: format!(
                    "expected a mapping at the document root, found {}",
                    describe(&other)
                ),
            }),
        }
    }

    /// Merge the active environment's overrides onto `document`.
    ///
    /// Documents without a matching `environments` entry are returned as is.
    ///
    /// # Errors
    ///
    /// Returns inheritance errors from [`ConfigMerger::merge_environment`].
    pub fn apply_environment(document: Mapping) -> Result<Mapping> {
        let environment = active_environment(&document);

        let overrides = document
            .get(ENVIRONMENTS_KEY)
            .and_then(Value::as_mapping)
            .and_then(|environments| environments.get(environment.as_str()));

        match overrides {
            Some(Value::Mapping(overrides)) => {
                log::debug!("Applying overrides for environment '{environment}'");
                ConfigMerger::merge_environment(&document, &environment, overrides)
            }
            Some(_) => {
                log::debug!("Environment '{environment}' has no override mapping; using base document");
                Ok(document)
            }
            None => {
                log::debug!("No overrides defined for environment '{environment}'");
                Ok(document)
            }
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
