//! Recursive override merging with environment inheritance.
//!
//! Mappings merge key by key. Any other override value (scalar, sequence,
//! null, or a type mismatch) replaces the base value outright. The special
//! `inherits` key pulls in another environment's overrides before the
//! overriding layer's own keys are applied.

use serde_yaml::{Mapping, Value};

use crate::config::merged::{ENVIRONMENTS_KEY, INHERITS_KEY};
use crate::error::{Error, Result};

/// Maximum length of an `inherits` chain.
pub const MAX_INHERITANCE_DEPTH: usize = 32;

/// Merges override layers onto a base document.
///
/// # Examples
///
/// ```
/// use alz::ConfigMerger;
/// use serde_yaml::Mapping;
///
/// let base: Mapping = serde_yaml::from_str("a: 1\nnested: {x: 1, y: 2}").unwrap();
/// let overrides: Mapping = serde_yaml::from_str("nested: {y: 3}").unwrap();
///
/// let merged = ConfigMerger::merge(&base, &overrides).unwrap();
/// let expected: Mapping = serde_yaml::from_str("a: 1\nnested: {x: 1, y: 3}").unwrap();
/// assert_eq!(merged, expected);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `overrides` onto `base`, returning a new mapping.
    ///
    /// Neither input is modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigCycle`] if an `inherits` chain loops back on
    /// itself, or [`Error::ConfigTooDeep`] if it exceeds
    /// [`MAX_INHERITANCE_DEPTH`].
    pub fn merge(base: &Mapping, overrides: &Mapping) -> Result<Mapping> {
        Self::merge_with_chain(base, overrides, &mut Vec::new())
    }

    /// Merge the overrides of `environment` onto the document they live in.
    ///
    /// Unlike [`ConfigMerger::merge`], `environment` itself counts as the
    /// first link of the inheritance chain, so `dev: {inherits: dev}` is
    /// reported as a cycle.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigMerger::merge`].
    pub fn merge_environment(
        root: &Mapping,
        environment: &str,
        overrides: &Mapping,
    ) -> Result<Mapping> {
        Self::merge_with_chain(root, overrides, &mut vec![environment.to_string()])
    }

    fn merge_with_chain(
        base: &Mapping,
        overrides: &Mapping,
        chain: &mut Vec<String>,
    ) -> Result<Mapping> {
        let mut result = base.clone();

        // Inherited overrides go first so the layer's own keys win.
        if let Some(parent) = overrides.get(INHERITS_KEY) {
            result = Self::apply_inherited(base, result, parent, chain)?;
        }

        for (key, value) in overrides {
            if key.as_str() == Some(INHERITS_KEY) {
                continue;
            }

            let merged = match (result.get(key), value) {
                (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                    Value::Mapping(Self::merge_with_chain(existing, incoming, chain)?)
                }
                _ => value.clone(),
            };
            result.insert(key.clone(), merged);
        }

        Ok(result)
    }

    /// Merge the environment named by `parent` into `result`.
    ///
    /// The name is looked up in `base.environments`. Unknown names and
    /// non-string values are ignored.
    fn apply_inherited(
        base: &Mapping,
        result: Mapping,
        parent: &Value,
        chain: &mut Vec<String>,
    ) -> Result<Mapping> {
        let Some(name) = parent.as_str() else {
            log::debug!("Ignoring non-string '{INHERITS_KEY}' value: {parent:?}");
            return Ok(result);
        };

        let Some(parent_overrides) = base
            .get(ENVIRONMENTS_KEY)
            .and_then(Value::as_mapping)
            .and_then(|environments| environments.get(name))
        else {
            log::debug!("Ignoring inheritance from unknown environment '{name}'");
            return Ok(result);
        };

        if chain.iter().any(|seen| seen == name) {
            let mut cycle = chain.clone();
            cycle.push(name.to_string());
            return Err(Error::ConfigCycle { chain: cycle });
        }
        if chain.len() >= MAX_INHERITANCE_DEPTH {
            return Err(Error::ConfigTooDeep {
                environment: name.to_string(),
                limit: MAX_INHERITANCE_DEPTH,
            });
        }

        let Some(parent_overrides) = parent_overrides.as_mapping() else {
            log::debug!("Environment '{name}' has no override mapping; nothing to inherit");
            return Ok(result);
        };

        log::debug!("Applying inherited overrides from environment '{name}'");
        chain.push(name.to_string());
        let merged = Self::merge_with_chain(&result, parent_overrides, chain);
        chain.pop();
        merged
    }
}
