//! Read-only view over a merged configuration document.
//!
//! Generators never walk the raw YAML tree themselves. They ask this view for
//! sections, components and fields, which keeps the "missing means empty"
//! rules in one place.

use serde_yaml::{Mapping, Value};

/// Environment used when `global.environment` is absent.
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";

/// Top-level key holding per-environment overrides.
pub const ENVIRONMENTS_KEY: &str = "environments";

/// Override key naming the environment to inherit from.
pub const INHERITS_KEY: &str = "inherits";

/// Returns the environment selected by `global.environment`.
///
/// Non-string scalars are used by their text form, so `environment: 2024`
/// selects `environments["2024"]`.
///
/// # Examples
///
/// ```
/// use alz::config::merged::active_environment;
///
/// let root: serde_yaml::Mapping = serde_yaml::from_str("global:\n  environment: prod\n").unwrap();
/// assert_eq!(active_environment(&root), "prod");
///
/// let empty = serde_yaml::Mapping::new();
/// assert_eq!(active_environment(&empty), "sandbox");
/// ```
#[must_use]
pub fn active_environment(root: &Mapping) -> String {
    root.get("global")
        .and_then(Value::as_mapping)
        .and_then(|global| global.get("environment"))
        .and_then(scalar_text)
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// Text form of a scalar value, or `None` for null and collections.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// YAML truthiness used for enable flags.
///
/// Null, `false`, zero, the empty string and empty collections are false.
///
/// # Examples
///
/// ```
/// use alz::config::merged::is_truthy;
/// use serde_yaml::Value;
///
/// assert!(is_truthy(&Value::Bool(true)));
/// assert!(!is_truthy(&Value::Null));
/// assert!(!is_truthy(&Value::String(String::new())));
/// ```
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// A named component inside a section, such as `networking.hubVnet`.
///
/// A component that is present but not a mapping (for example `hubVnet: ~`)
/// behaves like an empty mapping.
#[derive(Debug, Clone, Copy)]
pub struct Component<'a> {
    fields: Option<&'a Mapping>,
}

impl<'a> Component<'a> {
    /// Looks up a field of this component.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(field))
    }

    /// Looks up a field, returning `default` when it is absent.
    #[must_use]
    pub fn get_or(&self, field: &str, default: Value) -> Value {
        self.get(field).cloned().unwrap_or(default)
    }

    /// Whether `field` is present and truthy.
    #[must_use]
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).is_some_and(is_truthy)
    }

    /// Returns a nested component, such as `aks.systemNodePool`.
    ///
    /// A missing nested key yields an empty component.
    #[must_use]
    pub fn child(&self, key: &str) -> Component<'a> {
        Component {
            fields: self.get(key).and_then(Value::as_mapping),
        }
    }
}

/// The configuration after environment overrides have been applied.
///
/// This is the only input to the artifact generators and is never mutated
/// after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    root: Mapping,
    environment: String,
}

impl MergedConfig {
    /// Wraps an already merged document.
    ///
    /// The environment name is read from the document's own
    /// `global.environment`.
    #[must_use]
    pub fn new(root: Mapping) -> Self {
        let environment = active_environment(&root);
        Self { root, environment }
    }

    /// The active environment name.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// The merged document.
    #[must_use]
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Returns a top-level section. Missing or non-mapping sections are `None`.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Mapping> {
        self.root.get(name).and_then(Value::as_mapping)
    }

    /// Returns a field of the `global` section.
    #[must_use]
    pub fn global(&self, field: &str) -> Option<&Value> {
        self.section("global").and_then(|global| global.get(field))
    }

    /// Returns `section.name` if the key is present.
    ///
    /// Presence is what gates optional parameters, so `hubVnet: {}` yields a
    /// component while a missing `hubVnet` yields `None`.
    #[must_use]
    pub fn component(&self, section: &str, name: &str) -> Option<Component<'_>> {
        self.section(section)
            .and_then(|s| s.get(name))
            .map(|value| Component {
                fields: value.as_mapping(),
            })
    }

    /// Whether `section.name.field` exists and is truthy.
    #[must_use]
    pub fn is_enabled(&self, section: &str, name: &str, field: &str) -> bool {
        self.component(section, name)
            .is_some_and(|component| component.flag(field))
    }
}
