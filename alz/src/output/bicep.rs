//! Bicep deployment parameters.

use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use serde_yaml::Value;

use crate::config::MergedConfig;
use crate::Result;

use super::ArtifactGenerator;

/// `$schema` of a subscription-scope deployment parameters file.
pub const PARAMETERS_SCHEMA: &str =
    "https://schema.management.azure.com/schemas/2018-05-01/subscriptionDeploymentParameters.json#";

/// `contentVersion` written to every parameters file.
pub const CONTENT_VERSION: &str = "1.0.0.0";

/// A deployment parameters document.
///
/// Parameters keep insertion order, so the JSON output lists them in the
/// same order every time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametersFile {
    /// JSON schema URL.
    #[serde(rename = "$schema")]
    pub schema: String,
    /// Template content version.
    #[serde(rename = "contentVersion")]
    pub content_version: String,
    /// Parameter name to `{"value": ...}` wrapper.
    pub parameters: Map<String, JsonValue>,
}

impl ParametersFile {
    fn new() -> Self {
        Self {
            schema: PARAMETERS_SCHEMA.to_string(),
            content_version: CONTENT_VERSION.to_string(),
            parameters: Map::new(),
        }
    }

    fn set(&mut self, name: &str, value: &Value) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.parameters
            .insert(name.to_string(), json!({ "value": value }));
        Ok(())
    }

    /// Returns the unwrapped value of a parameter.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&JsonValue> {
        self.parameters.get(name).and_then(|p| p.get("value"))
    }
}

/// Projects a merged configuration into Bicep deployment parameters.
///
/// A parameter is emitted only when its parent key exists in the
/// configuration. Within a present parent, missing fields take defaults.
pub struct BicepParametersGenerator;

impl BicepParametersGenerator {
    /// Build the parameters document.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be converted to JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use alz::output::BicepParametersGenerator;
    /// use alz::ConfigLoader;
    ///
    /// let config = ConfigLoader::load_str("networking:\n  hubVnet: {}\n", "inline").unwrap();
    /// let params = BicepParametersGenerator::build(&config).unwrap();
    /// assert_eq!(params.value("hubVnetAddressSpace").unwrap(), "10.0.0.0/16");
    /// assert!(params.value("spokeVnetAddressSpace").is_none());
    /// ```
    pub fn build(config: &MergedConfig) -> Result<ParametersFile> {
        let mut params = ParametersFile::new();

        for name in ["location", "environment", "organizationPrefix"] {
            if let Some(value) = config.global(name) {
                params.set(name, value)?;
            }
        }

        if let Some(hub) = config.component("networking", "hubVnet") {
            params.set(
                "hubVnetAddressSpace",
                &hub.get_or("addressSpace", Value::from("10.0.0.0/16")),
            )?;
        }
        if let Some(spoke) = config.component("networking", "spokeVnet") {
            params.set(
                "spokeVnetAddressSpace",
                &spoke.get_or("addressSpace", Value::from("10.1.0.0/16")),
            )?;
        }

        if let Some(bastion) = config.component("security", "azureBastion") {
            params.set("enableBastion", &bastion.get_or("enabled", Value::Bool(false)))?;
        }

        if let Some(web_apps) = config.component("applications", "webApps") {
            params.set(
                "enableAppWorkloads",
                &web_apps.get_or("enabled", Value::Bool(true)),
            )?;
        }

        if let Some(registry) = config.component("containers", "containerRegistry") {
            params.set(
                "enableContainerRegistry",
                &registry.get_or("enabled", Value::Bool(true)),
            )?;
            params.set(
                "containerRegistrySku",
                &registry.get_or("sku", Value::from("Standard")),
            )?;
        }

        params.set("enableVirtualMachine", &Value::Bool(false))?;

        Ok(params)
    }
}

impl ArtifactGenerator for BicepParametersGenerator {
    fn render(&self, config: &MergedConfig) -> Result<String> {
        let params = Self::build(config)?;
        Ok(serde_json::to_string_pretty(&params)?)
    }
}
