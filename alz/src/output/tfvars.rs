//! Terraform variable file output.

use serde_yaml::Value;

use crate::config::{Component, MergedConfig};
use crate::Result;

use super::ArtifactGenerator;

const DEFAULT_AKS_VERSION: &str = "1.30";
const DEFAULT_NODE_COUNT: u64 = 2;
const DEFAULT_NODE_SIZE: &str = "Standard_d4s_v5";

/// Render a configuration value as an HCL literal.
///
/// Strings are quoted and escaped, booleans are lowercase, numbers are bare,
/// and sequences become HCL lists.
///
/// # Examples
///
/// ```
/// use alz::output::hcl_literal;
/// use serde_yaml::Value;
///
/// assert_eq!(hcl_literal(&Value::from("eastus")), "\"eastus\"");
/// assert_eq!(hcl_literal(&Value::Bool(true)), "true");
/// assert_eq!(hcl_literal(&Value::from(3)), "3");
/// ```
#[must_use]
pub fn hcl_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(hcl_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    let key = k.as_str().map_or_else(|| hcl_literal(k), quote);
                    format!("{key} = {}", hcl_literal(v))
                })
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
        Value::Tagged(tagged) => hcl_literal(&tagged.value),
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Collects `name = value` lines.
struct Assignments {
    lines: Vec<String>,
}

impl Assignments {
    fn assign(&mut self, name: &str, value: &Value) {
        self.lines.push(format!("{name} = {}", hcl_literal(value)));
    }

    fn raw(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Joined text with exactly one trailing newline.
    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        let trimmed = text.trim_end_matches('\n').len();
        text.truncate(trimmed);
        text.push('\n');
        text
    }
}

/// Projects a merged configuration into Terraform `tfvars` assignments.
///
/// Sections are written in a fixed order: header, global values, networking,
/// component enablement, then the AKS block when `containers.aks` exists.
pub struct TerraformVariablesGenerator;

impl TerraformVariablesGenerator {
    fn write_aks(out: &mut Assignments, aks: Component<'_>) {
        out.blank();
        out.raw("# AKS Configuration");
        out.assign("enable_aks", &aks.get_or("enabled", Value::Bool(false)));

        if !aks.flag("enabled") {
            return;
        }

        out.assign(
            "aks_kubernetes_version",
            &aks.get_or("version", Value::from(DEFAULT_AKS_VERSION)),
        );

        let system_pool = aks.child("systemNodePool");
        out.assign(
            "aks_system_node_count",
            &system_pool.get_or("nodeCount", Value::from(DEFAULT_NODE_COUNT)),
        );
        out.assign(
            "aks_system_node_size",
            &system_pool.get_or("vmSize", Value::from(DEFAULT_NODE_SIZE)),
        );

        let user_pool = aks.child("userNodePool");
        out.assign(
            "enable_aks_user_node_pool",
            &user_pool.get_or("enabled", Value::Bool(true)),
        );
        out.assign(
            "aks_user_node_count",
            &user_pool.get_or("nodeCount", Value::from(DEFAULT_NODE_COUNT)),
        );
        out.assign(
            "aks_user_node_size",
            &user_pool.get_or("vmSize", Value::from(DEFAULT_NODE_SIZE)),
        );
        out.raw("aks_admin_group_object_ids = []");
    }
}

impl ArtifactGenerator for TerraformVariablesGenerator {
    fn render(&self, config: &MergedConfig) -> Result<String> {
        let mut out = Assignments { lines: Vec::new() };

        out.raw("# Generated from alz-components.yaml configuration");
        out.raw(&format!("# Environment: {}", config.environment()));
        out.blank();

        for (field, name) in [
            ("environment", "environment"),
            ("organizationPrefix", "organization_prefix"),
            ("location", "location"),
        ] {
            if let Some(value) = config.global(field) {
                out.assign(name, value);
            }
        }
        out.blank();

        if let Some(hub) = config.component("networking", "hubVnet") {
            out.assign(
                "hub_vnet_address_space",
                &hub.get_or("addressSpace", Value::from("10.0.0.0/16")),
            );
        }
        if let Some(spoke) = config.component("networking", "spokeVnet") {
            out.assign(
                "spoke_vnet_address_space",
                &spoke.get_or("addressSpace", Value::from("10.1.0.0/16")),
            );
        }
        out.blank();

        if let Some(registry) = config.component("containers", "containerRegistry") {
            out.assign(
                "enable_container_registry",
                &registry.get_or("enabled", Value::Bool(true)),
            );
        }
        if let Some(web_apps) = config.component("applications", "webApps") {
            out.assign(
                "enable_app_workloads",
                &web_apps.get_or("enabled", Value::Bool(true)),
            );
        }
        if let Some(bastion) = config.component("security", "azureBastion") {
            out.assign(
                "enable_bastion",
                &bastion.get_or("enabled", Value::Bool(false)),
            );
        }

        if let Some(aks) = config.component("containers", "aks") {
            Self::write_aks(&mut out, aks);
        }

        Ok(out.finish())
    }
}
