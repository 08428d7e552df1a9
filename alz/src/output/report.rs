//! Markdown component status report.

use crate::config::merged::scalar_text;
use crate::config::MergedConfig;
use crate::Result;

use super::ArtifactGenerator;

/// Glyph prefixed to enabled components.
pub const ENABLED_MARKER: &str = "✅";

/// Glyph prefixed to disabled components.
pub const DISABLED_MARKER: &str = "❌";

struct ReportLine {
    label: &'static str,
    component: &'static str,
    field: &'static str,
    enabled_text: &'static str,
}

struct ReportSection {
    heading: &'static str,
    section: &'static str,
    lines: &'static [ReportLine],
}

const fn enabled(label: &'static str, component: &'static str) -> ReportLine {
    ReportLine {
        label,
        component,
        field: "enabled",
        enabled_text: "Enabled",
    }
}

const SECTIONS: &[ReportSection] = &[
    ReportSection {
        heading: "Networking Components",
        section: "networking",
        lines: &[
            enabled("Hub VNet", "hubVnet"),
            enabled("Spoke VNet", "spokeVnet"),
            enabled("VNet Peering", "peering"),
        ],
    },
    ReportSection {
        heading: "Security Components",
        section: "security",
        lines: &[
            enabled("Azure Firewall", "azureFirewall"),
            enabled("Azure Bastion", "azureBastion"),
            enabled("Private DNS Resolver", "privateDnsResolver"),
            enabled("Entra Private Access", "entraPrivateAccess"),
        ],
    },
    ReportSection {
        heading: "Application Services",
        section: "applications",
        lines: &[
            enabled("Web Apps", "webApps"),
            enabled("Container Apps", "containerApps"),
            enabled("Azure Functions", "functions"),
        ],
    },
    ReportSection {
        heading: "Container Services",
        section: "containers",
        lines: &[
            enabled("Container Registry", "containerRegistry"),
            enabled("AKS", "aks"),
        ],
    },
    ReportSection {
        heading: "Data Services",
        section: "data",
        lines: &[
            enabled("PostgreSQL", "postgresql"),
            enabled("Storage Account", "storageAccount"),
        ],
    },
    ReportSection {
        heading: "Identity & Access Management",
        section: "identity",
        lines: &[
            enabled("Key Vault", "keyVault"),
            ReportLine {
                label: "Managed Identity",
                component: "managedIdentity",
                field: "systemAssigned",
                enabled_text: "System Assigned",
            },
        ],
    },
    ReportSection {
        heading: "Monitoring & Observability",
        section: "monitoring",
        lines: &[
            enabled("Log Analytics", "logAnalytics"),
            enabled("Application Insights", "applicationInsights"),
            enabled("Microsoft Sentinel", "sentinelSiem"),
            enabled("Microsoft Defender", "defender"),
        ],
    },
];

/// Projects a merged configuration into a Markdown status report.
///
/// Every known component gets one line, in a fixed order, marked enabled
/// only when its flag is present and truthy.
pub struct StatusReportGenerator;

impl ArtifactGenerator for StatusReportGenerator {
    fn render(&self, config: &MergedConfig) -> Result<String> {
        let organization = config
            .global("organizationPrefix")
            .and_then(scalar_text)
            .unwrap_or_else(|| "N/A".to_string());

        let mut lines = vec![
            "# Azure Landing Zone Component Status Report".to_string(),
            format!("Environment: {}", config.environment()),
            format!("Organization: {organization}"),
            String::new(),
        ];

        for section in SECTIONS {
            lines.push(format!("## {}", section.heading));
            for line in section.lines {
                let status = if config.is_enabled(section.section, line.component, line.field) {
                    format!("{ENABLED_MARKER} {}", line.enabled_text)
                } else {
                    format!("{DISABLED_MARKER} Disabled")
                };
                lines.push(format!("- {}: {status}", line.label));
            }
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }
}
