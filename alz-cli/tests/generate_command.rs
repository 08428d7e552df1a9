//! Integration tests for artifact generation through the CLI.

mod common;

use common::{TestEnv, FULL_CONFIG, MINIMAL_CONFIG};
use predicates::prelude::*;

#[test]
fn test_all_writes_default_files() {
    let env = TestEnv::new();
    let config = env.write_config("alz-components.yaml", FULL_CONFIG);

    env.command()
        .arg(&config)
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✅ Generated Bicep parameters: main.parameters.generated.json",
        ))
        .stdout(predicate::str::contains(
            "✅ Generated Terraform variables: terraform.generated.tfvars",
        ))
        .stdout(predicate::str::contains(
            "✅ Generated status report: component-status.md",
        ));

    assert!(env.exists("main.parameters.generated.json"));
    assert!(env.exists("terraform.generated.tfvars"));
    assert!(env.exists("component-status.md"));
}

#[test]
fn test_messages_follow_generation_order() {
    let env = TestEnv::new();
    let config = env.write_config("alz.yaml", MINIMAL_CONFIG);

    let output = env.command().arg(&config).arg("--all").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let bicep = stdout.find("Bicep parameters").unwrap();
    let terraform = stdout.find("Terraform variables").unwrap();
    let report = stdout.find("status report").unwrap();
    assert!(bicep < terraform && terraform < report);
}

#[test]
fn test_bicep_output_only() {
    let env = TestEnv::new();
    let config = env.write_config("alz.yaml", MINIMAL_CONFIG);

    env.command()
        .arg(&config)
        .arg("--bicep-output")
        .arg("params.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("params.json"));

    let params: serde_json::Value = serde_json::from_str(&env.read("params.json")).unwrap();
    assert_eq!(params["parameters"]["location"]["value"], "eastus");
    assert_eq!(params["parameters"]["containerRegistrySku"]["value"], "Premium");
    assert_eq!(params["parameters"]["enableVirtualMachine"]["value"], false);

    assert!(!env.exists("terraform.generated.tfvars"));
    assert!(!env.exists("component-status.md"));
}

#[test]
fn test_parameters_are_pretty_printed() {
    let env = TestEnv::new();
    let config = env.write_config("alz.yaml", MINIMAL_CONFIG);

    env.command()
        .arg(&config)
        .arg("--bicep-output")
        .arg("params.json")
        .assert()
        .success();

    let text = env.read("params.json");
    assert!(text.starts_with("{\n  \"$schema\": "));
    assert!(text.contains("\n  \"contentVersion\": \"1.0.0.0\",\n"));
}

#[test]
fn test_environment_overrides_reach_outputs() {
    let env = TestEnv::new();
    let config = env.write_config("alz.yaml", FULL_CONFIG);

    env.command()
        .arg(&config)
        .arg("--terraform-output")
        .arg("vars.tfvars")
        .arg("--status-report")
        .arg("status.md")
        .assert()
        .success();

    let tfvars = env.read("vars.tfvars");
    assert!(tfvars.starts_with("# Generated from alz-components.yaml configuration\n# Environment: prod\n"));
    assert!(tfvars.contains("enable_bastion = true\n"));
    assert!(tfvars.contains("enable_aks = true\naks_kubernetes_version = \"1.30\"\n"));
    assert!(tfvars.ends_with("aks_admin_group_object_ids = []\n"));

    let report = env.read("status.md");
    assert!(report.contains("- Azure Bastion: ✅ Enabled\n"));
    assert!(report.contains("- AKS: ✅ Enabled\n"));
    assert!(report.contains("Organization: contoso\n"));
}

#[test]
fn test_explicit_path_overrides_default_with_all() {
    let env = TestEnv::new();
    let config = env.write_config("alz.yaml", MINIMAL_CONFIG);
    let out_dir = env.create_dir("out");

    env.command()
        .arg(&config)
        .arg("--all")
        .arg("--status-report")
        .arg(out_dir.join("report.md"))
        .assert()
        .success();

    assert!(env.exists("out/report.md"));
    assert!(!env.exists("component-status.md"));
    assert!(env.exists("main.parameters.generated.json"));
}

#[test]
fn test_no_outputs_requested_writes_nothing() {
    let env = TestEnv::new();
    let config = env.write_config("alz.yaml", MINIMAL_CONFIG);

    env.command()
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!env.exists("main.parameters.generated.json"));
}

#[test]
fn test_quiet_suppresses_success_messages() {
    let env = TestEnv::new();
    let config = env.write_config("alz.yaml", MINIMAL_CONFIG);

    env.command()
        .arg(&config)
        .arg("--all")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(env.exists("component-status.md"));
}
