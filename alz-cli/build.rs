//! Build script for alz-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/generate.rs.
fn build_cli() -> Command {
    Command::new("alz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Azure landing-zone configuration into Bicep, Terraform and report files")
        .long_about(
            "Reads a landing-zone YAML configuration, applies the active environment's \
             overrides, and writes Bicep parameters, Terraform variables and a Markdown \
             component status report",
        )
        .arg(
            Arg::new("config")
                .value_name("CONFIG")
                .help("Path to YAML configuration file")
                .required(true),
        )
        .arg(
            Arg::new("bicep-output")
                .long("bicep-output")
                .value_name("PATH")
                .help("Output path for Bicep parameters JSON"),
        )
        .arg(
            Arg::new("terraform-output")
                .long("terraform-output")
                .value_name("PATH")
                .help("Output path for Terraform tfvars"),
        )
        .arg(
            Arg::new("status-report")
                .long("status-report")
                .value_name("PATH")
                .help("Output path for status report markdown"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Generate all output files with default names")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("alz.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
