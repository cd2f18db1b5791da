//! Build script for pypher-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("pypher")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scaffold new Python projects")
        .long_about(
            "Create Python packages by answering a few questions; writes a PEP 621 pyproject.toml",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.pypher/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("PYPHER_CONFIG"),
        )
        .subcommands(vec![
            Command::new("new")
                .about("Create a new Python package")
                .long_about(
                    "Ask for package metadata and write pyproject.toml into the target directory. \
                     Pass `init` to allow a directory that already has files.",
                )
                .arg(Arg::new("mode").value_parser(["init"]))
                .arg(
                    Arg::new("directory")
                        .short('d')
                        .long("directory")
                        .value_name("DIR")
                        .default_value(".")
                        .help("Directory of the new package"),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help("Package name (defaults to the directory name)"),
                )
                .arg(
                    Arg::new("unattended")
                        .short('u')
                        .long("unattended")
                        .action(ArgAction::SetTrue)
                        .help("Do not prompt; requires --name"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Print the descriptor instead of writing it"),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pypher.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
