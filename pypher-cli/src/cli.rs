//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, NewCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for scaffolding Python projects.
#[derive(Parser)]
#[command(name = "pypher")]
#[command(version, about = "Scaffold new Python projects", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.pypher/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "PYPHER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a new Python package
    New(NewCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
