//! Main entry point for the pypher CLI.
//!
//! Commands:
//! - `new`: Create a new Python package and its `pyproject.toml`
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    pypher::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::New(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
