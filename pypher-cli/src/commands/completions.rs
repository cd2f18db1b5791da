//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pypher";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            for line in install_hint(self.shell) {
                eprintln!("{line}");
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn install_hint(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "# Run the following command to enable completions:",
            "#   pypher completions bash > ~/.local/share/bash-completion/completions/pypher",
            "# Or source it directly in ~/.bashrc:",
            "#   eval \"$(pypher completions bash)\"",
        ],
        Shell::Zsh => &[
            "# Run the following command to enable completions:",
            "#   pypher completions zsh > ~/.zsh/completions/_pypher",
            "# Make sure ~/.zsh/completions is in your $fpath",
        ],
        Shell::Fish => &[
            "# Run the following command to enable completions:",
            "#   pypher completions fish > ~/.config/fish/completions/pypher.fish",
        ],
        Shell::PowerShell => &[
            "# Add the output to your profile:",
            "#   pypher completions powershell | Out-String | Invoke-Expression",
        ],
        _ => &[],
    }
}
