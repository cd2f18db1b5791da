//! New command implementation.
//!
//! Creates a Python package in a directory by asking for its metadata and
//! writing `pyproject.toml`.

use crate::error::CliError;
use crate::utils::{load_configuration, shorten_path, GlobalOptions};
use clap::{Parser, ValueEnum};
use pypher::operations::{new_project, NewProjectOptions};
use pypher::{EnvironmentContext, LinePrompter, MetadataOverrides, ProjectPath};
use std::io::{self, Write};
use std::path::PathBuf;

/// How to treat the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NewMode {
    /// Allow a directory that already has files
    Init,
}

/// Create a new Python package.
#[derive(Parser)]
#[command(about = "Create a new Python package")]
pub struct NewCommand {
    /// Use `init` to start a package in a directory that already has files
    #[arg(value_enum)]
    pub mode: Option<NewMode>,

    /// Directory of the new package
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Package name (defaults to the directory name)
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Do not prompt; requires --name
    #[arg(short = 'u', long)]
    pub unattended: bool,

    /// Package version
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// One-line package description
    #[arg(long)]
    pub description: Option<String>,

    /// Author name (defaults to git user.name)
    #[arg(long)]
    pub author: Option<String>,

    /// Author email (defaults to git user.email)
    #[arg(long)]
    pub email: Option<String>,

    /// Supported Python versions (defaults to ^MAJOR.MINOR of the local interpreter)
    #[arg(long, value_name = "CONSTRAINT")]
    pub requires_python: Option<String>,

    /// Readme file name
    #[arg(long, value_name = "FILE")]
    pub readme: Option<String>,

    /// Print the descriptor instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    fn overrides(&self) -> MetadataOverrides {
        MetadataOverrides {
            name: self.name.clone(),
            version: self.package_version.clone(),
            description: self.description.clone(),
            author_name: self.author.clone(),
            author_email: self.email.clone(),
            requires_python: self.requires_python.clone(),
            readme: self.readme.clone(),
        }
    }

    /// Execute the new command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let project = ProjectPath::resolve(&self.directory)?;
        let options = NewProjectOptions::new(project)
            .with_overrides(self.overrides())
            .with_unattended(self.unattended)
            .with_init(self.mode == Some(NewMode::Init))
            .with_dry_run(self.dry_run);

        // Fail before touching the interpreter or the console.
        options.check_preconditions()?;

        let config = load_configuration(global)?;
        let env = EnvironmentContext::detect(config.python())?;

        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        let result = new_project(&options, &env, &config, &mut prompter)?;

        if !result.written {
            io::stdout().write_all(result.document.as_bytes())?;
            return Ok(());
        }

        if !global.quiet {
            println!();
            println!("Created {}", shorten_path(&result.descriptor_path));
        }

        Ok(())
    }
}
