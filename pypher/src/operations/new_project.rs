//! Creating a new project: preconditions, elicitation, and writing the
//! descriptor.

use std::path::PathBuf;

use crate::config::Config;
use crate::elicit::{ElicitationFlow, FlowDefaults, MetadataOverrides, Prompter};
use crate::environment::EnvironmentContext;
use crate::error::{Error, Result};
use crate::metadata::ProjectMetadata;
use crate::path::ProjectPath;
use crate::pyproject;

/// Options for creating a new project.
#[derive(Debug, Clone)]
pub struct NewProjectOptions {
    /// Target directory.
    pub project: ProjectPath,
    /// Values supplied up front.
    pub overrides: MetadataOverrides,
    /// Skip all prompts.
    pub unattended: bool,
    /// Allow a directory that already has content.
    pub init: bool,
    /// Render the descriptor without touching the filesystem.
    pub dry_run: bool,
}

impl NewProjectOptions {
    /// Creates options for `project` with every flag off.
    #[must_use]
    pub fn new(project: ProjectPath) -> Self {
        Self {
            project,
            overrides: MetadataOverrides::default(),
            unattended: false,
            init: false,
            dry_run: false,
        }
    }

    /// Sets the explicit package name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.overrides.name = name;
        self
    }

    /// Sets all up-front values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: MetadataOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets whether to skip prompting.
    #[must_use]
    pub fn with_unattended(mut self, unattended: bool) -> Self {
        self.unattended = unattended;
        self
    }

    /// Sets whether a non-empty directory is acceptable.
    #[must_use]
    pub fn with_init(mut self, init: bool) -> Self {
        self.init = init;
        self
    }

    /// Sets whether to skip writing.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check everything that can be checked before prompting.
    ///
    /// Unattended mode needs an explicit name, and an existing directory must
    /// be empty unless `init` is set. A directory that does not exist yet is
    /// acceptable; it is created later.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnattendedWithoutName`], [`Error::DirectoryNotEmpty`],
    /// or the error from inspecting the directory.
    pub fn check_preconditions(&self) -> Result<()> {
        if self.unattended && self.overrides.name.is_none() {
            return Err(Error::UnattendedWithoutName);
        }

        if self.project.exists() && !self.init && !self.project.is_empty()? {
            return Err(Error::DirectoryNotEmpty {
                path: self.project.path().to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Result of creating a new project.
#[derive(Debug, Clone)]
pub struct NewProjectResult {
    /// Where the descriptor was (or, in a dry run, would be) written.
    pub descriptor_path: PathBuf,
    /// Whether the project directory had to be created.
    pub directory_created: bool,
    /// Whether the descriptor was written.
    pub written: bool,
    /// The rendered descriptor.
    pub document: String,
    /// The collected metadata.
    pub metadata: ProjectMetadata,
}

/// Create a new project as described by `options`.
///
/// Runs the precondition checks, elicits metadata (through `prompter` unless
/// unattended), creates the directory if it is missing, and writes
/// `pyproject.toml`. Nothing is written if elicitation fails. A directory
/// created here is left in place if writing fails.
///
/// # Errors
///
/// Returns any precondition, elicitation, directory, or write error.
///
/// # Examples
///
/// ```
/// use pypher::config::Config;
/// use pypher::elicit::LinePrompter;
/// use pypher::operations::{new_project, NewProjectOptions};
/// use pypher::{EnvironmentContext, GitIdentity, ProjectPath, PythonVersion};
///
/// let tmp = tempfile::tempdir().unwrap();
/// let project = ProjectPath::resolve(tmp.path().join("demo")).unwrap();
/// let env = EnvironmentContext::new(GitIdentity::default(), PythonVersion::new(3, 12, 0));
///
/// let options = NewProjectOptions::new(project)
///     .with_name(Some("demo".to_string()))
///     .with_unattended(true);
/// let mut prompter = LinePrompter::new(std::io::empty(), std::io::sink());
/// let result = new_project(&options, &env, &Config::default(), &mut prompter).unwrap();
///
/// assert!(result.directory_created);
/// assert!(result.descriptor_path.exists());
/// assert_eq!(result.metadata.requires_python, "^3.12");
/// ```
pub fn new_project<P: Prompter + ?Sized>(
    options: &NewProjectOptions,
    env: &EnvironmentContext,
    config: &Config,
    prompter: &mut P,
) -> Result<NewProjectResult> {
    options.check_preconditions()?;

    let defaults = FlowDefaults::resolve(&options.project, &options.overrides, env, config);
    let flow = ElicitationFlow::new(defaults);
    let metadata = if options.unattended {
        flow.run_unattended()?
    } else {
        flow.run(prompter)?
    };

    let document = pyproject::render_document(&metadata)?.to_string();
    let descriptor_path = options.project.descriptor_path();

    if options.dry_run {
        log::info!("dry run: not writing {}", descriptor_path.display());
        return Ok(NewProjectResult {
            descriptor_path,
            directory_created: false,
            written: false,
            document,
            metadata,
        });
    }

    let directory_created = !options.project.exists();
    if directory_created {
        log::info!("creating directory {}", options.project);
        options.project.mkdir_all()?;
    }

    let descriptor_path = pyproject::write(&metadata, &options.project)?;
    log::info!("wrote {}", descriptor_path.display());

    Ok(NewProjectResult {
        descriptor_path,
        directory_created,
        written: true,
        document,
        metadata,
    })
}
