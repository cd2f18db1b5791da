//! The question/answer flow that fills in a [`ProjectMetadata`].
//!
//! The flow is a state machine over [`Step`]s in a fixed order. Each step is
//! described by a static [`FieldSpec`] (label, length limit, validator) and
//! draws its default from [`FlowDefaults`]. Answers are fed through
//! [`ElicitationFlow::submit`], which either commits the value and advances or
//! returns the rejection without moving.
//!
//! Console I/O sits behind the [`Prompter`] trait so the flow can be driven by
//! a terminal, a byte buffer, or a scripted test double.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::environment::EnvironmentContext;
use crate::error::{Error, Result};
use crate::metadata::{Author, BuildSystem, ProjectMetadata};
use crate::path::ProjectPath;
use crate::validate::{
    check_email, check_length, check_package_name, check_version, to_kebab_case, ValidationError,
};

/// Title announced before the first prompt.
pub const FLOW_TITLE: &str = "New Package";

/// Answer that leaves an optional field blank instead of taking its default.
pub const CLEAR_ANSWER: &str = "-";

/// A validator attached to a step.
pub type Validator = fn(&str) -> std::result::Result<(), ValidationError>;

/// One prompt in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Package name.
    Name,
    /// Package version.
    Version,
    /// One-line description.
    Description,
    /// First author's name.
    AuthorName,
    /// First author's email.
    AuthorEmail,
    /// Supported interpreter range.
    PythonVersion,
    /// Readme file name.
    Readme,
    /// Terminal state; nothing left to ask.
    Done,
}

/// Static description of a prompt.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Text shown to the user.
    pub label: &'static str,
    /// Field name used in errors.
    pub field: &'static str,
    /// Maximum answer length in characters.
    pub limit: usize,
    /// Whether [`CLEAR_ANSWER`] may blank the field.
    pub optional: bool,
    /// Content check, if the field has one.
    pub validator: Option<Validator>,
}

impl FieldSpec {
    /// Apply the length limit, then the validator.
    ///
    /// # Errors
    ///
    /// Returns the first check that rejects `value`.
    pub fn check(&self, value: &str) -> std::result::Result<(), ValidationError> {
        check_length(self.field, value, self.limit)?;
        match self.validator {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }
}

static FIELDS: [(Step, FieldSpec); 7] = [
    (
        Step::Name,
        FieldSpec {
            label: "Package Name",
            field: "name",
            limit: 128,
            optional: false,
            validator: Some(check_package_name as Validator),
        },
    ),
    (
        Step::Version,
        FieldSpec {
            label: "Version",
            field: "version",
            limit: 16,
            optional: false,
            validator: Some(check_version as Validator),
        },
    ),
    (
        Step::Description,
        FieldSpec {
            label: "Description",
            field: "description",
            limit: 4096,
            optional: true,
            validator: None,
        },
    ),
    (
        Step::AuthorName,
        FieldSpec {
            label: "Author",
            field: "author",
            limit: 4096,
            optional: true,
            validator: None,
        },
    ),
    (
        Step::AuthorEmail,
        FieldSpec {
            label: "Email",
            field: "email",
            limit: 4096,
            optional: true,
            validator: Some(check_email as Validator),
        },
    ),
    (
        Step::PythonVersion,
        FieldSpec {
            label: "Python Version",
            field: "requires-python",
            limit: 32,
            optional: true,
            validator: None,
        },
    ),
    (
        Step::Readme,
        FieldSpec {
            label: "Readme file name",
            field: "readme",
            limit: 128,
            optional: false,
            validator: None,
        },
    ),
];

impl Step {
    /// The first step of every flow.
    pub const FIRST: Self = Self::Name;

    /// The step that follows this one. `Done` is absorbing.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Version,
            Self::Version => Self::Description,
            Self::Description => Self::AuthorName,
            Self::AuthorName => Self::AuthorEmail,
            Self::AuthorEmail => Self::PythonVersion,
            Self::PythonVersion => Self::Readme,
            Self::Readme | Self::Done => Self::Done,
        }
    }

    /// The prompt description, or `None` for [`Step::Done`].
    #[must_use]
    pub fn spec(self) -> Option<&'static FieldSpec> {
        FIELDS
            .iter()
            .find(|(step, _)| *step == self)
            .map(|(_, spec)| spec)
    }
}

/// Values supplied up front, e.g. from command-line flags.
///
/// In interactive mode they replace the offered defaults; in unattended mode
/// they are the answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOverrides {
    /// Explicit package name; kebab-cased before use.
    pub name: Option<String>,
    /// Package version.
    pub version: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Author name.
    pub author_name: Option<String>,
    /// Author email.
    pub author_email: Option<String>,
    /// `requires-python` constraint.
    pub requires_python: Option<String>,
    /// Readme file name.
    pub readme: Option<String>,
}

impl MetadataOverrides {
    /// Overrides carrying only an explicit name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// The default offered at each step, plus the structural fields the flow
/// does not ask about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDefaults {
    /// Whether the name default came from an explicit name.
    pub explicit_name: bool,
    /// Name default.
    pub name: String,
    /// Version default.
    pub version: String,
    /// Description default.
    pub description: String,
    /// Author name default.
    pub author_name: String,
    /// Author email default.
    pub author_email: String,
    /// `requires-python` default.
    pub requires_python: String,
    /// Readme default.
    pub readme: String,
    /// Build system written to the descriptor.
    pub build_system: BuildSystem,
    /// License text written to the descriptor.
    pub license: Option<String>,
}

impl FlowDefaults {
    /// Derive defaults from the target directory, environment and
    /// configuration, with `overrides` taking precedence.
    ///
    /// The name default is the kebab-cased explicit name if there is one,
    /// otherwise the kebab-cased directory name.
    #[must_use]
    pub fn resolve(
        project: &ProjectPath,
        overrides: &MetadataOverrides,
        env: &EnvironmentContext,
        config: &Config,
    ) -> Self {
        let pick = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };

        Self {
            explicit_name: overrides.name.is_some(),
            name: to_kebab_case(overrides.name.as_deref().unwrap_or(project.name())),
            version: pick(&overrides.version, config.default_version()),
            description: pick(&overrides.description, ""),
            author_name: pick(&overrides.author_name, &env.git.user_name),
            author_email: overrides
                .author_email
                .clone()
                .unwrap_or_else(|| usable_git_email(&env.git.user_email)),
            requires_python: overrides
                .requires_python
                .clone()
                .unwrap_or_else(|| env.python.caret_constraint()),
            readme: pick(&overrides.readme, config.readme()),
            build_system: config.build_system(),
            license: config.license().map(String::from),
        }
    }

    /// The default offered at `step`; empty for [`Step::Done`].
    #[must_use]
    pub fn get(&self, step: Step) -> &str {
        match step {
            Step::Name => &self.name,
            Step::Version => &self.version,
            Step::Description => &self.description,
            Step::AuthorName => &self.author_name,
            Step::AuthorEmail => &self.author_email,
            Step::PythonVersion => &self.requires_python,
            Step::Readme => &self.readme,
            Step::Done => "",
        }
    }
}

/// The git email as an email default, or empty if it would not pass the
/// email check.
fn usable_git_email(email: &str) -> String {
    let email = email.trim();
    match check_email(email) {
        Ok(()) => email.to_string(),
        Err(_) => {
            log::warn!("ignoring git user.email {email:?}: not valid email address");
            String::new()
        }
    }
}

/// Console collaborator for the interactive flow.
pub trait Prompter {
    /// Announce the start of the flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn begin(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    /// Show `label` with its `default` and read one line of input.
    ///
    /// Returns `None` when input has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>>;

    /// Tell the user why the last answer for `label` was rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn reject(&mut self, label: &str, reason: &str) -> Result<()>;
}

/// A [`Prompter`] over a line-oriented reader and a writer.
///
/// # Examples
///
/// ```
/// use pypher::elicit::{LinePrompter, Prompter};
/// use std::io::Cursor;
///
/// let mut prompter = LinePrompter::new(Cursor::new("my-pkg\n"), Vec::new());
/// let answer = prompter.ask("Package Name", "default-name").unwrap();
/// assert_eq!(answer.as_deref(), Some("my-pkg\n"));
///
/// let (_, output) = prompter.into_inner();
/// assert_eq!(String::from_utf8(output).unwrap(), " Package Name (default-name): ");
/// ```
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Create a prompter reading answers from `input` and writing prompts to
    /// `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn begin(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "\n {title}\n")?;
        writeln!(
            self.output,
            " Press Enter to accept a default, {CLEAR_ANSWER} to leave an optional field blank.\n"
        )?;
        Ok(())
    }

    fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>> {
        if default.is_empty() {
            write!(self.output, " {label}: ")?;
        } else {
            write!(self.output, " {label} ({default}): ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, label: &str, reason: &str) -> Result<()> {
        writeln!(self.output, " {label} ✘ Error: {reason}")?;
        Ok(())
    }
}

/// The elicitation state machine.
///
/// # Examples
///
/// ```
/// use pypher::elicit::{ElicitationFlow, FlowDefaults, Step};
/// use pypher::BuildSystem;
///
/// let defaults = FlowDefaults {
///     explicit_name: false,
///     name: "my-app".to_string(),
///     version: "0.1.0".to_string(),
///     description: String::new(),
///     author_name: "Alex".to_string(),
///     author_email: String::new(),
///     requires_python: "^3.11".to_string(),
///     readme: "README.md".to_string(),
///     build_system: BuildSystem::default(),
///     license: None,
/// };
///
/// let mut flow = ElicitationFlow::new(defaults);
/// assert!(flow.submit("Not Kebab").is_err());
/// assert_eq!(flow.step(), Step::Name);
/// assert_eq!(flow.submit("").unwrap(), Step::Version);
/// ```
#[derive(Debug, Clone)]
pub struct ElicitationFlow {
    defaults: FlowDefaults,
    step: Step,
    metadata: ProjectMetadata,
}

impl ElicitationFlow {
    /// Start a flow at [`Step::FIRST`].
    #[must_use]
    pub fn new(defaults: FlowDefaults) -> Self {
        let mut metadata = ProjectMetadata::new();
        metadata.build_system = defaults.build_system.clone();
        if let Some(ref license) = defaults.license {
            metadata.set_license_text(license.clone());
        }

        Self {
            defaults,
            step: Step::FIRST,
            metadata,
        }
    }

    /// The step waiting for an answer.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// The default offered at the current step.
    #[must_use]
    pub fn current_default(&self) -> &str {
        self.defaults.get(self.step)
    }

    /// The record as filled in so far.
    #[must_use]
    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    /// Answer the current step.
    ///
    /// Surrounding whitespace is trimmed and an empty answer takes the
    /// default. [`CLEAR_ANSWER`] blanks an optional field. On success the value is committed and the new step returned;
    /// on rejection the flow stays where it is. Submitting to a finished flow
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] explaining the rejection.
    pub fn submit(&mut self, answer: &str) -> std::result::Result<Step, ValidationError> {
        let Some(spec) = self.step.spec() else {
            return Ok(Step::Done);
        };

        let trimmed = answer.trim();
        let value = if spec.optional && trimmed == CLEAR_ANSWER {
            String::new()
        } else if trimmed.is_empty() {
            self.current_default().trim().to_string()
        } else {
            trimmed.to_string()
        };

        spec.check(&value)?;
        self.commit(value);
        self.step = self.step.next();
        Ok(self.step)
    }

    fn commit(&mut self, value: String) {
        let meta = &mut self.metadata;
        match self.step {
            Step::Name => meta.name = value,
            Step::Version => meta.version = value,
            Step::Description => meta.description = value,
            Step::AuthorName => meta.authors = vec![Author::new(value, "")],
            Step::AuthorEmail => match meta.authors.first_mut() {
                Some(author) => author.email = value,
                None => meta.authors.push(Author::new("", value)),
            },
            Step::PythonVersion => meta.requires_python = value,
            Step::Readme => meta.readme = value,
            Step::Done => {}
        }
    }

    /// Drive the flow to completion through `prompter`.
    ///
    /// Rejected answers are reported and the same step is asked again, with
    /// no limit on retries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] if input ends before the flow is done,
    /// or any console error from the prompter.
    pub fn run<P: Prompter + ?Sized>(mut self, prompter: &mut P) -> Result<ProjectMetadata> {
        prompter.begin(FLOW_TITLE)?;

        while let Some(spec) = self.step.spec() {
            let answer = prompter
                .ask(spec.label, self.current_default())?
                .ok_or_else(|| Error::InputClosed {
                    field: spec.field.to_string(),
                })?;

            if let Err(rejection) = self.submit(&answer) {
                log::debug!("rejected {}: {}", spec.field, rejection.message);
                prompter.reject(spec.label, &rejection.message)?;
            }
        }

        Ok(self.metadata)
    }

    /// Complete the flow without prompting, taking every default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnattendedWithoutName`] if no explicit name was
    /// supplied, or [`Error::Validation`] for the first default that fails
    /// its check.
    pub fn run_unattended(mut self) -> Result<ProjectMetadata> {
        if !self.defaults.explicit_name {
            return Err(Error::UnattendedWithoutName);
        }

        while self.step != Step::Done {
            let value = self.current_default().to_string();
            self.submit(&value)?;
        }

        Ok(self.metadata)
    }
}
