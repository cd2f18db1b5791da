//! Snapshot of the local environment used for prompt defaults.
//!
//! The snapshot is taken once, at process start, and passed by reference to
//! the elicitation flow. Tests build an [`EnvironmentContext`] directly.

use std::fmt;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// The user's git identity, used to pre-fill the author prompts.
///
/// Missing git, or missing `user.name`/`user.email` settings, yield empty
/// strings rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    /// Value of `git config user.name`.
    pub user_name: String,
    /// Value of `git config user.email`.
    pub user_email: String,
}

impl GitIdentity {
    /// Creates an identity from explicit values.
    pub fn new(user_name: impl Into<String>, user_email: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            user_email: user_email.into(),
        }
    }

    /// Reads the identity from the local git configuration.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            user_name: git_config_value("user.name"),
            user_email: git_config_value("user.email"),
        }
    }
}

fn git_config_value(key: &str) -> String {
    let Ok(git) = which::which("git") else {
        log::debug!("git not found on PATH; leaving {key} empty");
        return String::new();
    };

    match Command::new(git)
        .args(["config", "--get", key])
        .stdin(Stdio::null())
        .output()
    {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(_) => String::new(),
        Err(e) => {
            log::debug!("could not run git config --get {key}: {e}");
            String::new()
        }
    }
}

/// Version of the local Python interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl PythonVersion {
    /// Creates a version from its parts.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses the output of `python -V`, e.g. `Python 3.11.4`.
    ///
    /// A missing patch number is read as 0 and pre-release suffixes such as
    /// `3.13.0rc1` are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pypher::PythonVersion;
    ///
    /// assert_eq!(
    ///     PythonVersion::parse_version_output("Python 3.11.4\n"),
    ///     Some(PythonVersion::new(3, 11, 4))
    /// );
    /// assert_eq!(PythonVersion::parse_version_output("nothing here"), None);
    /// ```
    #[must_use]
    pub fn parse_version_output(output: &str) -> Option<Self> {
        let mut words = output.split_whitespace();
        let version = loop {
            let word = words.next()?;
            if word.eq_ignore_ascii_case("python") {
                break words.next()?;
            }
        };

        let mut parts = version.split('.').map(leading_number);
        let major = parts.next()??;
        let minor = parts.next()??;
        let patch = parts.next().flatten().unwrap_or(0);
        Some(Self::new(major, minor, patch))
    }

    /// Runs `<executable> -V` and parses the reported version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExternalTool`] if the interpreter is not on `PATH`,
    /// exits unsuccessfully, or prints something unrecognizable.
    pub fn detect(executable: &str) -> Result<Self> {
        let tool_error = |reason: String| Error::ExternalTool {
            program: executable.to_string(),
            reason,
        };

        let resolved = which::which(executable)
            .map_err(|e| tool_error(format!("interpreter not found: {e}")))?;
        log::debug!("querying interpreter version from {}", resolved.display());

        let output = Command::new(&resolved)
            .arg("-V")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| tool_error(format!("could not run interpreter: {e}")))?;

        if !output.status.success() {
            return Err(tool_error(format!(
                "interpreter exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        // Python 2 and early Python 3 print the version on stderr.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        Self::parse_version_output(&stdout)
            .or_else(|| Self::parse_version_output(&stderr))
            .ok_or_else(|| {
                tool_error(format!(
                    "unrecognized version output: {:?}",
                    format!("{}{}", stdout.trim(), stderr.trim())
                ))
            })
    }

    /// The caret constraint for this interpreter's minor series, e.g. `^3.11`.
    #[must_use]
    pub fn caret_constraint(&self) -> String {
        format!("^{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn leading_number(part: &str) -> Option<u32> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

/// Process-wide environment snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentContext {
    /// Git identity for author defaults.
    pub git: GitIdentity,
    /// Local interpreter version for the `requires-python` default.
    pub python: PythonVersion,
}

impl EnvironmentContext {
    /// Creates a context from explicit values.
    #[must_use]
    pub fn new(git: GitIdentity, python: PythonVersion) -> Self {
        Self { git, python }
    }

    /// Captures the environment, querying `python_executable` for its version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExternalTool`] if the interpreter query fails. Git
    /// problems are never errors.
    pub fn detect(python_executable: &str) -> Result<Self> {
        let python = PythonVersion::detect(python_executable)?;
        let git = GitIdentity::detect();
        log::debug!(
            "environment: python {python}, git user {:?} <{}>",
            git.user_name,
            git.user_email
        );
        Ok(Self { git, python })
    }
}
