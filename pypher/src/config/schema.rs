//! Configuration schema definitions.
//!
//! Every field is optional so that configuration sources can be layered; the
//! accessor methods on [`Config`] supply the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::metadata::{BuildSystem, DEFAULT_README, DEFAULT_VERSION};

/// Interpreter executable queried when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pypher::config::Config;
///
/// let config: Config = serde_yaml::from_str("default_version: 1.0.0\n").unwrap();
/// assert_eq!(config.default_version(), "1.0.0");
/// assert_eq!(config.python(), "python3");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Interpreter executable used to detect the `requires-python` default.
    pub python: Option<String>,

    /// Import path of the build backend.
    pub build_backend: Option<String>,

    /// Requirements of the build backend.
    pub build_requires: Option<Vec<String>>,

    /// Version offered at the version prompt.
    pub default_version: Option<String>,

    /// Readme file name offered at the readme prompt.
    pub readme: Option<String>,

    /// License text written as `license = { text = "..." }`.
    pub license: Option<String>,
}

impl Config {
    /// The interpreter executable, `python3` unless configured.
    #[must_use]
    pub fn python(&self) -> &str {
        self.python.as_deref().unwrap_or(DEFAULT_PYTHON)
    }

    /// The default package version, `0.1.0` unless configured.
    #[must_use]
    pub fn default_version(&self) -> &str {
        self.default_version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// The default readme file name, `README.md` unless configured.
    #[must_use]
    pub fn readme(&self) -> &str {
        self.readme.as_deref().unwrap_or(DEFAULT_README)
    }

    /// The configured license text, if any.
    #[must_use]
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// The `[build-system]` table, falling back to hatchling per field.
    #[must_use]
    pub fn build_system(&self) -> BuildSystem {
        let defaults = BuildSystem::default();
        BuildSystem {
            backend: self.build_backend.clone().unwrap_or(defaults.backend),
            requires: self.build_requires.clone().unwrap_or(defaults.requires),
        }
    }
}
