//! Environment variable handling for configuration overrides.
//!
//! `PYPHER_*` variables override values from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Interpreter executable override.
pub const PYTHON_ENV: &str = "PYPHER_PYTHON";
/// Build backend override.
pub const BUILD_BACKEND_ENV: &str = "PYPHER_BUILD_BACKEND";
/// Comma-separated build requirements override.
pub const BUILD_REQUIRES_ENV: &str = "PYPHER_BUILD_REQUIRES";
/// Default version override.
pub const DEFAULT_VERSION_ENV: &str = "PYPHER_DEFAULT_VERSION";
/// Default readme override.
pub const README_ENV: &str = "PYPHER_README";
/// License text override.
pub const LICENSE_ENV: &str = "PYPHER_LICENSE";

/// Every variable consulted by [`EnvironmentConfig::apply_overrides`].
pub const OVERRIDE_VARS: &[&str] = &[
    PYTHON_ENV,
    BUILD_BACKEND_ENV,
    BUILD_REQUIRES_ENV,
    DEFAULT_VERSION_ENV,
    README_ENV,
    LICENSE_ENV,
];

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pypher::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that is not valid
    /// unicode or, for `PYPHER_BUILD_REQUIRES`, holds no requirement.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(python) = Self::read(PYTHON_ENV)? {
            config.python = Some(python);
        }

        if let Some(backend) = Self::read(BUILD_BACKEND_ENV)? {
            config.build_backend = Some(backend);
        }

        if let Some(requires) = Self::read(BUILD_REQUIRES_ENV)? {
            config.build_requires = Some(Self::parse_list(BUILD_REQUIRES_ENV, &requires)?);
        }

        if let Some(version) = Self::read(DEFAULT_VERSION_ENV)? {
            config.default_version = Some(version);
        }

        if let Some(readme) = Self::read(README_ENV)? {
            config.readme = Some(readme);
        }

        if let Some(license) = Self::read(LICENSE_ENV)? {
            config.license = Some(license);
        }

        Ok(())
    }

    /// Read a variable; unset or empty yields `None`.
    fn read(name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(Error::Configuration {
                origin: name.to_string(),
                message: "value is not valid unicode".to_string(),
            }),
        }
    }

    /// Parse a comma-separated list, dropping empty items.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has no items.
    pub fn parse_list(name: &str, value: &str) -> Result<Vec<String>> {
        let items: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if items.is_empty() {
            return Err(Error::Configuration {
                origin: name.to_string(),
                message: "expected a comma-separated list of requirements".to_string(),
            });
        }
        Ok(items)
    }
}
