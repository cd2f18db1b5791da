//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::validate::is_semver;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use pypher::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { default_version: Some("1.0".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref python) = config.python {
            Self::validate_non_empty("python", python)?;
        }

        if let Some(ref backend) = config.build_backend {
            Self::validate_non_empty("build_backend", backend)?;
        }

        if let Some(ref requires) = config.build_requires {
            if requires.is_empty() {
                return Err(invalid("build_requires", "must list at least one requirement"));
            }
            for requirement in requires {
                Self::validate_non_empty("build_requires", requirement)?;
            }
        }

        if let Some(ref version) = config.default_version {
            if !is_semver(version) {
                return Err(invalid(
                    "default_version",
                    format!("'{version}' is not a semantic version"),
                ));
            }
        }

        if let Some(ref readme) = config.readme {
            Self::validate_non_empty("readme", readme)?;
        }

        if let Some(ref license) = config.license {
            Self::validate_non_empty("license", license)?;
        }

        Ok(())
    }

    fn validate_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(invalid(field, "cannot be empty"));
        }
        if value.chars().any(char::is_control) {
            return Err(invalid(field, "cannot contain control characters"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> Error {
    Error::Configuration {
        origin: field.to_string(),
        message: message.into(),
    }
}
