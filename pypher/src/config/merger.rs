//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pypher::config::{Config, ConfigMerger};
///
/// let low = Config { readme: Some("README.rst".to_string()), ..Default::default() };
/// let high = Config { readme: Some("README.md".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.readme.as_deref(), Some("README.md"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources ordered from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Every field set in `source` replaces
    /// the target's value; lists are replaced, not concatenated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.python.is_some() {
            target.python.clone_from(&source.python);
        }
        if source.build_backend.is_some() {
            target.build_backend.clone_from(&source.build_backend);
        }
        if source.build_requires.is_some() {
            target.build_requires.clone_from(&source.build_requires);
        }
        if source.default_version.is_some() {
            target.default_version.clone_from(&source.default_version);
        }
        if source.readme.is_some() {
            target.readme.clone_from(&source.readme);
        }
        if source.license.is_some() {
            target.license.clone_from(&source.license);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_merge_unset_keeps_target() {
        let mut target = Config {
            python: Some("python3.11".to_string()),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.python.as_deref(), Some("python3.11"));
    }

    #[test]
    fn test_merge_replaces_lists() {
        let mut target = Config {
            build_requires: Some(vec!["hatchling".to_string(), "hatch-vcs".to_string()]),
            ..Default::default()
        };
        let source = Config {
            build_requires: Some(vec!["flit_core".to_string()]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.build_requires, Some(vec!["flit_core".to_string()]));
    }

    #[test]
    fn test_merge_sources_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("low.yaml"),
                config: Config {
                    license: Some("MIT".to_string()),
                    readme: Some("README.rst".to_string()),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("high.yaml"),
                config: Config {
                    license: Some("BSD-3-Clause".to_string()),
                    ..Default::default()
                },
            },
        ];
        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.license.as_deref(), Some("BSD-3-Clause"));
        assert_eq!(merged.readme.as_deref(), Some("README.rst"));
    }
}
