//! Configuration file discovery and loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "PYPHER_CONFIG";

/// Directory under the home directory holding the user configuration.
pub const CONFIG_DIR_NAME: &str = ".pypher";

/// File name of the user configuration.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pypher::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config().unwrap() {
///     println!("using {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file, if there is one.
    ///
    /// The file is `$PYPHER_CONFIG` when set, otherwise
    /// `~/.pypher/config.yaml`. A missing default file is not an error; a
    /// missing file named by `$PYPHER_CONFIG` is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// `$PYPHER_CONFIG` points at nothing.
    pub fn load_user_config() -> Result<Option<ConfigSource>> {
        if let Some(explicit) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
            let path = PathBuf::from(explicit);
            let config = Self::load_file(&path)?;
            return Ok(Some(ConfigSource { path, config }));
        }

        let Some(path) = Self::user_config_path() else {
            log::debug!("no home directory; skipping user configuration");
            return Ok(None);
        };
        Self::load_optional(&path)
    }

    /// Load `path` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<ConfigSource>> {
        if !path.exists() {
            return Ok(None);
        }
        let config = Self::load_file(path)?;
        Ok(Some(ConfigSource {
            path: path.to_path_buf(),
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Configuration {
            origin: path.display().to_string(),
            message: format!("failed to read configuration file: {e}"),
        })?;

        log::debug!("loading configuration from {}", path.display());
        serde_yaml::from_str(&contents).map_err(|e| Error::Configuration {
            origin: path.display().to_string(),
            message: format!("invalid YAML: {e}"),
        })
    }

    /// Default location of the user configuration, `~/.pypher/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
