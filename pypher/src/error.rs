//! Error types for the pypher library.
//!
//! Every fallible operation in the library returns [`Result`]; only the CLI
//! layer decides whether an error terminates the process.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pypher error.
///
/// # Examples
///
/// ```
/// use pypher::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("0.1.0".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pypher library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be made absolute or is otherwise unusable.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Directories could not be created.
    #[error("could not make directories for path {}: {source}", path.display())]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The target directory already has content and `init` was not requested.
    #[error("can't start new project on path {}, directory is not empty", path.display())]
    DirectoryNotEmpty {
        /// The non-empty directory.
        path: PathBuf,
    },

    /// A field value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Unattended mode was requested without an explicit package name.
    #[error("cannot run unattended mode without a name")]
    UnattendedWithoutName,

    /// An external program (interpreter, git) could not be run or failed.
    #[error("{program} failed: {reason}")]
    ExternalTool {
        /// The program that was invoked.
        program: String,
        /// What went wrong.
        reason: String,
    },

    /// The metadata could not be rendered into a descriptor.
    #[error("could not serialize project descriptor: {reason}")]
    Serialization {
        /// The reason rendering failed.
        reason: String,
    },

    /// Console input ended while a prompt was waiting for an answer.
    #[error("input closed while waiting for '{field}'")]
    InputClosed {
        /// The field being prompted for.
        field: String,
    },

    /// A configuration file or override could not be read, parsed or
    /// validated.
    #[error("configuration error in {origin}: {message}")]
    Configuration {
        /// Where the bad value came from (a file path or variable name).
        origin: String,
        /// What is wrong with it.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::validate::ValidationError> for Error {
    fn from(err: crate::validate::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pypher::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is a path problem (resolution, creation, or content).
    #[must_use]
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. }
                | Self::PathNotFound { .. }
                | Self::CreateDirectory { .. }
                | Self::DirectoryNotEmpty { .. }
        )
    }
}
