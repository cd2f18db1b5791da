//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use pypher::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error while writing command output.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Validation or precondition failure
    /// - 2: Invalid arguments (reported by clap before any command runs)
    /// - 3: Path error
    /// - 4: External tool failure
    /// - 5: I/O or serialization failure
    /// - 6: Configuration error
    /// - 7: Input closed during a prompt
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::Validation { .. }
                | LibError::UnattendedWithoutName
                | LibError::DirectoryNotEmpty { .. } => 1,
                LibError::InvalidPath { .. }
                | LibError::PathNotFound { .. }
                | LibError::CreateDirectory { .. } => 3,
                LibError::ExternalTool { .. } => 4,
                LibError::Serialization { .. } | LibError::Io(_) => 5,
                LibError::Configuration { .. } => 6,
                LibError::InputClosed { .. } => 7,
            },
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
