#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pypher
//!
//! A library for scaffolding Python projects.
//!
//! The pipeline resolves a target directory, elicits package metadata through
//! a validated question/answer flow, and writes a PEP 621 `pyproject.toml`.
//!
//! ## Core Types
//!
//! - [`ProjectPath`]: the resolved target directory with its name and parent
//! - [`ProjectMetadata`], [`Author`] and [`BuildSystem`]: the package record
//! - [`EnvironmentContext`]: git identity and interpreter version
//! - [`elicit::ElicitationFlow`]: the prompt state machine
//! - [`pyproject`]: rendering and atomic writing of the descriptor
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pypher::{Author, ProjectMetadata};
//!
//! let mut meta = ProjectMetadata::new();
//! meta.name = "my-package".to_string();
//! meta.version = "0.1.0".to_string();
//! meta.authors.push(Author::new("Alex Doe", "alex@example.com"));
//!
//! let toml = String::from_utf8(pypher::pyproject::render(&meta).unwrap()).unwrap();
//! assert!(toml.starts_with("[build-system]"));
//! assert!(toml.contains("name = \"my-package\""));
//! ```

pub mod config;
pub mod elicit;
pub mod environment;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod operations;
pub mod path;
pub mod pyproject;
pub mod validate;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use elicit::{ElicitationFlow, LinePrompter, MetadataOverrides, Prompter};
pub use environment::{EnvironmentContext, GitIdentity, PythonVersion};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use metadata::{Author, BuildSystem, ProjectMetadata};
pub use operations::{new_project, NewProjectOptions, NewProjectResult};
pub use path::ProjectPath;
pub use validate::ValidationError;
