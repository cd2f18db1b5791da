//! CLI command implementations.
//!
//! - `new`: Create a new Python package and its `pyproject.toml`
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod new;

pub use completions::CompletionsCommand;
pub use new::NewCommand;
