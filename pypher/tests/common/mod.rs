//! Common test utilities for integration tests.
//!
//! This module provides a scripted prompter, a fixed environment context,
//! and helpers for reading back the written descriptor.

use std::collections::VecDeque;
use std::path::Path;

use pypher::{EnvironmentContext, GitIdentity, Prompter, ProjectPath, PythonVersion};
use toml_edit::DocumentMut;

/// A prompter that replays canned answers and records what it was shown.
///
/// Once the answers run out it reports closed input, like a terminal at EOF.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// `(label, default)` for every question asked.
    pub asked: Vec<(String, String)>,
    /// `(label, reason)` for every rejected answer.
    pub rejections: Vec<(String, String)>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    /// Creates a prompter that will give `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A prompter with no answers at all.
    pub fn closed() -> Self {
        Self::default()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, label: &str, default: &str) -> pypher::Result<Option<String>> {
        self.asked.push((label.to_string(), default.to_string()));
        Ok(self.answers.pop_front())
    }

    fn reject(&mut self, label: &str, reason: &str) -> pypher::Result<()> {
        self.rejections.push((label.to_string(), reason.to_string()));
        Ok(())
    }
}

/// An environment with a known git identity and Python 3.11.
#[allow(dead_code)]
pub fn fixed_env() -> EnvironmentContext {
    EnvironmentContext::new(
        GitIdentity::new("Alex Doe", "alex@example.com"),
        PythonVersion::new(3, 11, 4),
    )
}

/// Resolves `name` under `root`.
#[allow(dead_code)]
pub fn project_in(root: &Path, name: &str) -> ProjectPath {
    ProjectPath::resolve(root.join(name)).expect("Failed to resolve project path")
}

/// Read and parse the descriptor inside `dir`.
///
/// # Panics
/// Panics if the file is missing or is not valid TOML.
#[allow(dead_code)]
pub fn read_descriptor(dir: &Path) -> DocumentMut {
    let text = std::fs::read_to_string(dir.join("pyproject.toml"))
        .expect("Failed to read pyproject.toml");
    text.parse().expect("pyproject.toml is not valid TOML")
}
