//! The in-memory description of the package being created.
//!
//! [`ProjectMetadata`] holds the elicited fields plus the descriptor-only
//! structural fields (build system, license, classifiers, ...) that are
//! carried through to the serialized `pyproject.toml`.

use std::collections::BTreeMap;

/// Default readme file name.
pub const DEFAULT_README: &str = "README.md";

/// Default version of a freshly created package.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// A package author. Either part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Contact address; empty when none was given.
    pub email: String,
}

impl Author {
    /// Creates an author from a name and (possibly empty) email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Whether neither a name nor an email was given.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

/// The `[build-system]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSystem {
    /// Import path of the build backend, e.g. `hatchling.build`.
    pub backend: String,
    /// Requirements needed to run the backend.
    pub requires: Vec<String>,
}

impl Default for BuildSystem {
    fn default() -> Self {
        Self {
            backend: "hatchling.build".to_string(),
            requires: vec!["hatchling".to_string()],
        }
    }
}

/// Metadata for the package being created.
///
/// Created empty, filled field by field by the elicitation flow, and consumed
/// once by the serializer.
///
/// # Examples
///
/// ```
/// use pypher::{Author, ProjectMetadata};
///
/// let mut meta = ProjectMetadata::new();
/// meta.name = "my-package".to_string();
/// meta.version = "0.1.0".to_string();
/// meta.authors.push(Author::new("Alex", "alex@example.com"));
/// assert!(meta.readme.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Package name (kebab-case).
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// One-line summary.
    pub description: String,
    /// Readme file name, relative to the descriptor.
    pub readme: String,
    /// Supported interpreter range, e.g. `^3.11`.
    pub requires_python: String,
    /// Ordered list of authors.
    pub authors: Vec<Author>,
    /// Build system backend and requirements.
    pub build_system: BuildSystem,
    /// License table entries (`text` or `file`).
    pub license: BTreeMap<String, String>,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Trove classifiers.
    pub classifiers: Vec<String>,
    /// Runtime dependencies.
    pub dependencies: Vec<String>,
    /// Extras name to requirement list.
    pub optional_dependencies: BTreeMap<String, Vec<String>>,
    /// Named project URLs.
    pub urls: BTreeMap<String, String>,
    /// Fields the build backend fills in dynamically.
    pub dynamic: Vec<String>,
    /// Tool name to opaque key/value settings (`[tool.<name>]`).
    pub tool: BTreeMap<String, BTreeMap<String, String>>,
}

impl ProjectMetadata {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the license as free text (`license = { text = "..." }`).
    pub fn set_license_text(&mut self, text: impl Into<String>) {
        self.license.clear();
        self.license.insert("text".to_string(), text.into());
    }

    /// Authors that carry at least a name or an email.
    pub fn listed_authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.iter().filter(|a| !a.is_blank())
    }
}
