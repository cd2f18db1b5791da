//! The resolved location of the project being created.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;
use crate::pyproject::DESCRIPTOR_FILE_NAME;

/// A canonical, absolute project directory with its derived name and parent.
///
/// `name` and `parent` are always derived from `path`; there is no way to set
/// them independently. Resolving `/` yields `/` for all three.
///
/// # Examples
///
/// ```
/// use pypher::ProjectPath;
/// use std::path::Path;
///
/// let project = ProjectPath::resolve_in(
///     "~/code/./my_app/",
///     Some(Path::new("/home/alex")),
///     Path::new("/tmp"),
/// )
/// .unwrap();
/// assert_eq!(project.path(), Path::new("/home/alex/code/my_app"));
/// assert_eq!(project.name(), "my_app");
/// assert_eq!(project.parent(), Path::new("/home/alex/code"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath {
    path: PathBuf,
    name: String,
    parent: PathBuf,
}

impl ProjectPath {
    /// Resolve a raw directory argument using the process home and working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path cannot be made absolute.
    pub fn resolve(raw: impl AsRef<Path>) -> Result<Self> {
        let normalized = normalize::normalize(raw.as_ref())?;
        Ok(Self::from_normalized(normalized))
    }

    /// Resolve a raw directory argument against an explicit home and working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path cannot be made absolute.
    pub fn resolve_in(raw: impl AsRef<Path>, home: Option<&Path>, cwd: &Path) -> Result<Self> {
        let normalized = normalize::normalize_in(raw.as_ref(), home, cwd)?;
        Ok(Self::from_normalized(normalized))
    }

    fn from_normalized(path: PathBuf) -> Self {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let parent = path.parent().unwrap_or(&path).to_path_buf();
        Self { path, name, parent }
    }

    /// The absolute, cleaned project directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The last component of the project directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory containing the project directory.
    #[must_use]
    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// Location of the descriptor file inside the project directory.
    #[must_use]
    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(DESCRIPTOR_FILE_NAME)
    }

    /// Whether something exists at the project path.
    ///
    /// Only a "not found" answer from the filesystem yields `false`; other
    /// stat failures (such as permission errors) count as existing.
    #[must_use]
    pub fn exists(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(_) => true,
            Err(e) => e.kind() != io::ErrorKind::NotFound,
        }
    }

    /// Whether the project directory has no entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if the directory does not exist and
    /// [`Error::InvalidPath`] if it cannot be listed.
    pub fn is_empty(&self) -> Result<bool> {
        if !self.exists() {
            return Err(Error::PathNotFound {
                path: self.path.clone(),
            });
        }

        let mut entries = fs::read_dir(&self.path).map_err(|e| Error::InvalidPath {
            path: self.path.clone(),
            reason: format!("can't check if directory is empty: {e}"),
        })?;
        Ok(entries.next().is_none())
    }

    /// Create the project directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] if creation fails.
    pub fn mkdir_all(&self) -> Result<()> {
        fs::create_dir_all(&self.path).map_err(|source| Error::CreateDirectory {
            path: self.path.clone(),
            source,
        })
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
