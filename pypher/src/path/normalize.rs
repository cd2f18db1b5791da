//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding a leading tilde (`~`, `~/...`) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components lexically
//!
//! Symlinks are never followed; normalization works on the path text only,
//! so it is valid for directories that do not exist yet.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading tilde to the given home directory.
///
/// Only `~` and `~/path` are expanded. Any other use of `~` (including the
/// `~user` form) is returned unchanged and later treated as an ordinary
/// relative path.
///
/// # Errors
///
/// Returns an error if the path needs expansion but no home directory is
/// known.
///
/// # Examples
///
/// ```
/// use pypher::path::normalize::expand_tilde;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/alex");
/// assert_eq!(expand_tilde(Path::new("~"), Some(home)).unwrap(), PathBuf::from("/home/alex"));
/// assert_eq!(
///     expand_tilde(Path::new("~/code"), Some(home)).unwrap(),
///     PathBuf::from("/home/alex/code")
/// );
/// assert_eq!(
///     expand_tilde(Path::new("~other"), Some(home)).unwrap(),
///     PathBuf::from("~other")
/// );
/// ```
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    let rest = if path_str == "~" {
        ""
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        rest
    } else {
        return Ok(path.to_path_buf());
    };

    let home = home.ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// A `..` at the root stays at the root, so `/..` resolves to `/`.
///
/// # Examples
///
/// ```
/// use pypher::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a//b/")), PathBuf::from("/a/b"));
/// assert_eq!(resolve_components(Path::new("/../x")), PathBuf::from("/x"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                }
            }
        }
    }

    result
}

/// Normalize a path against an explicit home and working directory.
///
/// 1. Expands a leading tilde
/// 2. Joins relative paths onto `cwd`
/// 3. Resolves `.` and `..` components
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the result is not absolute.
///
/// # Examples
///
/// ```
/// use pypher::path::normalize::normalize_in;
/// use std::path::{Path, PathBuf};
///
/// let normalized = normalize_in(
///     Path::new("../api/./src"),
///     Some(Path::new("/home/alex")),
///     Path::new("/work/web"),
/// )
/// .unwrap();
/// assert_eq!(normalized, PathBuf::from("/work/api/src"));
/// ```
pub fn normalize_in(path: &Path, home: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path, home)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };

    let resolved = resolve_components(&absolute);
    if !resolved.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "could not resolve an absolute path".to_string(),
        });
    }

    Ok(resolved)
}

/// Normalize a path using the process home and working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or
/// normalization fails.
///
/// # Examples
///
/// ```no_run
/// use pypher::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("~/project")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("cannot get current directory: {e}"),
    })?;
    let home = home::home_dir();
    normalize_in(path, home.as_deref(), &cwd)
}
