//! Path handling for the project directory.
//!
//! A raw directory argument (as typed on the command line) is turned into a
//! [`ProjectPath`]: absolute, free of `.`/`..` segments and trailing
//! separators, with a leading `~` expanded to the home directory.
//!
//! # Normalization
//!
//! Normalization is purely lexical:
//! - `~` and `~/path` expand to the home directory; `~user` is left as is
//! - Relative paths are joined onto the working directory
//! - `.` is dropped and `..` removes the previous component
//!
//! Symlinks are not followed, so a directory that does not exist yet can be
//! resolved before it is created.
//!
//! # Examples
//!
//! ```
//! use pypher::path::ProjectPath;
//! use std::path::Path;
//!
//! let project = ProjectPath::resolve_in(
//!     "../api",
//!     Some(Path::new("/home/alex")),
//!     Path::new("/work/web"),
//! )
//! .unwrap();
//! assert_eq!(project.path(), Path::new("/work/api"));
//! assert_eq!(project.name(), "api");
//! ```

pub mod normalize;
mod project_path;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use project_path::ProjectPath;
