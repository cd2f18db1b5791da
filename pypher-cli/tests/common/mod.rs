//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated home directory with its own git identity
//! - A stand-in Python interpreter so tests never depend on the host
//! - Helpers for reading the written descriptor back

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use toml_edit::DocumentMut;

/// Variables that would leak the developer's setup into a test run.
const INHERITED_VARS: &[&str] = &[
    "PYPHER_CONFIG",
    "PYPHER_PYTHON",
    "PYPHER_BUILD_BACKEND",
    "PYPHER_BUILD_REQUIRES",
    "PYPHER_DEFAULT_VERSION",
    "PYPHER_README",
    "PYPHER_LICENSE",
    "PYPHER_LOG_MODE",
    "GIT_CONFIG_GLOBAL",
    "GIT_CONFIG_SYSTEM",
    "GIT_AUTHOR_NAME",
    "GIT_AUTHOR_EMAIL",
];

/// Git identity written into the isolated home.
#[allow(dead_code)]
pub const GIT_USER_NAME: &str = "Test User";
#[allow(dead_code)]
pub const GIT_USER_EMAIL: &str = "test@example.com";

/// Version printed by the stand-in interpreter.
#[allow(dead_code)]
pub const FAKE_PYTHON_VERSION: &str = "3.12.1";

/// Test environment with an isolated home directory.
///
/// This struct provides:
/// - A temporary directory that doubles as the working directory
/// - A home directory with a `.gitconfig` and no pypher config
/// - A fake `python3` script that reports [`FAKE_PYTHON_VERSION`]
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory seen by the binary
    pub home: PathBuf,
    /// Interpreter the binary is pointed at
    pub python: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        let python = write_fake_python(&temp_path.join("bin"));

        let env = Self {
            temp_dir,
            temp_path,
            home,
            python,
        };
        env.write_gitconfig(GIT_USER_NAME, GIT_USER_EMAIL);
        env
    }

    /// Replace the git identity in the isolated home.
    pub fn write_gitconfig(&self, name: &str, email: &str) {
        std::fs::write(
            self.home.join(".gitconfig"),
            format!("[user]\n\tname = {name}\n\temail = {email}\n"),
        )
        .expect("Failed to write .gitconfig");
    }

    /// Get a command builder with the isolated environment applied.
    ///
    /// The working directory is the temp directory and `PYPHER_PYTHON`
    /// points at the fake interpreter.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("PYPHER_PYTHON", &self.python);
        cmd
    }

    /// Get a command builder without an interpreter override.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pypher").expect("Failed to find pypher binary");
        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of a directory under the temp directory, without creating it.
    pub fn project(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user-level config at `~/.pypher/config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".pypher");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn write_fake_python(bin: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(bin).expect("Failed to create bin directory");
    let path = bin.join("python3");
    std::fs::write(
        &path,
        format!("#!/bin/sh\necho \"Python {FAKE_PYTHON_VERSION}\"\n"),
    )
    .expect("Failed to write fake interpreter");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark interpreter executable");
    path
}

#[cfg(not(unix))]
fn write_fake_python(_bin: &Path) -> PathBuf {
    PathBuf::from("python")
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

/// Whether a usable `git` is on PATH.
#[allow(dead_code)]
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}
