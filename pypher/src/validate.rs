//! Validation predicates for package metadata.
//!
//! The `is_*` predicates are pure string checks. The `check_*` functions wrap
//! them with the human-readable reasons shown when a prompt rejects an
//! answer.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

const KEBAB_PATTERN: &str = r"^[a-z0-9-]*$";

const SEMVER_PATTERN: &str = r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.]+@[a-z0-9]+\.[a-z]+$";

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

fn kebab_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    compiled(&CELL, KEBAB_PATTERN)
}

fn semver_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    compiled(&CELL, SEMVER_PATTERN)
}

fn email_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    compiled(&CELL, EMAIL_PATTERN)
}

/// A rejected field value and the reason for the rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Whether `s` is non-empty lower kebab-case without a leading or trailing
/// hyphen.
///
/// # Examples
///
/// ```
/// use pypher::validate::is_kebab_case;
///
/// assert!(is_kebab_case("my-package"));
/// assert!(is_kebab_case("pkg2"));
/// assert!(!is_kebab_case("-pkg"));
/// assert!(!is_kebab_case("MyPkg"));
/// ```
#[must_use]
pub fn is_kebab_case(s: &str) -> bool {
    !s.is_empty() && kebab_regex().is_match(s) && !s.starts_with('-') && !s.ends_with('-')
}

/// Whether `s` follows the Semantic Versioning 2.0 grammar.
///
/// # Examples
///
/// ```
/// use pypher::validate::is_semver;
///
/// assert!(is_semver("1.2.3-alpha.1+build5"));
/// assert!(!is_semver("1.02.3"));
/// assert!(!is_semver("v1.2.3"));
/// ```
#[must_use]
pub fn is_semver(s: &str) -> bool {
    semver_regex().is_match(s)
}

/// Whether `s` looks like `local@domain.tld`.
///
/// The grammar is deliberately narrow: the local part is letters, digits,
/// `_` and `.`; the domain is lowercase letters and digits; the top-level
/// domain is lowercase letters. The empty string is rejected here; callers
/// that treat "no email" as valid check for it first.
///
/// # Examples
///
/// ```
/// use pypher::validate::is_email;
///
/// assert!(is_email("a.b@example.com"));
/// assert!(!is_email("a@b"));
/// assert!(!is_email(""));
/// ```
#[must_use]
pub fn is_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// Check a package name, reporting why it is rejected.
///
/// # Errors
///
/// Returns a [`ValidationError`] for the `name` field.
pub fn check_package_name(name: &str) -> Result<(), ValidationError> {
    let reason = if name.is_empty() {
        "package name cannot be empty"
    } else if !kebab_regex().is_match(name) {
        "package name must be kebab-case"
    } else if name.ends_with('-') {
        "package name cannot end with a hyphen"
    } else if name.starts_with('-') {
        "package name cannot start with a hyphen"
    } else {
        return Ok(());
    };
    Err(ValidationError::new("name", reason))
}

/// Check a version string.
///
/// # Errors
///
/// Returns a [`ValidationError`] for the `version` field.
pub fn check_version(version: &str) -> Result<(), ValidationError> {
    if version.is_empty() {
        Err(ValidationError::new("version", "version cannot be empty"))
    } else if !is_semver(version) {
        Err(ValidationError::new(
            "version",
            "version must comply with semantic versioning specification",
        ))
    } else {
        Ok(())
    }
}

/// Check an optional email address. An empty value means "no email".
///
/// # Errors
///
/// Returns a [`ValidationError`] for the `email` field.
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || is_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email", "not valid email address"))
    }
}

/// Check that a value fits within `limit` characters.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming `field` when the value is too long.
pub fn check_length(field: &str, value: &str, limit: usize) -> Result<(), ValidationError> {
    if value.chars().count() > limit {
        Err(ValidationError::new(
            field,
            format!("must be at most {limit} characters"),
        ))
    } else {
        Ok(())
    }
}

/// Convert a directory or free-form name to kebab-case.
///
/// Words are split on whitespace, `_`, `-` and `.`, and on case changes
/// (`myProject`, `HTTPServer`). Characters other than ASCII letters and
/// digits are dropped.
///
/// # Examples
///
/// ```
/// use pypher::validate::to_kebab_case;
///
/// assert_eq!(to_kebab_case("MyProject"), "my-project");
/// assert_eq!(to_kebab_case("my_project"), "my-project");
/// assert_eq!(to_kebab_case("HTTPServer v2"), "http-server-v2");
/// ```
#[must_use]
pub fn to_kebab_case(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            let starts_word = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if starts_word {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c.to_ascii_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}
