//! Rendering and writing the `pyproject.toml` descriptor.
//!
//! The document has three top-level sections in a fixed order:
//!
//! 1. `[build-system]` with `requires` and `build-backend`
//! 2. `[project]` with the PEP 621 metadata; `license` and each entry of
//!    `authors` are inline tables
//! 3. `[tool]`, empty unless tool settings were registered
//!
//! Writing goes through a temporary file in the project directory that is
//! renamed over `pyproject.toml`, so a failed write never leaves a truncated
//! descriptor behind. An existing descriptor is replaced, not merged.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use toml_edit::{value, Array, DocumentMut, InlineTable, Item, Table, Value};

use crate::error::{Error, Result};
use crate::metadata::ProjectMetadata;
use crate::path::ProjectPath;

/// File name of the descriptor inside the project directory.
pub const DESCRIPTOR_FILE_NAME: &str = "pyproject.toml";

/// Render the metadata as a TOML document.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the package name is missing or a map
/// key cannot be used as a TOML key.
///
/// # Examples
///
/// ```
/// use pypher::{pyproject, ProjectMetadata};
///
/// let mut meta = ProjectMetadata::new();
/// meta.name = "demo".to_string();
/// meta.version = "0.1.0".to_string();
///
/// let doc = pyproject::render_document(&meta).unwrap();
/// assert_eq!(doc["project"]["name"].as_str(), Some("demo"));
/// assert!(doc.contains_key("tool"));
/// ```
pub fn render_document(meta: &ProjectMetadata) -> Result<DocumentMut> {
    if meta.name.is_empty() {
        return Err(Error::Serialization {
            reason: "project name is required".to_string(),
        });
    }

    let mut doc = DocumentMut::new();
    doc.insert("build-system", Item::Table(build_system_table(meta)));
    doc.insert("project", Item::Table(project_table(meta)?));
    doc.insert("tool", Item::Table(tool_table(meta)?));
    Ok(doc)
}

/// Render the metadata to the bytes of a `pyproject.toml` file.
///
/// # Errors
///
/// See [`render_document`].
pub fn render(meta: &ProjectMetadata) -> Result<Vec<u8>> {
    Ok(render_document(meta)?.to_string().into_bytes())
}

/// Write the descriptor into the project directory, replacing any existing
/// file, and return its path.
///
/// The directory must already exist.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if rendering fails and [`Error::Io`] if
/// the file cannot be written.
pub fn write(meta: &ProjectMetadata, project: &ProjectPath) -> Result<PathBuf> {
    let bytes = render(meta)?;
    let destination = project.descriptor_path();

    let mut tmp = NamedTempFile::new_in(project.path())?;
    // Temporary files are created owner-only; the descriptor is a regular
    // source file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&destination).map_err(|e| Error::Io(e.error))?;

    log::debug!(
        "wrote {} bytes to {}",
        bytes.len(),
        destination.display()
    );
    Ok(destination)
}

fn build_system_table(meta: &ProjectMetadata) -> Table {
    let mut table = Table::new();
    table.insert("requires", value(string_array(&meta.build_system.requires)));
    table.insert("build-backend", value(meta.build_system.backend.as_str()));
    table
}

fn project_table(meta: &ProjectMetadata) -> Result<Table> {
    let mut table = Table::new();
    table.insert("name", value(meta.name.as_str()));
    table.insert("version", value(meta.version.as_str()));
    table.insert("description", value(meta.description.as_str()));
    table.insert("readme", value(meta.readme.as_str()));

    if !meta.requires_python.is_empty() {
        table.insert("requires-python", value(meta.requires_python.as_str()));
    }

    if !meta.license.is_empty() {
        let mut license = InlineTable::new();
        for (key, text) in &meta.license {
            check_key("project.license", key)?;
            license.insert(key.as_str(), Value::from(text.as_str()));
        }
        table.insert("license", value(license));
    }

    insert_list(&mut table, "keywords", &meta.keywords);

    let authors: Array = meta
        .listed_authors()
        .map(|author| {
            let mut entry = InlineTable::new();
            if !author.name.is_empty() {
                entry.insert("name", Value::from(author.name.as_str()));
            }
            if !author.email.is_empty() {
                entry.insert("email", Value::from(author.email.as_str()));
            }
            Value::InlineTable(entry)
        })
        .collect();
    if !authors.is_empty() {
        table.insert("authors", value(authors));
    }

    insert_list(&mut table, "classifiers", &meta.classifiers);
    insert_list(&mut table, "dependencies", &meta.dependencies);

    if !meta.optional_dependencies.is_empty() {
        let mut extras = Table::new();
        for (extra, requirements) in &meta.optional_dependencies {
            check_key("project.optional-dependencies", extra)?;
            extras.insert(extra, value(string_array(requirements)));
        }
        table.insert("optional-dependencies", Item::Table(extras));
    }

    insert_list(&mut table, "dynamic", &meta.dynamic);

    if !meta.urls.is_empty() {
        table.insert("urls", Item::Table(string_table("project.urls", &meta.urls)?));
    }

    Ok(table)
}

fn tool_table(meta: &ProjectMetadata) -> Result<Table> {
    let mut table = Table::new();
    for (tool, settings) in &meta.tool {
        check_key("tool", tool)?;
        table.insert(tool, Item::Table(string_table(tool, settings)?));
    }
    Ok(table)
}

fn insert_list(table: &mut Table, key: &str, items: &[String]) {
    if !items.is_empty() {
        table.insert(key, value(string_array(items)));
    }
}

fn string_array(items: &[String]) -> Array {
    items.iter().map(String::as_str).collect()
}

fn string_table(section: &str, entries: &BTreeMap<String, String>) -> Result<Table> {
    let mut table = Table::new();
    for (key, text) in entries {
        check_key(section, key)?;
        table.insert(key, value(text.as_str()));
    }
    Ok(table)
}

fn check_key(section: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::Serialization {
            reason: format!("empty key in [{section}]"),
        });
    }
    if key.chars().any(char::is_control) {
        return Err(Error::Serialization {
            reason: format!("invalid character in key {key:?} in [{section}]"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Author;
    use tempfile::tempdir;

    fn sample() -> ProjectMetadata {
        let mut meta = ProjectMetadata::new();
        meta.name = "my-package".to_string();
        meta.version = "1.2.3-alpha.1".to_string();
        meta.description = "Does \"things\"".to_string();
        meta.readme = "README.md".to_string();
        meta.requires_python = "^3.11".to_string();
        meta.authors.push(Author::new("Alex Doe", "alex@example.com"));
        meta.authors.push(Author::new("Sam", ""));
        meta.set_license_text("MIT");
        meta.keywords = vec!["cli".to_string(), "scaffold".to_string()];
        meta.dependencies = vec!["requests>=2".to_string()];
        meta.optional_dependencies
            .insert("test".to_string(), vec!["pytest".to_string()]);
        meta.urls
            .insert("Homepage".to_string(), "https://example.com".to_string());
        meta.dynamic = vec!["entry-points".to_string()];
        meta
    }

    fn strings(item: Option<&Item>) -> Vec<String> {
        item.and_then(Item::as_array)
            .map(|a| a.iter().filter_map(Value::as_str).map(String::from).collect())
            .unwrap_or_default()
    }

    fn text(item: Option<&Item>) -> String {
        item.and_then(Item::as_str).unwrap_or_default().to_string()
    }

    fn parse_back(source: &str) -> ProjectMetadata {
        let doc: DocumentMut = source.parse().unwrap();
        let build = doc.get("build-system").unwrap();
        let project = doc.get("project").unwrap();
        let mut meta = ProjectMetadata::new();

        meta.build_system.backend = text(build.get("build-backend"));
        meta.build_system.requires = strings(build.get("requires"));
        meta.name = text(project.get("name"));
        meta.version = text(project.get("version"));
        meta.description = text(project.get("description"));
        meta.readme = text(project.get("readme"));
        meta.requires_python = text(project.get("requires-python"));
        if let Some(license) = project.get("license").and_then(Item::as_inline_table) {
            for (k, v) in license {
                meta.license
                    .insert(k.to_string(), v.as_str().unwrap().to_string());
            }
        }
        meta.keywords = strings(project.get("keywords"));
        if let Some(authors) = project.get("authors").and_then(Item::as_array) {
            for entry in authors {
                let entry = entry.as_inline_table().unwrap();
                let field = |k: &str| {
                    entry
                        .get(k)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };
                meta.authors.push(Author::new(field("name"), field("email")));
            }
        }
        meta.classifiers = strings(project.get("classifiers"));
        meta.dependencies = strings(project.get("dependencies"));
        if let Some(extras) = project.get("optional-dependencies").and_then(Item::as_table) {
            for (k, v) in extras {
                meta.optional_dependencies.insert(k.to_string(), strings(Some(v)));
            }
        }
        meta.dynamic = strings(project.get("dynamic"));
        if let Some(urls) = project.get("urls").and_then(Item::as_table) {
            for (k, v) in urls {
                meta.urls.insert(k.to_string(), text(Some(v)));
            }
        }
        if let Some(tool) = doc.get("tool").and_then(Item::as_table) {
            for (name, settings) in tool {
                let bag = settings
                    .as_table()
                    .unwrap()
                    .iter()
                    .map(|(k, v)| (k.to_string(), text(Some(v))))
                    .collect();
                meta.tool.insert(name.to_string(), bag);
            }
        }
        meta
    }

    #[test]
    fn test_section_order() {
        let text = String::from_utf8(render(&sample()).unwrap()).unwrap();
        let build = text.find("[build-system]").unwrap();
        let project = text.find("[project]").unwrap();
        let tool = text.find("[tool]").unwrap();
        assert!(build < project && project < tool, "{text}");
    }

    #[test]
    fn test_license_and_authors_are_inline() {
        let text = String::from_utf8(render(&sample()).unwrap()).unwrap();
        assert!(text.contains("license = { text = \"MIT\" }"), "{text}");
        assert!(
            text.contains(r#"authors = [{ name = "Alex Doe", email = "alex@example.com" }, { name = "Sam" }]"#),
            "{text}"
        );
        assert!(!text.contains("[[project.authors]]"));
    }

    #[test]
    fn test_round_trip() {
        let meta = sample();
        let text = String::from_utf8(render(&meta).unwrap()).unwrap();
        assert_eq!(parse_back(&text), meta);
    }

    #[test]
    fn test_round_trip_minimal_uses_defaults() {
        let mut meta = ProjectMetadata::new();
        meta.name = "pkg".to_string();
        meta.version = "0.1.0".to_string();
        let text = String::from_utf8(render(&meta).unwrap()).unwrap();

        assert!(!text.contains("requires-python"));
        assert!(!text.contains("authors"));
        assert!(!text.contains("license"));
        assert!(text.contains("[tool]"));
        assert_eq!(parse_back(&text), meta);
    }

    #[test]
    fn test_tool_bags_become_subtables() {
        let mut meta = sample();
        let mut bag = BTreeMap::new();
        bag.insert("layout".to_string(), "src".to_string());
        meta.tool.insert("pypher".to_string(), bag);

        let text = String::from_utf8(render(&meta).unwrap()).unwrap();
        assert!(text.contains("[tool.pypher]"), "{text}");
        assert!(text.contains("layout = \"src\""));
        assert_eq!(parse_back(&text), meta);
    }

    #[test]
    fn test_blank_author_is_dropped() {
        let mut meta = sample();
        meta.authors = vec![Author::default()];
        let text = String::from_utf8(render(&meta).unwrap()).unwrap();
        assert!(!text.contains("authors"));
    }

    #[test]
    fn test_missing_name_fails() {
        let err = render(&ProjectMetadata::new()).unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test]
    fn test_invalid_key_fails() {
        let mut meta = sample();
        meta.urls.insert("Bad\nKey".to_string(), "x".to_string());
        let err = render(&meta).unwrap_err();
        assert!(err.to_string().contains("invalid character"));

        let mut meta = sample();
        meta.urls.insert(String::new(), "x".to_string());
        assert!(render(&meta).is_err());
    }

    #[test]
    fn test_write_creates_descriptor() {
        let tmp = tempdir().unwrap();
        let project = ProjectPath::resolve(tmp.path()).unwrap();
        let written = write(&sample(), &project).unwrap();

        assert_eq!(written, tmp.path().join(DESCRIPTOR_FILE_NAME));
        let text = std::fs::read_to_string(&written).unwrap();
        assert_eq!(parse_back(&text), sample());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let tmp = tempdir().unwrap();
        let destination = tmp.path().join(DESCRIPTOR_FILE_NAME);
        std::fs::write(&destination, "[project]\nname = \"old\"\nextra = true\n").unwrap();

        let project = ProjectPath::resolve(tmp.path()).unwrap();
        write(&sample(), &project).unwrap();

        let text = std::fs::read_to_string(&destination).unwrap();
        assert!(!text.contains("old"));
        assert!(!text.contains("extra"));

        // Only the descriptor remains; the temporary file was renamed.
        let entries = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_write_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let project = ProjectPath::resolve(tmp.path()).unwrap();
        let written = write(&sample(), &project).unwrap();
        let mode = std::fs::metadata(written).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let tmp = tempdir().unwrap();
        let project = ProjectPath::resolve(tmp.path().join("missing")).unwrap();
        assert!(matches!(write(&sample(), &project), Err(Error::Io(_))));
    }
}
