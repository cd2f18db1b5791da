//! Property-based tests for project path resolution.
//!
//! The normalize module already covers normalization itself; these focus on
//! the invariants of the derived `name` and `parent`.

use super::ProjectPath;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just("~".to_string()),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(path_component_strategy(), 0..8),
    )
        .prop_map(|(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        })
}

fn resolve(raw: &str) -> ProjectPath {
    ProjectPath::resolve_in(raw, Some(Path::new("/home/alex")), Path::new("/work/dir")).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Resolution always yields an absolute path
    #[test]
    fn resolved_path_is_absolute(raw in raw_path_strategy()) {
        prop_assert!(resolve(&raw).path().is_absolute());
    }

    // resolve(resolve(p).path) == resolve(p)
    #[test]
    fn resolution_is_idempotent(raw in raw_path_strategy()) {
        let once = resolve(&raw);
        let again = resolve(once.path().to_str().unwrap());
        prop_assert_eq!(once, again);
    }

    // name and parent are always derived from path
    #[test]
    fn name_and_parent_are_derived(raw in raw_path_strategy()) {
        let project = resolve(&raw);
        if project.path() == Path::new("/") {
            prop_assert_eq!(project.name(), "/");
            prop_assert_eq!(project.parent(), Path::new("/"));
        } else {
            let rebuilt: PathBuf = project.parent().join(project.name());
            prop_assert_eq!(rebuilt.as_path(), project.path());
        }
    }

    // No trailing separator survives resolution
    #[test]
    fn no_trailing_separator(raw in raw_path_strategy()) {
        let project = resolve(&raw);
        let text = project.path().to_string_lossy().into_owned();
        prop_assert!(text == "/" || !text.ends_with('/'));
    }
}
