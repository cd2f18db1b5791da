//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn version_strategy() -> impl Strategy<Value = String> {
    (0u32..100, 0u32..100, 0u32..100).prop_map(|(a, b, c)| format!("{a}.{b}.{c}"))
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("python3(\\.[0-9]{1,2})?"),
        prop::option::of("[a-z_]{1,12}\\.[a-z_]{1,12}"),
        prop::option::of(prop::collection::vec("py[a-z0-9_]{1,12}(>=[0-9]{1,2})?", 1..4)),
        prop::option::of(version_strategy()),
        prop::option::of("[A-Z]{3,8}\\.(md|rst|txt)"),
        prop::option::of("(MIT|ISC|Apache-2\\.0|BSD-3-Clause)"),
    )
        .prop_map(
            |(python, build_backend, build_requires, default_version, readme, license)| Config {
                python,
                build_backend,
                build_requires,
                default_version,
                readme,
                license,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields keep the lower value.
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.python.clone(), high.python.clone().or(low.python.clone()));
        prop_assert_eq!(merged.build_backend.clone(), high.build_backend.clone().or(low.build_backend.clone()));
        prop_assert_eq!(merged.build_requires.clone(), high.build_requires.clone().or(low.build_requires.clone()));
        prop_assert_eq!(merged.default_version.clone(), high.default_version.clone().or(low.default_version.clone()));
        prop_assert_eq!(merged.readme.clone(), high.readme.clone().or(low.readme.clone()));
        prop_assert_eq!(merged.license.clone(), high.license.clone().or(low.license.clone()));
    }

    // Merging a config into itself changes nothing.
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Generated configs are well formed, and merging two valid configs stays valid.
    #[test]
    fn merge_preserves_validity(low in config_strategy(), high in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&low).is_ok());
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // YAML round trip keeps every field.
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
