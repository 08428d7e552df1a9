//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

// Keys are short enough that they never collide with `inherits`.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,3}"
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z0-9./]{0,12}".prop_map(Value::String),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Sequence),
            prop::collection::vec((key_strategy(), inner), 0..4).prop_map(|entries| {
                Value::Mapping(to_mapping(entries))
            }),
        ]
    })
}

fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..6).prop_map(to_mapping)
}

fn to_mapping(entries: Vec<(String, Value)>) -> Mapping {
    entries
        .into_iter()
        .map(|(k, v)| (Value::String(k), v))
        .collect()
}

/// Checks every key of `merged` against `base` and `overrides`.
fn assert_right_biased(base: &Mapping, overrides: &Mapping, merged: &Mapping) {
    for (key, base_value) in base {
        if !overrides.contains_key(key) {
            assert_eq!(merged.get(key), Some(base_value), "base key {key:?} changed");
        }
    }

    for (key, value) in overrides {
        match (base.get(key), value) {
            (Some(Value::Mapping(b)), Value::Mapping(o)) => {
                let Some(Value::Mapping(m)) = merged.get(key) else {
                    panic!("nested mapping {key:?} was not preserved");
                };
                assert_right_biased(b, o, m);
            }
            _ => assert_eq!(merged.get(key), Some(value), "override key {key:?} lost"),
        }
    }

    for key in merged.keys() {
        assert!(
            base.contains_key(key) || overrides.contains_key(key),
            "unexpected key {key:?}"
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Untouched base keys survive, override keys win
    #[test]
    fn merge_is_right_biased(base in mapping_strategy(), overrides in mapping_strategy()) {
        let merged = ConfigMerger::merge(&base, &overrides).unwrap();
        assert_right_biased(&base, &overrides, &merged);
    }

    // Merging a document onto itself changes nothing
    #[test]
    fn merge_is_idempotent(config in mapping_strategy()) {
        let merged = ConfigMerger::merge(&config, &config).unwrap();
        prop_assert_eq!(merged, config);
    }

    // Merging an empty layer is the identity
    #[test]
    fn merge_with_empty_is_identity(config in mapping_strategy()) {
        let merged = ConfigMerger::merge(&config, &Mapping::new()).unwrap();
        prop_assert_eq!(merged, config);
    }

    // Applying the same layer twice equals applying it once
    #[test]
    fn reapplying_overrides_is_stable(base in mapping_strategy(), overrides in mapping_strategy()) {
        let once = ConfigMerger::merge(&base, &overrides).unwrap();
        let twice = ConfigMerger::merge(&once, &overrides).unwrap();
        prop_assert_eq!(twice, once);
    }

    // Inputs are never modified
    #[test]
    fn merge_does_not_mutate_inputs(base in mapping_strategy(), overrides in mapping_strategy()) {
        let base_before = base.clone();
        let overrides_before = overrides.clone();
        let _ = ConfigMerger::merge(&base, &overrides).unwrap();
        prop_assert_eq!(base, base_before);
        prop_assert_eq!(overrides, overrides_before);
    }
}
