//! Tests for configuration value resolution against a container

use crate::test_utils::{BrokenContainer, TestContainer};
use csf_domain::Error;
use csf_domain::ports::container::SharedService;
use csf_domain::value_objects::{ConfigMap, ConfigValue, Resolved};
use csf_factory::Variant;
use std::sync::Arc;

#[test]
fn test_literal_tree_resolves_to_itself() {
    let container = TestContainer::new();
    let value = ConfigValue::from(
        ConfigMap::new()
            .with("key1", "value1")
            .with("key2", 2)
            .with(
                "key3",
                ConfigMap::new().with("key31", "value31").with("key32", 5),
            ),
    );

    let resolved = Variant::unnamed().resolve_value(&container, &value).unwrap();

    let expected = Resolved::Map(vec![
        ("key1".to_string(), Resolved::from("value1")),
        ("key2".to_string(), Resolved::from(2)),
        (
            "key3".to_string(),
            Resolved::Map(vec![
                ("key31".to_string(), Resolved::from("value31")),
                ("key32".to_string(), Resolved::from(5)),
            ]),
        ),
    ]);
    assert_eq!(resolved, expected);
}

#[test]
fn test_nested_reference_is_substituted() {
    let handle: SharedService = Arc::new(String::from("value333"));
    let container = TestContainer::new().with_shared("value31", Arc::clone(&handle));

    let value = ConfigValue::from(
        ConfigMap::new()
            .with("key1", "value1")
            .with("key2", 2)
            .with(
                "key3",
                ConfigMap::new().with("key31", "value31").with("key32", 5),
            ),
    );

    let resolved = Variant::unnamed().resolve_value(&container, &value).unwrap();

    // Only the leaf naming a registered key changes; everything else passes through
    assert_eq!(resolved.get("key1"), Some(&Resolved::from("value1")));
    assert_eq!(resolved.get("key2"), Some(&Resolved::from(2)));

    let nested = resolved.get("key3").unwrap();
    assert_eq!(nested.get("key31"), Some(&Resolved::Service(Arc::clone(&handle))));
    assert_eq!(nested.get("key32"), Some(&Resolved::from(5)));

    let substituted = nested.get("key31").unwrap().clone();
    let text = substituted.into_service::<String>().unwrap();
    assert_eq!(text.as_str(), "value333");
}

#[test]
fn test_key_set_and_order_survive_resolution() {
    let container = TestContainer::new();
    let value = ConfigValue::from(
        ConfigMap::new().with("zeta", 1).with("alpha", 2).with("mid", 3),
    );

    let resolved = Variant::unnamed().resolve_value(&container, &value).unwrap();

    let keys: Vec<&str> = resolved
        .as_map()
        .unwrap()
        .iter()
        .map(|(key, _)| key.as_str())
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_resolution_is_idempotent_on_literal_trees() {
    let container = TestContainer::new();
    let value = ConfigValue::from(
        ConfigMap::new()
            .with("flag", true)
            .with("ratio", 0.5)
            .with("nested", ConfigMap::new().with("text", "plain")),
    );

    let first = Variant::unnamed().resolve_value(&container, &value).unwrap();
    let second = Variant::unnamed().resolve_value(&container, &value).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scalars_never_touch_the_container() {
    let container = TestContainer::new();
    let variant = Variant::unnamed();

    assert_eq!(
        variant.resolve_value(&container, &ConfigValue::Bool(true)).unwrap(),
        Resolved::Bool(true)
    );
    assert_eq!(
        variant.resolve_value(&container, &ConfigValue::Integer(7)).unwrap(),
        Resolved::Integer(7)
    );
    assert_eq!(
        variant.resolve_value(&container, &ConfigValue::Float(1.5)).unwrap(),
        Resolved::Float(1.5)
    );
    assert!(container.calls().is_empty());
}

#[test]
fn test_string_lookup_probes_exactly_once() {
    let container = TestContainer::new();

    let resolved = Variant::unnamed()
        .resolve_value(&container, &ConfigValue::from("plain text"))
        .unwrap();

    assert_eq!(resolved, Resolved::from("plain text"));
    assert_eq!(container.calls(), vec![("has", "plain text".to_string())]);
}

#[test]
fn test_sequence_elements_resolve_in_order() {
    let handle: SharedService = Arc::new(42_u32);
    let container = TestContainer::new().with_shared("answer.service", Arc::clone(&handle));

    let value = ConfigValue::Sequence(vec![
        ConfigValue::from("literal"),
        ConfigValue::from("answer.service"),
        ConfigValue::from(true),
    ]);

    let resolved = Variant::unnamed().resolve_value(&container, &value).unwrap();
    assert_eq!(
        resolved,
        Resolved::Sequence(vec![
            Resolved::from("literal"),
            Resolved::Service(handle),
            Resolved::from(true),
        ])
    );
}

#[test]
fn test_registered_key_wins_over_literal_intent() {
    // The documented ambiguity: a literal colliding with a registered key
    // is substituted, no questions asked
    let container =
        TestContainer::new().with_service("localhost", String::from("surprise service"));

    let resolved = Variant::unnamed()
        .resolve_value(&container, &ConfigValue::from("localhost"))
        .unwrap();

    assert!(matches!(resolved, Resolved::Service(_)));
}

#[test]
fn test_container_failure_propagates_unchanged() {
    let err = Variant::unnamed()
        .resolve_value(&BrokenContainer, &ConfigValue::from("anything"))
        .unwrap_err();

    assert!(matches!(err, Error::Internal { .. }));
}
