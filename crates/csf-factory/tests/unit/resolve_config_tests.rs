//! Tests for narrowing raw configuration to a variant's section

use csf_domain::value_objects::{ConfigMap, ConfigValue};
use csf_factory::Variant;

fn raw() -> ConfigMap {
    ConfigMap::new()
        .with("top", "level")
        .with("alpha", ConfigMap::new().with("host", "a.internal"))
        .with("beta", ConfigMap::new().with("host", "b.internal"))
}

#[test]
fn test_unnamed_variant_owns_the_whole_mapping() {
    let section = Variant::unnamed().resolve_config(&raw());
    assert_eq!(section, raw());
}

#[test]
fn test_named_variant_gets_its_own_section() {
    let alpha = Variant::new("alpha").resolve_config(&raw());
    assert_eq!(alpha, ConfigMap::new().with("host", "a.internal"));

    let beta = Variant::new("beta").resolve_config(&raw());
    assert_eq!(beta, ConfigMap::new().with("host", "b.internal"));
}

#[test]
fn test_absent_section_yields_empty_mapping() {
    let section = Variant::new("gamma").resolve_config(&raw());
    assert!(section.is_empty());
}

#[test]
fn test_scalar_under_variant_name_yields_empty_mapping() {
    let raw = ConfigMap::new().with("weird", 42);
    assert!(Variant::new("weird").resolve_config(&raw).is_empty());
}

#[test]
fn test_section_copy_preserves_order() {
    let raw = ConfigMap::new().with(
        "variant",
        ConfigMap::new().with("z", 1).with("a", 2).with("m", 3),
    );

    let section = Variant::new("variant").resolve_config(&raw);
    let keys: Vec<&str> = section.keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn test_section_is_a_copy_not_a_view() {
    let raw = raw();
    let mut section = Variant::new("alpha").resolve_config(&raw);
    section.insert("host", "changed");

    let untouched = raw.get("alpha").and_then(ConfigValue::as_map).unwrap();
    assert_eq!(untouched.get("host"), Some(&ConfigValue::from("a.internal")));
}

#[test]
fn test_each_name_selects_independently() {
    for name in ["", "alpha", "beta"] {
        let section = Variant::new(name).resolve_config(&raw());
        if name.is_empty() {
            assert_eq!(section.len(), 3);
        } else {
            assert_eq!(section.len(), 1);
            assert!(section.contains_key("host"));
        }
    }
}
