//! Tests for pushing configuration into objects through setter tables

use crate::test_utils::TestContainer;
use csf_domain::Error;
use csf_domain::value_objects::ConfigMap;
use csf_factory::{SetterMap, Variant};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default, PartialEq)]
struct Endpoint {
    name: String,
    port: i64,
}

fn endpoint_setters() -> SetterMap<Endpoint> {
    SetterMap::new()
        .with("name", |endpoint: &mut Endpoint, value| {
            endpoint.name = value.into_string()?;
            Ok(())
        })
        .with("port", |endpoint: &mut Endpoint, value| {
            endpoint.port = value.into_integer()?;
            Ok(())
        })
}

#[test]
fn test_setters_mutate_and_hand_back_the_object() {
    let container = TestContainer::new();
    let config = ConfigMap::new().with("name", "value1");

    let endpoint = Variant::unnamed()
        .apply_setters(&container, Endpoint::default(), &config, &endpoint_setters())
        .unwrap();

    assert_eq!(
        endpoint,
        Endpoint {
            name: "value1".to_string(),
            port: 0,
        }
    );
}

#[test]
fn test_unknown_key_fails_before_any_container_lookup() {
    let container = TestContainer::new();
    let config = ConfigMap::new().with("unknownField", "value");

    let err = Variant::unnamed()
        .apply_setters(&container, Endpoint::default(), &config, &endpoint_setters())
        .unwrap_err();

    match err {
        Error::MissingSetter { key, target } => {
            assert_eq!(key, "unknownField");
            assert!(target.contains("Endpoint"));
        }
        other => panic!("Expected MissingSetter, got {other:?}"),
    }
    // The offending value is never resolved
    assert!(container.calls().is_empty());
}

#[test]
fn test_entries_apply_in_declaration_order() {
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let record_name = Arc::clone(&order);
    let record_port = Arc::clone(&order);

    let setters: SetterMap<Endpoint> = SetterMap::new()
        .with("name", move |endpoint: &mut Endpoint, value| {
            record_name.lock().unwrap().push("name");
            endpoint.name = value.into_string()?;
            Ok(())
        })
        .with("port", move |endpoint: &mut Endpoint, value| {
            record_port.lock().unwrap().push("port");
            endpoint.port = value.into_integer()?;
            Ok(())
        });

    let container = TestContainer::new();
    let config = ConfigMap::new().with("port", 8080).with("name", "svc");

    Variant::unnamed()
        .apply_setters(&container, Endpoint::default(), &config, &setters)
        .unwrap();

    assert_eq!(*order.lock().unwrap(), ["port", "name"]);
}

#[test]
fn test_failure_midway_keeps_earlier_applications() {
    let applied: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&applied);

    let setters: SetterMap<Endpoint> =
        SetterMap::new().with("name", move |endpoint: &mut Endpoint, value| {
            let name = value.into_string()?;
            recorder.lock().unwrap().push(name.clone());
            endpoint.name = name;
            Ok(())
        });

    let container = TestContainer::new();
    // "name" applies, then "port" has no setter and aborts the pass
    let config = ConfigMap::new().with("name", "svc").with("port", 8080);

    let err = Variant::unnamed()
        .apply_setters(&container, Endpoint::default(), &config, &setters)
        .unwrap_err();

    assert!(matches!(err, Error::MissingSetter { .. }));
    assert_eq!(*applied.lock().unwrap(), ["svc"]);
}

#[test]
fn test_setter_receives_substituted_service() {
    #[derive(Default)]
    struct Holder {
        transport: Option<Arc<String>>,
    }

    let setters: SetterMap<Holder> =
        SetterMap::new().with("transport", |holder: &mut Holder, value| {
            holder.transport = Some(value.into_service::<String>()?);
            Ok(())
        });

    let container =
        TestContainer::new().with_service("smtp.transport", String::from("smtp://mail"));
    let config = ConfigMap::new().with("transport", "smtp.transport");

    let holder = Variant::unnamed()
        .apply_setters(&container, Holder::default(), &config, &setters)
        .unwrap();

    assert_eq!(holder.transport.unwrap().as_str(), "smtp://mail");
}

#[test]
fn test_setter_shape_error_propagates() {
    let container = TestContainer::new();
    let config = ConfigMap::new().with("port", "not a number");

    let err = Variant::unnamed()
        .apply_setters(&container, Endpoint::default(), &config, &endpoint_setters())
        .unwrap_err();

    assert!(matches!(err, Error::Value { .. }));
}

#[test]
fn test_empty_config_applies_nothing() {
    let container = TestContainer::new();

    let endpoint = Variant::unnamed()
        .apply_setters(
            &container,
            Endpoint::default(),
            &ConfigMap::new(),
            &endpoint_setters(),
        )
        .unwrap();

    assert_eq!(endpoint, Endpoint::default());
    assert!(container.calls().is_empty());
}
