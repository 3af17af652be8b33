//! Tests for serde/JSON support and the crate-level error type.

use arraykit::{Container, Key, Value, container, rotate_array};

use crate::helpers::{pet_owners_by_name, product_columns};

// ===== JSON =====

#[test]
fn test_json_round_trip_preserves_structure_and_order() {
    let owners = pet_owners_by_name();
    let json = owners.to_json_string().unwrap();
    assert_eq!(Container::from_json_str(&json).unwrap(), owners);
}

#[test]
fn test_serializes_as_object() {
    let c = container! { "b" => 1, 0 => Value::Null, "a" => container![true, 2.5] };
    assert_eq!(
        c.to_json_string().unwrap(),
        r#"{"b":1,"0":null,"a":{"0":true,"1":2.5}}"#
    );
}

#[test]
fn test_arrays_become_sequential_containers() {
    let c = Container::from_json_str(r#"[10, "x", [1, 2], {"k": null}]"#).unwrap();
    assert_eq!(
        c,
        container![10, "x", container![1, 2], container! { "k" => Value::Null }]
    );
    assert_eq!(c.next_index(), Some(4));
}

#[test]
fn test_numeric_object_keys_are_normalised() {
    let c = Container::from_json_str(r#"{"7": "seven", "07": "padded", "name": 1}"#).unwrap();
    assert_eq!(
        c.keys().cloned().collect::<Vec<_>>(),
        vec![Key::Int(7), Key::text_raw("07"), Key::from("name")]
    );
    assert_eq!(c.next_index(), Some(8));
}

#[test]
fn test_object_key_order_is_preserved() {
    let c = Container::from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    assert_eq!(c, container! { "z" => 1, "a" => 2, "m" => 3 });
}

#[test]
fn test_scalar_json_kinds() {
    let c = Container::from_json_str(r#"[1, -2, 1.5, true, "s", null]"#).unwrap();
    let kinds: Vec<&str> = c.values().map(Value::type_name).collect();
    assert_eq!(kinds, vec!["int", "int", "float", "bool", "text", "null"]);
}

#[test]
fn test_operation_results_serialize() {
    let rows = rotate_array(&product_columns());
    assert_eq!(
        rows.to_json_string().unwrap(),
        r#"{"0":{"ID":1234,"Name":"Toaster"},"1":{"ID":5678,"Name":"Kettle"}}"#
    );
}

#[test]
fn test_value_round_trips_through_serde_json() {
    let value = Value::from(container! { "n" => 1, "list" => container!["a"] });
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json, serde_json::json!({ "n": 1, "list": { "0": "a" } }));
    let back: Value = serde_json::from_value(json).unwrap();
    assert_eq!(back, value);
}

// ===== ERRORS =====

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let err = Container::from_json_str("{not json").unwrap_err();
    assert!(err.is_serialization_error());
    assert!(!err.is_invalid_operand());
    assert_eq!(err.module(), "serialize");
    assert!(err.as_ops_error().is_none());
}

#[test]
fn test_scalar_json_is_not_a_container() {
    let err = Container::from_json_str("42").unwrap_err();
    assert!(err.is_serialization_error());
}
