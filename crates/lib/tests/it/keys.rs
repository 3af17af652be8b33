//! Tests for set algebra by key.

use std::collections::HashSet;

use arraykit::{
    Container, Key, Side, Value, and_keys, and_not_keys, container, or_keys, xor_keys,
};

use crate::helpers::{animals, assert_invalid_operand, keys_of, operand_pairs, vehicles};

fn key_set(container: &Container) -> HashSet<Key> {
    container.keys().cloned().collect()
}

// ===== AND / AND-NOT =====

#[test]
fn test_and_keys_and_and_not_keys_partition_left() {
    for (left, right) in operand_pairs() {
        let both = and_keys(&left, &right).unwrap();
        let only = and_not_keys(&left, &right).unwrap();

        assert!(key_set(&both).is_disjoint(&key_set(&only)));
        assert_eq!(both.len() + only.len(), left.len());

        // Each part keeps left's relative order and values
        for part in [&both, &only] {
            let positions: Vec<usize> = part
                .keys()
                .map(|key| keys_of(&left).iter().position(|k| k == key).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for (key, value) in part {
                assert_eq!(left.get(key), Some(value));
            }
        }
    }
}

#[test]
fn test_and_keys_ignores_values() {
    let left = container! { "a" => 1, "b" => 2 };
    let right = container! { "b" => "different", "z" => 2 };
    assert_eq!(and_keys(&left, &right).unwrap(), container! { "b" => 2 });
    assert_eq!(and_not_keys(&left, &right).unwrap(), container! { "a" => 1 });
}

#[test]
fn test_positional_keys_match_by_index() {
    let left = container!["a", "b", "c"];
    let right = container!["x", "y"];
    assert_eq!(
        and_keys(&left, &right).unwrap(),
        container!["a", "b"]
    );
    assert_eq!(
        and_not_keys(&left, &right).unwrap(),
        container! { 2 => "c" }
    );
}

#[test]
fn test_raw_text_key_does_not_match_integer_key() {
    let mut left = Container::new();
    left.insert(Key::text_raw("1"), "raw");
    let right = container! { 1 => "int" };
    assert!(and_keys(&left, &right).unwrap().is_empty());
}

// ===== OR =====

#[test]
fn test_or_keys_contains_every_key_and_right_wins() {
    for (left, right) in operand_pairs() {
        let union = or_keys(&left, &right).unwrap();
        let mut expected = key_set(&left);
        expected.extend(key_set(&right));
        assert_eq!(key_set(&union), expected);

        for (key, value) in &right {
            assert_eq!(union.get(key), Some(value));
        }
    }
}

#[test]
fn test_or_keys_order() {
    let left = container! { "a" => 1, "b" => 2 };
    let right = container! { "c" => 3, "a" => 10 };
    let union = or_keys(&left, &right).unwrap();
    assert_eq!(union, container! { "a" => 10, "b" => 2, "c" => 3 });
}

#[test]
fn test_or_keys_disjoint_operands_concatenate() {
    assert_eq!(
        or_keys(&animals(), &vehicles()).unwrap(),
        container! {
            "cat" => 1, "dog" => 2, "mouse" => 3,
            "car" => 2, "truck" => 3, "moped" => 4,
        }
    );
}

// ===== XOR =====

#[test]
fn test_xor_keys_holds_keys_in_exactly_one_operand() {
    for (left, right) in operand_pairs() {
        let xor = xor_keys(&left, &right).unwrap();
        let expected: HashSet<Key> = key_set(&left)
            .symmetric_difference(&key_set(&right))
            .cloned()
            .collect();
        assert_eq!(key_set(&xor), expected);
    }
}

#[test]
fn test_xor_keys_takes_values_from_their_operand() {
    let left = container! { "a" => 1, "shared" => 2 };
    let right = container! { "shared" => 3, "b" => 4 };
    assert_eq!(
        xor_keys(&left, &right).unwrap(),
        container! { "a" => 1, "b" => 4 }
    );
}

#[test]
fn test_xor_keys_of_identical_key_sets_is_empty() {
    let left = container! { "a" => 1 };
    let right = container! { "a" => Value::Null };
    assert!(xor_keys(&left, &right).unwrap().is_empty());
}

// ===== INVALID OPERANDS =====

#[test]
fn test_scalar_operands_are_rejected_with_side() {
    let list = container![1];
    let scalar = Value::Int(5);

    assert_invalid_operand(and_keys(&scalar, &list), Side::Left);
    assert_invalid_operand(or_keys(&scalar, &list), Side::Left);
    assert_invalid_operand(and_not_keys(&scalar, &list), Side::Left);
    assert_invalid_operand(xor_keys(&scalar, &list), Side::Left);

    assert_invalid_operand(and_keys(&list, &scalar), Side::Right);
    assert_invalid_operand(or_keys(&list, &scalar), Side::Right);
    assert_invalid_operand(and_not_keys(&list, &scalar), Side::Right);
    assert_invalid_operand(xor_keys(&list, &scalar), Side::Right);
}

#[test]
fn test_error_names_operation_and_type() {
    let err = xor_keys(&container![1], &true).unwrap_err();
    let ops_err = err.as_ops_error().unwrap();
    assert_eq!(ops_err.operation(), "xor_keys");
    assert_eq!(err.module(), "ops");
    assert_eq!(
        err.to_string(),
        "Invalid right operand for xor_keys: bool is not iterable"
    );
}
