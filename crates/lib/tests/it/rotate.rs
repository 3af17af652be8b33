//! Tests for the two-level transpose.

use arraykit::{Container, Key, Value, container, rotate_array};

use crate::helpers::product_columns;

#[test]
fn test_products_by_row() {
    assert_eq!(
        rotate_array(&product_columns()),
        container![
            container! { "ID" => 1234, "Name" => "Toaster" },
            container! { "ID" => 5678, "Name" => "Kettle" },
        ]
    );
}

#[test]
fn test_rectangular_round_trip() {
    let columns = product_columns();
    assert_eq!(rotate_array(&rotate_array(&columns)), columns);

    let grid = container! {
        "r1" => container! { "c1" => 1, "c2" => 2, "c3" => 3 },
        "r2" => container! { "c1" => 4, "c2" => 5, "c3" => 6 },
    };
    assert_eq!(rotate_array(&rotate_array(&grid)), grid);
}

#[test]
fn test_every_cell_is_transposed() {
    let input = container! {
        "a" => container! { "x" => 1, "y" => 2 },
        "b" => container! { "y" => 3, "z" => 4 },
        "c" => container! {},
    };
    let output = rotate_array(&input);

    let input_cells: usize = input
        .values()
        .filter_map(Value::as_container)
        .map(Container::len)
        .sum();
    let output_cells: usize = output
        .values()
        .filter_map(Value::as_container)
        .map(Container::len)
        .sum();
    assert_eq!(input_cells, output_cells);

    for (x, row) in &input {
        for (y, value) in row.as_container().unwrap() {
            assert_eq!(
                output.get_container(y).and_then(|column| column.get(x)),
                Some(value)
            );
        }
    }
}

#[test]
fn test_output_keys_follow_first_encounter() {
    let input = container! {
        "a" => container! { "z" => 1 },
        "b" => container! { "y" => 2, "z" => 3 },
        "c" => container! { "x" => 4 },
    };
    let output = rotate_array(&input);
    assert_eq!(
        output.keys().cloned().collect::<Vec<_>>(),
        vec![Key::from("z"), Key::from("y"), Key::from("x")]
    );
    assert_eq!(output.get_container("z"), Some(&container! { "a" => 1, "b" => 3 }));
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(rotate_array(&Container::new()).is_empty());
    assert!(rotate_array(&container![container! {}, container! {}]).is_empty());
}

#[test]
fn test_scalar_rows_contribute_nothing() {
    let input = container! {
        "a" => Value::Null,
        "b" => container! { "k" => "v" },
        "c" => 3,
    };
    assert_eq!(
        rotate_array(&input),
        container! { "k" => container! { "b" => "v" } }
    );
}

#[test]
fn test_non_iterable_input_yields_empty_output() {
    assert!(rotate_array(&Value::Int(1)).is_empty());
}
