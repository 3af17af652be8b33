//! Two-level transpose.

use crate::{
    capability::Shape,
    container::{Container, Value},
};

/// Transposes a two-level container so that `output[y][x] == input[x][y]`.
///
/// Every `(x, y)` pair present in the input produces exactly one output cell
/// and no cell is made up for pairs that are absent, so rows with different
/// key sets give columns with different key sets. Output keys appear in the
/// order they are first seen. Rows that are not iterable contribute nothing.
///
/// ```
/// use arraykit::{container, rotate_array};
///
/// let products = container! {
///     "ID" => container![1234, 5678],
///     "Name" => container!["Toaster", "Kettle"],
/// };
///
/// assert_eq!(
///     rotate_array(&products),
///     container![
///         container! { "ID" => 1234, "Name" => "Toaster" },
///         container! { "ID" => 5678, "Name" => "Kettle" },
///     ],
/// );
/// ```
pub fn rotate_array<S: Shape + ?Sized>(container: &S) -> Container {
    let mut result = Container::new();
    let Some(rows) = container.as_iterable() else {
        tracing::debug!(
            type_name = container.type_name(),
            "Rotate over non-iterable input"
        );
        return result;
    };

    for (x, row) in rows.entries() {
        let Some(cells) = row.as_iterable() else {
            tracing::debug!(row = %x, type_name = row.type_name(), "Skipping non-iterable row");
            continue;
        };
        for (y, value) in cells.entries() {
            if !result.contains_key(y) {
                result.insert(y, Container::new());
            }
            if let Some(Value::Container(column)) = result.get_mut(y) {
                column.insert(x, value.clone());
            }
        }
    }

    result
}
