//! Recursive field projection.
//!
//! [`collect`] pulls one field out of every element of a container, and with
//! a multi-key path keeps drilling down level by level.

use crate::{
    capability::{Iterable, Shape},
    container::{Container, Key, KeyPath, Value},
};

/// Projects `path` out of each element of `container`.
///
/// The first key of the path is looked up in every element, producing a
/// sequential list with one entry per element: the field's value, or
/// [`Value::Null`] when the element is not key-accessible or lacks the key.
/// Remaining keys are then applied to that list in turn, so the recursion is
/// as deep as the path is long. Missing data never fails; it yields `Null`,
/// which stays `Null` through the remaining levels.
///
/// A non-iterable `container` produces an empty list, and an empty path one
/// `Null` per element.
///
/// ```
/// use arraykit::{Value, collect, container};
///
/// let owners = container! {
///     "alice" => container! { "pet" => container! { "name" => "MrWhiskers", "type" => "cat" } },
///     "ben" => container! { "pet" => container! { "name" => "Blub", "type" => "goldfish" } },
///     "chris" => container! { "pet" => container! { "type" => "none" } },
/// };
///
/// assert_eq!(
///     collect(&owners, ["pet", "name"]),
///     container!["MrWhiskers", "Blub", Value::Null],
/// );
/// ```
pub fn collect<S: Shape + ?Sized>(container: &S, path: impl Into<KeyPath>) -> Container {
    let path = path.into();
    match container.as_iterable() {
        Some(entries) => collect_level(entries, path.keys(), 0),
        None => {
            tracing::debug!(
                type_name = container.type_name(),
                %path,
                "Collect over non-iterable input"
            );
            Container::new()
        }
    }
}

fn collect_level(entries: &dyn Iterable, path: &[Key], depth: usize) -> Container {
    let (key, rest) = match path.split_first() {
        Some((key, rest)) => (Some(key), rest),
        None => (None, path),
    };

    let level: Container = entries
        .entries()
        .map(|(_, element)| key.map_or(Value::Null, |key| field(element, key)))
        .collect();

    tracing::trace!(depth, key = ?key, entries = level.len(), "Collected level");

    if rest.is_empty() {
        level
    } else {
        collect_level(&level, rest, depth + 1)
    }
}

fn field(element: &Value, key: &Key) -> Value {
    element
        .as_key_accessible()
        .and_then(|fields| fields.value_at(key))
        .cloned()
        .unwrap_or_default()
}
