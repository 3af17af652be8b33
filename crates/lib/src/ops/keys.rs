//! Set algebra over container keys.
//!
//! These mirror the value operations but test key membership. Entries are
//! carried through with their original key and value.

use std::collections::HashSet;

use crate::{
    Result,
    capability::{Iterable, Shape},
    container::{Container, Key},
};

use super::operands;

fn known_keys(operand: &dyn Iterable) -> HashSet<&Key> {
    operand.entries().map(|(key, _)| key).collect()
}

/// Entries of `left` whose key also exists in `right`.
pub fn and_keys<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    let (left, right) = operands("and_keys", left, right)?;
    let known = known_keys(right);
    Ok(left
        .entries()
        .filter(|(key, _)| known.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Union by key: all of `left`'s entries, then all of `right`'s.
///
/// On a key collision `right`'s value replaces `left`'s in place.
///
/// ```
/// use arraykit::{container, or_keys};
///
/// let left = container! { "a" => 1, "b" => 2 };
/// let right = container! { "b" => 20, "c" => 30 };
///
/// assert_eq!(or_keys(&left, &right)?, container! { "a" => 1, "b" => 20, "c" => 30 });
/// # Ok::<(), arraykit::Error>(())
/// ```
pub fn or_keys<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    let (left, right) = operands("or_keys", left, right)?;
    Ok(left
        .entries()
        .chain(right.entries())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Entries of `left` whose key does not exist in `right`.
pub fn and_not_keys<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    let (left, right) = operands("and_not_keys", left, right)?;
    let known = known_keys(right);
    Ok(left
        .entries()
        .filter(|(key, _)| !known.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Entries whose key exists in exactly one of `left` and `right`.
///
/// Computed as the key union minus the key intersection of the two operands.
///
/// ```
/// use arraykit::{container, xor_keys};
///
/// let left = container! { "a" => 1, "b" => 2 };
/// let right = container! { "b" => 20, "c" => 30 };
///
/// assert_eq!(xor_keys(&left, &right)?, container! { "a" => 1, "c" => 30 });
/// # Ok::<(), arraykit::Error>(())
/// ```
pub fn xor_keys<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    operands("xor_keys", left, right)?;
    and_not_keys(&or_keys(left, right)?, &and_keys(left, right)?)
}
