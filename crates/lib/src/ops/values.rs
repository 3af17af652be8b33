//! Set algebra over container values.
//!
//! Values are matched with [`Value::loose_eq`]: integers and floats compare
//! numerically and nested containers compare regardless of entry order.
//! Results keep the keys of the side the entries came from, except where
//! noted.
//!
//! ```
//! use arraykit::{and_not_values, and_values, container, or_values};
//!
//! let left = container! { "cat" => 1, "dog" => 2, "mouse" => 3 };
//! let right = container! { "car" => 2, "truck" => 3, "moped" => 4 };
//!
//! assert_eq!(and_values(&left, &right)?, container! { "dog" => 2, "mouse" => 3 });
//! assert_eq!(and_not_values(&left, &right)?, container! { "cat" => 1 });
//! assert_eq!(
//!     or_values(&left, &right)?,
//!     container! { "cat" => 1, "dog" => 2, "mouse" => 3, "moped" => 4 },
//! );
//! # Ok::<(), arraykit::Error>(())
//! ```

use crate::{
    Result,
    capability::{Iterable, Shape},
    container::{Container, Value},
};

use super::{OpsError, operands};

/// Values of an operand, in order.
fn known_values(operand: &dyn Iterable) -> Vec<&Value> {
    operand.entries().map(|(_, value)| value).collect()
}

fn occurs(known: &[&Value], value: &Value) -> bool {
    known.iter().any(|k| k.loose_eq(value))
}

/// Entries of `left` whose value also occurs among `right`'s values.
pub fn and_values<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    let (left, right) = operands("and_values", left, right)?;
    let known = known_values(right);
    Ok(left
        .entries()
        .filter(|(_, value)| occurs(&known, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Union by value.
///
/// All of `left`'s entries come first, skipping values already emitted. Then
/// `right`'s entries whose value has not been emitted: each keeps its key
/// unless the key is already taken, in which case it is appended at the next
/// free integer index.
///
/// Fails with [`OpsError::IndexExhausted`] if an entry has to be appended
/// but the result already holds the integer key `i64::MAX`.
pub fn or_values<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    let (left, right) = operands("or_values", left, right)?;
    let mut result = Container::new();

    for (key, value) in left.entries() {
        if !result.contains_value(value) {
            result.insert(key, value.clone());
        }
    }

    for (key, value) in right.entries() {
        if result.contains_value(value) {
            continue;
        }
        if !result.contains_key(key) {
            result.insert(key, value.clone());
        } else if result.push(value.clone()).is_none() {
            tracing::debug!(%key, "No free integer index left for union");
            return Err(OpsError::IndexExhausted {
                operation: "or_values",
            }
            .into());
        }
    }

    Ok(result)
}

/// Entries of `left` whose value does not occur among `right`'s values.
pub fn and_not_values<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    let (left, right) = operands("and_not_values", left, right)?;
    let known = known_values(right);
    Ok(left
        .entries()
        .filter(|(_, value)| !occurs(&known, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Symmetric difference by value.
///
/// Returns the values found in exactly one of the operands as a sequential
/// list: first those from `left`, then those from `right`, each in order.
///
/// ```
/// use arraykit::{container, xor_values};
///
/// let left = container! { "cat" => 1, "dog" => 2, "mouse" => 3 };
/// let right = container! { "car" => 2, "truck" => 3, "moped" => 4 };
///
/// assert_eq!(xor_values(&left, &right)?, container![1, 4]);
/// # Ok::<(), arraykit::Error>(())
/// ```
pub fn xor_values<L, R>(left: &L, right: &R) -> Result<Container>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    operands("xor_values", left, right)?;

    let only_left = and_not_values(left, right)?;
    let only_right = and_not_values(right, left)?;

    let union = Container::list(only_left.values().chain(only_right.values()).cloned());
    let common = and_values(&only_left, &only_right)?;

    and_not_values(&union, &common)
}
