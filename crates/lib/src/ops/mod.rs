//! Operations over containers.
//!
//! - [`values`] - set algebra by value (`and_values`, `or_values`, ...)
//! - [`keys`] - set algebra by key (`and_keys`, `or_keys`, ...)
//! - [`collect`] - recursive field projection
//! - [`rotate`] - two-level transpose
//!
//! Every operation takes its inputs by reference and returns a freshly built
//! [`Container`](crate::Container). Set operations accept anything
//! implementing [`Shape`] and fail with [`OpsError::InvalidOperand`] when an
//! operand cannot be iterated. `collect` and `rotate_array` never fail.

pub mod collect;
pub mod errors;
pub mod keys;
pub mod rotate;
pub mod values;

pub use collect::collect;
pub use errors::{OpsError, Side};
pub use keys::{and_keys, and_not_keys, or_keys, xor_keys};
pub use rotate::rotate_array;
pub use values::{and_not_values, and_values, or_values, xor_values};

use crate::capability::{Iterable, Shape};

/// Resolves both operands of a set operation to their iterable capability.
pub(crate) fn operands<'l, 'r, L, R>(
    operation: &'static str,
    left: &'l L,
    right: &'r R,
) -> Result<(&'l dyn Iterable, &'r dyn Iterable), OpsError>
where
    L: Shape + ?Sized,
    R: Shape + ?Sized,
{
    Ok((
        iterable(operation, Side::Left, left)?,
        iterable(operation, Side::Right, right)?,
    ))
}

fn iterable<'a, S: Shape + ?Sized>(
    operation: &'static str,
    side: Side,
    operand: &'a S,
) -> Result<&'a dyn Iterable, OpsError> {
    operand.as_iterable().ok_or_else(|| {
        let type_name = operand.type_name();
        tracing::debug!(operation, %side, type_name, "Rejecting non-iterable operand");
        OpsError::InvalidOperand {
            operation,
            side,
            type_name,
        }
    })
}
