//! Error types for container operations.
//!
//! Set-algebra operations fail when an operand cannot be enumerated as
//! key/value pairs, and `or_values` also fails when it runs out of integer
//! keys to append at.

use std::fmt;

use thiserror::Error;

/// Which operand of a binary operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Structured error types for container operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpsError {
    /// An operand does not support iteration
    #[error("Invalid {side} operand for {operation}: {type_name} is not iterable")]
    InvalidOperand {
        operation: &'static str,
        side: Side,
        type_name: &'static str,
    },

    /// A positional append found no free integer key
    #[error("No free integer index left in {operation} result")]
    IndexExhausted { operation: &'static str },
}

impl OpsError {
    /// Check if this error reports a non-iterable operand
    pub fn is_invalid_operand(&self) -> bool {
        matches!(self, OpsError::InvalidOperand { .. })
    }

    /// Check if this error reports an exhausted integer key space
    pub fn is_index_exhausted(&self) -> bool {
        matches!(self, OpsError::IndexExhausted { .. })
    }

    /// Get the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            OpsError::InvalidOperand { operation, .. }
            | OpsError::IndexExhausted { operation } => operation,
        }
    }

    /// Get the offending side if this is an operand error
    pub fn side(&self) -> Option<Side> {
        match self {
            OpsError::InvalidOperand { side, .. } => Some(*side),
            OpsError::IndexExhausted { .. } => None,
        }
    }
}

// Conversion from OpsError to the main Error type
impl From<OpsError> for crate::Error {
    fn from(err: OpsError) -> Self {
        crate::Error::Ops(err)
    }
}
