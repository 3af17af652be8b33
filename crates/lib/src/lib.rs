//!
//! arraykit: helpers for heterogeneous, possibly nested key-value containers.
//!
//! ## Core Concepts
//!
//! * **Containers (`container::Container`)**: Ordered, key-unique mappings from integer or string keys to values. Values may be scalars, null, or further containers.
//! * **Capabilities (`capability`)**: Traits describing what a value can do (iterate, count, look up by key), and the predicates that classify values by them: `is_iterable`, `is_countable`, `is_array_accessible`, `is_array_like`.
//! * **Set algebra (`ops::values`, `ops::keys`)**: AND, OR, AND-NOT and XOR over two operands, either by value or by key.
//! * **Structural operations**: `collect` projects a key path out of every element; `rotate_array` transposes a two-level container.
//!
//! Every operation is a pure function that returns a new container. Logging
//! goes through `tracing`; install a subscriber to see it.
//!
//! ```
//! use arraykit::{and_values, collect, container, rotate_array};
//!
//! let people = container! {
//!     "alice" => container! { "age" => 31, "pet" => container! { "name" => "MrWhiskers" } },
//!     "ben" => container! { "age" => 27, "pet" => container! { "name" => "Blub" } },
//! };
//!
//! assert_eq!(collect(&people, ["pet", "name"]), container!["MrWhiskers", "Blub"]);
//! assert_eq!(collect(&people, "age"), container![31, 27]);
//!
//! let by_field = rotate_array(&people);
//! assert_eq!(by_field.get_container("age"), Some(&container! { "alice" => 31, "ben" => 27 }));
//!
//! let common = and_values(&container![1, 2, 3], &container![3, 4])?;
//! assert_eq!(common, container! { 2 => 3 });
//! # Ok::<(), arraykit::Error>(())
//! ```

pub mod capability;
pub mod container;
pub mod ops;

pub use capability::{
    Countable, Iterable, KeyAccessible, Shape, is_array_accessible, is_array_like, is_countable,
    is_iterable,
};
pub use container::{Container, Key, KeyPath, Value};
pub use ops::{
    OpsError, Side, and_keys, and_not_keys, and_not_values, and_values, collect, or_keys,
    or_values, rotate_array, xor_keys, xor_values,
};

/// Result type used throughout the arraykit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the arraykit library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured operation errors from the ops module
    #[error(transparent)]
    Ops(ops::OpsError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Ops(_) => "ops",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error reports an operand that cannot be iterated.
    pub fn is_invalid_operand(&self) -> bool {
        match self {
            Error::Ops(ops_err) => ops_err.is_invalid_operand(),
            _ => false,
        }
    }

    /// Check if this error reports an exhausted integer key space.
    pub fn is_index_exhausted(&self) -> bool {
        match self {
            Error::Ops(ops_err) => ops_err.is_index_exhausted(),
            _ => false,
        }
    }

    /// Check if this error is a JSON serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }

    /// Get the operation error, if this is one.
    pub fn as_ops_error(&self) -> Option<&ops::OpsError> {
        match self {
            Error::Ops(ops_err) => Some(ops_err),
            _ => None,
        }
    }
}
