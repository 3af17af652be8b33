//! Capability traits and classification predicates.
//!
//! Instead of probing concrete types at runtime, values advertise what they
//! can do through a small set of traits:
//!
//! - [`Iterable`] - enumerate `(key, value)` pairs in order
//! - [`Countable`] - report a number of elements
//! - [`KeyAccessible`] - look up a value by key
//!
//! [`Shape`] is the discovery trait. Every classifiable type implements it and
//! hands out the capabilities it supports; the defaults support nothing.
//! [`Container`] supports all three, [`Value`] delegates to its nested
//! container, and scalars support none. The predicates below and the operand
//! checks of the set operations only look at these capabilities.
//!
//! # Custom types
//!
//! ```
//! use arraykit::{Countable, Shape, is_array_like, is_countable, is_iterable};
//!
//! struct Counter(usize);
//!
//! impl Countable for Counter {
//!     fn count(&self) -> usize {
//!         self.0
//!     }
//! }
//!
//! impl Shape for Counter {
//!     fn type_name(&self) -> &'static str {
//!         "counter"
//!     }
//!
//!     fn as_countable(&self) -> Option<&dyn Countable> {
//!         Some(self)
//!     }
//! }
//!
//! let counter = Counter(3);
//! assert!(is_countable(&counter));
//! assert!(!is_iterable(&counter));
//! assert!(!is_array_like(&counter));
//! ```

use crate::container::{Container, Key, Value};

/// Sequential enumeration of `(key, value)` pairs.
pub trait Iterable {
    /// Returns the entries in iteration order
    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_>;
}

/// A size or length.
pub trait Countable {
    /// Returns the number of elements
    fn count(&self) -> usize;
}

/// Key-based subscript access.
pub trait KeyAccessible {
    /// Returns the value stored under `key`, if any
    fn value_at(&self, key: &Key) -> Option<&Value>;
}

/// Capability discovery for classifiable values.
pub trait Shape {
    /// Human-readable type name, used in error messages
    fn type_name(&self) -> &'static str;

    fn as_iterable(&self) -> Option<&dyn Iterable> {
        None
    }

    fn as_countable(&self) -> Option<&dyn Countable> {
        None
    }

    fn as_key_accessible(&self) -> Option<&dyn KeyAccessible> {
        None
    }
}

impl Iterable for Container {
    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.iter())
    }
}

impl Countable for Container {
    fn count(&self) -> usize {
        self.len()
    }
}

impl KeyAccessible for Container {
    fn value_at(&self, key: &Key) -> Option<&Value> {
        self.get(key)
    }
}

impl Shape for Container {
    fn type_name(&self) -> &'static str {
        "container"
    }

    fn as_iterable(&self) -> Option<&dyn Iterable> {
        Some(self)
    }

    fn as_countable(&self) -> Option<&dyn Countable> {
        Some(self)
    }

    fn as_key_accessible(&self) -> Option<&dyn KeyAccessible> {
        Some(self)
    }
}

impl Shape for Value {
    fn type_name(&self) -> &'static str {
        Value::type_name(self)
    }

    fn as_iterable(&self) -> Option<&dyn Iterable> {
        self.as_container()?.as_iterable()
    }

    fn as_countable(&self) -> Option<&dyn Countable> {
        self.as_container()?.as_countable()
    }

    fn as_key_accessible(&self) -> Option<&dyn KeyAccessible> {
        self.as_container()?.as_key_accessible()
    }
}

// Bare scalars classify as having no capabilities
macro_rules! scalar_shape {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl Shape for $ty {
                fn type_name(&self) -> &'static str {
                    $name
                }
            }
        )+
    };
}

scalar_shape! {
    bool => "bool",
    i32 => "int",
    i64 => "int",
    u32 => "int",
    f64 => "float",
    str => "text",
    String => "text",
}

/// Returns true if `value` can be enumerated as key/value pairs.
///
/// This is exactly the check the set operations apply to their operands.
pub fn is_iterable<S: Shape + ?Sized>(value: &S) -> bool {
    value.as_iterable().is_some()
}

/// Returns true if `value` has a size.
pub fn is_countable<S: Shape + ?Sized>(value: &S) -> bool {
    value.as_countable().is_some()
}

/// Returns true if values can be looked up by key in `value`.
pub fn is_array_accessible<S: Shape + ?Sized>(value: &S) -> bool {
    value.as_key_accessible().is_some()
}

/// Returns true if `value` supports iteration, counting and key access all
/// at once. Every container does.
///
/// ```
/// use arraykit::{Value, container, is_array_like};
///
/// assert!(is_array_like(&container![1, 2]));
/// assert!(is_array_like(&Value::from(container! { "a" => 1 })));
/// assert!(!is_array_like(&Value::Int(5)));
/// assert!(!is_array_like("text"));
/// ```
pub fn is_array_like<S: Shape + ?Sized>(value: &S) -> bool {
    is_iterable(value) && is_countable(value) && is_array_accessible(value)
}
