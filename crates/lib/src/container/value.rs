//! Value types for container entries.
//!
//! This module provides the [`Value`] enum: every entry of a [`Container`]
//! holds one. Values are either scalars (null, booleans, numbers, text) or a
//! nested container, which is what makes containers recursive.

use std::fmt;

use super::{Container, Key};

/// Values that can be stored in a container.
///
/// # Value Types
///
/// ## Scalars
/// - [`Value::Null`] - Null, also used as the absent marker by `collect`
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 strings
///
/// ## Nesting
/// - [`Value::Container`] - A nested container
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types:
///
/// ```
/// # use arraykit::Value;
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(text == 42));
/// ```
///
/// Equality between values is structural. Numbers of different variants never
/// compare equal: `Value::Int(1) != Value::Float(1.0)`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Nested container
    Container(Container),
}

impl Value {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a non-null scalar
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_)
        )
    }

    /// Returns true if this value is a nested container
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Container(_) => "container",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a container (returns immutable reference)
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable container reference
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Value::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Equality used for value membership in set operations.
    ///
    /// Same as `==` except that integers and floats compare numerically and
    /// nested containers compare as unordered key/value maps, recursively.
    ///
    /// ```
    /// use arraykit::{Value, container};
    ///
    /// assert!(Value::Int(1).loose_eq(&Value::Float(1.0)));
    /// assert!(Value::from(container! { "x" => 1, "y" => 2 })
    ///     .loose_eq(&Value::from(container! { "y" => 2.0, "x" => 1 })));
    /// assert!(!Value::from("1").loose_eq(&Value::Int(1)));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => *i as f64 == *f,
            (Value::Container(a), Value::Container(b)) => a.loose_eq(b),
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Container(container) => write!(f, "{container}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Container> for Value {
    fn from(value: Container) -> Self {
        Value::Container(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(n) => Value::Int(n),
            Key::Text(s) => Value::Text(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
