//! Keys for container entries.
//!
//! A [`Key`] is either an integer or a string. String keys that are the
//! canonical decimal form of an `i64` are stored as integers, so `"7"` and `7`
//! address the same entry. Use [`Key::text_raw`] to opt out of that rule.

use std::fmt;

/// A container key.
///
/// # Examples
///
/// ```
/// use arraykit::Key;
///
/// assert_eq!(Key::from("42"), Key::Int(42));
/// assert_eq!(Key::from("042"), Key::Text("042".to_string()));
/// assert_eq!(Key::from("name"), Key::Text("name".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key
    Text(String),
}

impl Key {
    /// Creates a string key without integer normalisation.
    pub fn text_raw(s: impl Into<String>) -> Self {
        Key::Text(s.into())
    }

    /// Returns true if this is an integer key
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true if this is a string key
    pub fn is_text(&self) -> bool {
        matches!(self, Key::Text(_))
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Text(_) => None,
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            Key::Int(_) => None,
        }
    }
}

/// Parses `s` as an integer when it is the canonical decimal form of an `i64`.
///
/// Rejects leading zeros, a leading `+`, `-0` and anything that overflows.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') && (digits.len() > 1 || s.starts_with('-')) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_int(value) {
            Some(n) => Key::Int(n),
            None => Key::Text(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(n) => Key::Int(n),
            None => Key::Text(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::from(value.as_str())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        // Clamp rather than wrap on 64-bit targets
        Key::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        *self == Key::from(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Key::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Key {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Key::Int(n) if *n == *other as i64)
    }
}

impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Key::Int(n) => serializer.serialize_i64(*n),
            Key::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string key")
            }

            fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Key::Int(v))
            }

            fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map(Key::Int)
                    .map_err(|_| E::custom(format!("integer key {v} does not fit in i64")))
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Key::from(v))
            }

            fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Key::from(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
