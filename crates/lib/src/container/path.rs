//! Key paths for drilling into nested containers.
//!
//! A [`KeyPath`] is an ordered sequence of keys. The first key applies at the
//! outermost level, the last one at the innermost. A single key converts into
//! a one-element path, so APIs taking `impl Into<KeyPath>` accept either.
//!
//! ```rust
//! use arraykit::{Key, KeyPath};
//!
//! let single = KeyPath::from("name");
//! let nested = KeyPath::from(["pet", "name"]);
//! let built = KeyPath::new().push("pet").push("name");
//!
//! assert_eq!(single.len(), 1);
//! assert_eq!(nested, built);
//! assert_eq!(nested.keys()[1], Key::from("name"));
//! ```

use std::fmt;

use super::Key;

/// An owned sequence of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    keys: Vec<Key>,
}

impl KeyPath {
    /// Creates an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key, returning the extended path
    pub fn push(mut self, key: impl Into<Key>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Returns the keys in order
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the path has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the first key and the remaining keys
    pub fn split_first(&self) -> Option<(&Key, &[Key])> {
        self.keys.split_first()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl From<Key> for KeyPath {
    fn from(key: Key) -> Self {
        Self { keys: vec![key] }
    }
}

impl From<&Key> for KeyPath {
    fn from(key: &Key) -> Self {
        Self::from(key.clone())
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self::from(Key::from(key))
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        Self::from(Key::from(key))
    }
}

impl From<i64> for KeyPath {
    fn from(key: i64) -> Self {
        Self::from(Key::Int(key))
    }
}

impl From<i32> for KeyPath {
    fn from(key: i32) -> Self {
        Self::from(Key::from(key))
    }
}

impl<K: Into<Key>> From<Vec<K>> for KeyPath {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for KeyPath {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key> + Clone> From<&[K]> for KeyPath {
    fn from(keys: &[K]) -> Self {
        keys.iter().cloned().collect()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
