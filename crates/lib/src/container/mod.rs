//! Ordered key-value containers.
//!
//! [`Container`] is the universal data structure of this crate: an ordered,
//! key-unique mapping from [`Key`] to [`Value`]. Values may themselves be
//! containers, which makes arbitrary nesting possible.
//!
//! # Ordering
//!
//! Iteration follows insertion order. Overwriting an existing key keeps the
//! key's original position; removing a key shifts the following entries up.
//!
//! # Positional append
//!
//! Every container tracks its next free integer index. It starts at 0 and
//! moves past every integer key inserted, so [`Container::push`] never lands
//! on an existing integer key:
//!
//! ```
//! use arraykit::{Container, Key};
//!
//! let mut c = Container::new();
//! c.insert(5, "five");
//! c.insert("name", "x");
//! assert_eq!(c.push("six"), Some(Key::Int(6)));
//! ```

use std::fmt;

use indexmap::IndexMap;

// Submodules
pub mod key;
pub mod path;
pub mod value;

pub use key::Key;
pub use path::KeyPath;
pub use value::Value;

/// An ordered mapping from keys to values.
///
/// # Examples
///
/// ```
/// use arraykit::{Container, container};
///
/// let pets = container! {
///     "alice" => container! { "pet" => "cat" },
///     "ben" => container! { "pet" => "goldfish" },
/// };
///
/// assert_eq!(pets.len(), 2);
/// assert!(pets.contains_key("alice"));
///
/// let ids = container![1234, 5678];
/// assert_eq!(ids.get(1).and_then(|v| v.as_int()), Some(5678));
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    /// Entries in insertion order
    entries: IndexMap<Key, Value>,
    /// Next integer key used by `push`; `None` once `i64::MAX` is taken
    next_index: Option<i64>,
}

impl Container {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Creates a sequentially indexed container (`0..n`) from values
    pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        let mut container = Self::new();
        for value in values {
            container.push(value);
        }
        container
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the key the next [`Container::push`] would use
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    /// Gets a value by key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Gets a nested container by key
    pub fn get_container(&self, key: impl Into<Key>) -> Option<&Container> {
        self.get(key)?.as_container()
    }

    /// Returns true if the container has an entry for the key
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Returns true if any entry holds a value [loosely equal](Value::loose_eq) to `value`
    pub fn contains_value(&self, value: &Value) -> bool {
        self.entries.values().any(|v| v.loose_eq(value))
    }

    /// Compares as unordered key/value maps, using [`Value::loose_eq`] on values.
    ///
    /// `==` on containers is order-sensitive and strict; this is the
    /// comparison the set operations use.
    pub fn loose_eq(&self, other: &Container) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| {
                other
                    .entries
                    .get(key)
                    .is_some_and(|theirs| value.loose_eq(theirs))
            })
    }

    /// Sets the value for a key, returning the previous value if present.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Int(n) = key {
            self.advance_past(n);
        }
        self.entries.insert(key, value.into())
    }

    /// Appends a value at the next free integer index.
    ///
    /// Returns the key used, or `None` if the integer key space is exhausted
    /// (`i64::MAX` is already taken), in which case nothing is inserted.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let index = self.next_index?;
        self.insert(index, value);
        Some(Key::Int(index))
    }

    /// Removes an entry, preserving the order of the remaining entries.
    ///
    /// The next free index is not rewound.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Returns an iterator over key-value pairs in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns an iterator over keys in order
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over values in order
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Parses a container from JSON.
    ///
    /// Objects keep their key order; arrays become sequential containers.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the container to JSON
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn advance_past(&mut self, n: i64) {
        if let Some(next) = self.next_index
            && n >= next
        {
            self.next_index = n.checked_add(1);
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality is structural and order-sensitive.
impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl FromIterator<Value> for Container {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Container::list(iter)
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as a map; deserialized from a map or a sequence
impl serde::Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Container {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};

        struct ContainerVisitor;

        impl<'de> Visitor<'de> for ContainerVisitor {
            type Value = Container;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map or a sequence")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut container = Container::new();
                while let Some((key, value)) = map.next_entry::<Key, Value>()? {
                    container.insert(key, value);
                }
                Ok(container)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut container = Container::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    container.push(value);
                }
                Ok(container)
            }
        }

        deserializer.deserialize_any(ContainerVisitor)
    }
}

/// Builds a [`Container`].
///
/// - `container!{}` - Empty container
/// - `container!{ "a" => 1, 7 => "x" }` - Explicit keys, in order
/// - `container![1, 2, 3]` - Sequential keys `0..n`
///
/// Values are anything convertible into [`Value`], including nested
/// `container!` invocations.
///
/// ```rust
/// use arraykit::{Value, container};
///
/// let owner = container! {
///     "name" => "robert",
///     "pet" => container! { "type" => "cat", "name" => "Mr Whiskers" },
/// };
/// assert_eq!(owner.get_container("pet").and_then(|p| p.get("type")), Some(&Value::from("cat")));
///
/// let list = container!["a", "b"];
/// assert_eq!(list.next_index(), Some(2));
/// ```
#[macro_export]
macro_rules! container {
    () => {
        $crate::Container::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut container = $crate::Container::new();
        $(
            container.insert($key, $value);
        )+
        container
    }};

    ($($value:expr),+ $(,)?) => {{
        let mut container = $crate::Container::new();
        $(
            container.push($value);
        )+
        container
    }};
}
