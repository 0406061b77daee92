//! Insertion-ordered object storage.
//!
//! JSON objects coming from API responses are small, so a flat vector of
//! pairs with linear lookup is the whole data structure. Duplicate keys are
//! kept; every lookup returns the first pair with a matching key.

use alloc::{collections::TryReserveError, string::String, vec::Vec};
use core::fmt;

use crate::Value;

/// An ordered list of `(key, value)` pairs backing [`Value::Object`].
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.push("a", Value::Number(1.0));
/// map.push("a", Value::Number(2.0));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("a"), Some(&Value::Number(1.0)));
/// assert_eq!(map.get_all("a").count(), 2);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// Creates an empty map without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of pairs, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a pair. Existing pairs with the same key are left in place.
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push((key.into(), value));
    }

    /// Reserves room for `additional` more pairs, reporting allocation
    /// failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns the allocator's error when the capacity cannot be obtained.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.entries.try_reserve(additional)
    }

    /// Returns the value of the first pair whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns `true` if at least one pair has the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the values of every pair whose key equals `key`, in
    /// insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterates over all pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over all keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over all values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = alloc::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
