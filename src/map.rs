//! Ordered map type for Jot objects.
//!
//! This module provides [`JotMap`], a wrapper around [`IndexMap`] that keeps
//! object members in insertion order. Order preservation is load-bearing here:
//! round-trip fidelity and the block-layout renderer both depend on members
//! coming back out in the order the document declared them.
//!
//! Re-inserting an existing key replaces the value but keeps the position of
//! the first insertion, which is also the duplicate-key policy the parser
//! relies on.
//!
//! ## Examples
//!
//! ```rust
//! use jot_format::{JotMap, JotValue};
//!
//! let mut map = JotMap::new();
//! map.insert("name".to_string(), JotValue::from("Alice"));
//! map.insert("age".to_string(), JotValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::JotValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to Jot values.
///
/// # Examples
///
/// ```rust
/// use jot_format::{JotMap, JotValue};
///
/// let mut map = JotMap::new();
/// map.insert("first".to_string(), JotValue::from(1));
/// map.insert("second".to_string(), JotValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JotMap(IndexMap<String, JotValue>);

impl JotMap {
    /// Creates an empty `JotMap`.
    #[must_use]
    pub fn new() -> Self {
        JotMap(IndexMap::new())
    }

    /// Creates an empty `JotMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JotMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::{JotMap, JotValue};
    ///
    /// let mut map = JotMap::new();
    /// assert!(map.insert("key".to_string(), JotValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), JotValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: JotValue) -> Option<JotValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JotValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut JotValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, JotValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, JotValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, JotValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, JotValue>> for JotMap {
    fn from(map: HashMap<String, JotValue>) -> Self {
        JotMap(map.into_iter().collect())
    }
}

impl From<JotMap> for HashMap<String, JotValue> {
    fn from(map: JotMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JotMap {
    type Item = (String, JotValue);
    type IntoIter = indexmap::map::IntoIter<String, JotValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JotMap {
    type Item = (&'a String, &'a JotValue);
    type IntoIter = indexmap::map::Iter<'a, String, JotValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, JotValue)> for JotMap {
    fn from_iter<T: IntoIterator<Item = (String, JotValue)>>(iter: T) -> Self {
        JotMap(IndexMap::from_iter(iter))
    }
}
