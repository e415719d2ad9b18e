//! Object (key-value map) type
//!
//! - Keys are unique and always iterated in ascending byte order
//! - Persistent ordered map (`im::OrdMap`): O(1) clone, O(log n) access
//! - Ordered as a sequence of `(key, value)` pairs
//!
//! Insertion order is not retained. Two objects built from the same pairs in
//! a different order are identical in every observable way.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use std::collections::BTreeMap;

use im::OrdMap;

use crate::core::value::Value;

/// Key-sorted map from field name to value
#[derive(Debug, Clone, Default)]
pub struct Object {
    inner: OrdMap<String, Value>,
}

impl Object {
    /// Create an empty object
    pub fn new() -> Self {
        Self {
            inner: OrdMap::new(),
        }
    }

    /// Get the number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Get mutable value by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.inner.get_mut(key)
    }

    /// Check if key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Insert a pair, returning the value previously stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    /// Remove key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    /// Values in key order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    /// Consume into owned entries in key order
    pub fn into_entries(self) -> impl Iterator<Item = (String, Value)> {
        self.inner.into_iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    /// Later duplicates replace earlier ones.
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Object {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(map: BTreeMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.iter().cmp(other.inner.iter())
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Iteration is key-sorted, so this is deterministic.
        self.len().hash(state);
        for (key, value) in &self.inner {
            key.hash(state);
            value.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_sorted() {
        let mut object = Object::new();
        object.insert("b", 1_i64);
        object.insert("c", 2_i64);
        object.insert("a", 3_i64);
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_insertion_order_is_irrelevant() {
        let ba = Object::from([("b", 1_i64), ("a", 2_i64)]);
        let ab = Object::from([("a", 2_i64), ("b", 1_i64)]);
        assert_eq!(ba, ab);
        assert_eq!(ba.cmp(&ab), Ordering::Equal);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let object = Object::from([("k", 1_i64), ("k", 2_i64)]);
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("k"), Some(&Value::integer(2)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut object = Object::new();
        assert_eq!(object.insert("k", true), None);
        assert_eq!(object.insert("k", false), Some(Value::boolean(true)));
        assert_eq!(object.remove("k"), Some(Value::boolean(false)));
        assert!(object.is_empty());
    }

    #[test]
    fn test_pairwise_order() {
        let a1 = Object::from([("a", 1_i64)]);
        let a2 = Object::from([("a", 2_i64)]);
        let b0 = Object::from([("b", 0_i64)]);
        let a1_b0 = Object::from([("a", 1_i64), ("b", 0_i64)]);

        // key decides before value
        assert!(a2 < b0);
        // value decides on equal keys
        assert!(a1 < a2);
        // proper prefix first
        assert!(a1 < a1_b0);
        assert!(Object::new() < a1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Object::from([("k", "v")]);
        let mut copy = original.clone();
        *copy.get_mut("k").unwrap() = Value::integer(0);

        assert_eq!(original.get("k"), Some(&Value::string("v")));
        assert_eq!(copy.get("k"), Some(&Value::integer(0)));
    }
}
