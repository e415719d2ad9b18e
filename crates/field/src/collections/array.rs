//! Array (ordered sequence) type
//!
//! - Persistent vector (`im::Vector`): O(1) clone, copy-on-write mutation
//! - Lexicographic ordering over elements, a proper prefix sorts first

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use im::Vector;

use crate::core::value::Value;

/// Ordered sequence of values.
///
/// Clones never share mutable state: the first write through any copy
/// detaches the touched chunk, so mutating one copy is invisible to others.
#[derive(Debug, Clone, Default)]
pub struct Array {
    inner: Vector<Value>,
}

impl Array {
    /// Create an empty array
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get element by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    /// Get mutable element by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.inner.get_mut(index)
    }

    /// Append an element
    pub fn push(&mut self, value: impl Into<Value>) {
        self.inner.push_back(value.into());
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<Value> {
        self.inner.pop_back()
    }

    /// Insert at `index`, shifting later elements.
    ///
    /// Panics if `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        self.inner.insert(index, value.into());
    }

    /// Remove the element at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.len()).then(|| self.inner.remove(index))
    }

    pub fn first(&self) -> Option<&Value> {
        self.inner.front()
    }

    pub fn last(&self) -> Option<&Value> {
        self.inner.back()
    }

    /// Iterate over elements in order
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.inner.iter()
    }

    /// Copy into a `Vec`
    pub fn to_vec(&self) -> Vec<Value> {
        self.inner.iter().cloned().collect()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl Ord for Array {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.iter().cmp(other.inner.iter())
    }
}

impl PartialOrd for Array {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Array {}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in &self.inner {
            item.hash(state);
        }
    }
}
