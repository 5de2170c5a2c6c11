//! Insertion-ordered set with constant-time membership and position lookup.
//!
//! The traversal keeps two of these per sort: the active path, used to
//! detect and report cycles, and the results, which fix the final order.
//! It is general enough to deduplicate any dependency list.

use std::collections::HashMap;
use std::hash::Hash;

/// A sequence of unique keys in insertion order.
///
/// Cloning produces a fully independent set; mutating the clone never
/// affects the original.
#[derive(Debug, Clone)]
pub struct OrderedSet<K> {
    items: Vec<K>,
    indexes: HashMap<K, usize>,
}

impl<K> OrderedSet<K> {
    /// Number of keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The keys as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.items
    }

    /// Iterate over the keys in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Consume the set, returning its keys in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<K> {
        self.items
    }
}

impl<K: Clone + Eq + Hash> OrderedSet<K> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            indexes: HashMap::new(),
        }
    }

    /// Create an empty set with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            indexes: HashMap::with_capacity(capacity),
        }
    }

    /// Append `key` unless it is already present.
    ///
    /// Returns `true` if the key was newly inserted.
    pub fn insert(&mut self, key: K) -> bool {
        if self.indexes.contains_key(&key) {
            return false;
        }
        self.indexes.insert(key.clone(), self.items.len());
        self.items.push(key);
        true
    }

    /// Whether `key` is in the set.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.indexes.contains_key(key)
    }

    /// Position of `key` in insertion order, or `None` if absent.
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.indexes.get(key).copied()
    }

    /// The keys from `key` through the most recent insertion.
    #[must_use]
    pub fn slice_from(&self, key: &K) -> Option<&[K]> {
        self.index_of(key).map(|index| &self.items[index..])
    }

    /// Remove and return the most recently inserted key.
    pub fn pop(&mut self) -> Option<K> {
        let key = self.items.pop()?;
        self.indexes.remove(&key);
        Some(key)
    }
}

impl<K: Clone + Eq + Hash> Default for OrderedSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Extend<K> for OrderedSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Clone + Eq + Hash> FromIterator<K> for OrderedSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K> IntoIterator for OrderedSet<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a OrderedSet<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: PartialEq> PartialEq for OrderedSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K: Eq> Eq for OrderedSet<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_new_keys() {
        let mut set = OrderedSet::new();
        assert!(set.insert("a"));
        assert!(set.insert("b"));
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_index_of() {
        let set: OrderedSet<_> = ["x", "y", "z"].into_iter().collect();
        assert_eq!(set.index_of(&"x"), Some(0));
        assert_eq!(set.index_of(&"z"), Some(2));
        assert_eq!(set.index_of(&"missing"), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: OrderedSet<_> = [1, 2].into_iter().collect();
        let mut copy = original.clone();

        copy.insert(3);
        original.insert(4);

        assert_eq!(copy.as_slice(), &[1, 2, 3]);
        assert_eq!(original.as_slice(), &[1, 2, 4]);
        assert!(!original.contains(&3));
        assert_eq!(copy.index_of(&4), None);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let set: OrderedSet<_> = ["c", "a", "b", "a", "c"].into_iter().collect();
        let keys: Vec<_> = set.iter().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
        assert_eq!(set.into_vec(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_pop_keeps_index_consistent() {
        let mut set: OrderedSet<_> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(set.pop(), Some("c"));
        assert!(!set.contains(&"c"));

        // Re-inserting takes the next free position again.
        assert!(set.insert("c"));
        assert_eq!(set.index_of(&"c"), Some(2));

        set.pop();
        set.pop();
        set.pop();
        assert!(set.is_empty());
        assert_eq!(set.pop(), None);
    }

    #[test]
    fn test_slice_from() {
        let set: OrderedSet<_> = ["a", "b", "c", "d"].into_iter().collect();
        assert_eq!(set.slice_from(&"b"), Some(&["b", "c", "d"][..]));
        assert_eq!(set.slice_from(&"q"), None);
    }

    #[test]
    fn test_deduplicates_dependency_list() {
        let mut deps = OrderedSet::with_capacity(4);
        deps.extend(["core".to_string(), "util".to_string()]);
        deps.extend(["util".to_string(), "io".to_string()]);
        let names: Vec<&str> = (&deps).into_iter().map(String::as_str).collect();
        assert_eq!(names, vec!["core", "util", "io"]);
    }
}
