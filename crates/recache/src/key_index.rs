//! Key → entry-handle index.
//!
//! The O(1) lookup half of the cache: a hash map from key to the
//! [`EntryId`](crate::recency_list::EntryId) of the entry holding that key.
//! The index and the recency list are kept in bijection by the engine —
//! every live entry has exactly one index record and vice versa.

use std::collections::HashMap;
use std::hash::Hash;

use crate::recency_list::EntryId;

/// Mapping from key to the recency-list handle holding that key.
pub(crate) struct KeyIndex<K> {
    map: HashMap<K, EntryId>,
}

impl<K: Hash + Eq> KeyIndex<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Pure read; no recency side effect.
    pub(crate) fn lookup(&self, key: &K) -> Option<EntryId> {
        self.map.get(key).copied()
    }

    /// Record an association. The key must not already be present: `put`
    /// semantics route updates through the existing handle, never through a
    /// blind re-insert.
    pub(crate) fn insert(&mut self, key: K, id: EntryId) {
        let displaced = self.map.insert(key, id);
        debug_assert!(displaced.is_none(), "insert over a live key");
    }

    /// Delete an association. The engine only calls this for keys it has
    /// just resolved, never speculatively.
    pub(crate) fn remove(&mut self, key: &K) -> Option<EntryId> {
        self.map.remove(key)
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recency_list::RecencyList;

    #[test]
    fn lookup_roundtrip() {
        let mut list = RecencyList::with_capacity(2);
        let id = list.push_front("alpha", 1);

        let mut index = KeyIndex::with_capacity(2);
        index.insert("alpha", id);

        assert_eq!(index.lookup(&"alpha"), Some(id));
        assert_eq!(index.lookup(&"beta"), None);
        assert!(index.contains(&"alpha"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn remove_returns_the_handle() {
        let mut list = RecencyList::with_capacity(2);
        let id = list.push_front("alpha", 1);

        let mut index = KeyIndex::with_capacity(2);
        index.insert("alpha", id);

        assert_eq!(index.remove(&"alpha"), Some(id));
        assert_eq!(index.remove(&"alpha"), None);
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn clear_empties_the_index() {
        let mut list = RecencyList::with_capacity(2);
        let a = list.push_front("a", 1);
        let b = list.push_front("b", 2);

        let mut index = KeyIndex::with_capacity(2);
        index.insert("a", a);
        index.insert("b", b);
        index.clear();

        assert_eq!(index.len(), 0);
        assert!(!index.contains(&"a"));
    }
}
