//! Bounded LRU cache engine with O(1) operations.
//!
//! Composes the two leaf structures — the key index for key→handle lookup
//! and the recency list for ordering — and enforces the capacity
//! invariant: `len() <= capacity()` after every completed operation, with
//! overflow resolved by evicting the least-recently-used entry inside the
//! same `put` that caused it.
//!
//! `get` is deliberately a `&mut self` operation: LRU recency is defined
//! by access, so a hit promotes the entry to most-recently-used. It is the
//! only operation that changes order without changing membership. Use
//! [`LruCache::peek`] for an order-preserving read.
//!
//! # Example
//!
//! ```
//! use recache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! assert_eq!(cache.get(&"a"), Some(&1));
//! // "a" is now most-recently used, so inserting a third entry evicts "b".
//! let evicted = cache.put("c", 3);
//! assert_eq!(evicted, Some(("b", 2)));
//! # Ok::<(), recache::Error>(())
//! ```

use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::error::{ConfigError, Result};
use crate::key_index::KeyIndex;
use crate::recency_list::{Iter, RecencyList};

/// Cache hit/miss/eviction counters.
///
/// Serializable so embedding applications can export them alongside their
/// own telemetry. Non-promoting reads (`peek`, `contains_key`, iteration)
/// never touch the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub updates: u64,
    pub evictions: u64,
    pub removals: u64,
}

impl CacheStats {
    /// Hit rate as a fraction in `[0.0, 1.0]`; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    /// Total `get` calls (hits + misses).
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Fixed-capacity key-value store evicting the least-recently-used entry
/// on overflow.
///
/// Keys need `Hash + Eq + Clone` (one clone per insertion, shared between
/// the index and the recency list); values are unconstrained.
pub struct LruCache<K, V> {
    capacity: usize,
    index: KeyIndex<K>,
    list: RecencyList<K, V>,
    stats: CacheStats,
}

impl<K: Hash + Eq, V> std::fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// The capacity is fixed for the cache's lifetime. A zero capacity is
    /// a configuration error: no partial cache is returned.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity.into());
        }
        debug!(capacity, "lru cache created");
        Ok(Self {
            capacity,
            index: KeyIndex::with_capacity(capacity),
            list: RecencyList::with_capacity(capacity),
            stats: CacheStats::default(),
        })
    }

    /// Create a cache from a validated [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Look up `key`, promoting a hit to most-recently-used.
    ///
    /// A miss is a normal outcome (`None`), not an error, and leaves the
    /// cache untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(id) = self.index.lookup(key) {
            self.list.move_to_front(id);
            self.stats.hits += 1;
            Some(&self.list.entry(id).value)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Mutable sibling of [`get`](Self::get); promotes on hit.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        if let Some(id) = self.index.lookup(key) {
            self.list.move_to_front(id);
            self.stats.hits += 1;
            Some(&mut self.list.entry_mut(id).value)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Read `key` without promoting it. Does not count as a lookup.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.lookup(key).map(|id| &self.list.entry(id).value)
    }

    /// Whether `key` is present. Never alters recency order.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Insert or update `key`.
    ///
    /// An existing key has its value replaced in place and is promoted to
    /// most-recently-used; membership does not grow, so no eviction check
    /// runs. A new key is inserted at the most-recently-used position,
    /// evicting the entry adjacent to the tail sentinel first when the
    /// cache is full — at most one eviction per call. The evicted pair, if
    /// any, is handed back to the caller.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(id) = self.index.lookup(&key) {
            self.list.entry_mut(id).value = value;
            self.list.move_to_front(id);
            self.stats.updates += 1;
            return None;
        }

        let evicted = if self.index.len() == self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let id = self.list.push_front(key.clone(), value);
        self.index.insert(key, id);
        self.stats.insertions += 1;
        debug_assert_eq!(self.index.len(), self.list.len(), "index/list bijection");
        evicted
    }

    /// Remove `key`, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let entry = self.list.unlink(id);
        self.stats.removals += 1;
        Some(entry.value)
    }

    /// Evict and return the current least-recently-used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        self.evict_lru()
    }

    /// The eviction candidate, without removing or promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.lru().map(|id| {
            let entry = self.list.entry(id);
            (&entry.key, &entry.value)
        })
    }

    /// The most-recently-used entry, without promoting it.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.list.mru().map(|id| {
            let entry = self.list.entry(id);
            (&entry.key, &entry.value)
        })
    }

    /// Drop all entries. Statistics are kept; see [`take_stats`](Self::take_stats).
    pub fn clear(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.list.clear();
        debug!(dropped, "lru cache cleared");
    }

    /// Iterate entries in recency order, most-recently-used first.
    /// Double-ended: `.rev()` walks least-recently-used first. Read-only;
    /// never alters recency order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.list.iter()
    }

    /// Counters accumulated since construction or the last
    /// [`take_stats`](Self::take_stats).
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Return the accumulated counters and reset them to zero.
    pub fn take_stats(&mut self) -> CacheStats {
        std::mem::take(&mut self.stats)
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let id = self.list.lru()?;
        let entry = self.list.unlink(id);
        self.index.remove(&entry.key);
        self.stats.evictions += 1;
        trace!(
            len = self.index.len(),
            capacity = self.capacity,
            "evicted least-recently-used entry"
        );
        Some((entry.key, entry.value))
    }

    #[cfg(test)]
    pub(crate) fn arena_len(&self) -> usize {
        self.list.arena_len()
    }
}
