//! Thread-shared cache handle.
//!
//! The baseline [`LruCache`](crate::LruCache) is single-threaded by
//! construction (`&mut self`, no suspension points, no I/O).
//! [`SharedLruCache`] is the mutual-exclusion discipline for sharing one
//! instance across workers: a cheaply clonable handle whose every
//! operation holds a single lock for its whole critical section. Each
//! critical section is O(1) and non-blocking, so hold times are bounded
//! and independent of cache size, and every engine invariant carries over
//! unchanged.
//!
//! Hits come back cloned (`V: Clone`) so no reference outlives the lock.
//! A poisoned lock is recovered into the inner guard: every critical
//! section leaves the structures consistent, so a panic elsewhere cannot
//! strand them mid-mutation.

use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{CacheStats, LruCache};
use crate::config::CacheConfig;
use crate::error::Result;

/// Clonable, thread-safe handle to a single locked [`LruCache`].
pub struct SharedLruCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Hash + Eq, V> std::fmt::Debug for SharedLruCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.lock() {
            Ok(cache) => f.debug_tuple("SharedLruCache").field(&*cache).finish(),
            Err(_) => f.debug_tuple("SharedLruCache").field(&"<poisoned>").finish(),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone> SharedLruCache<K, V> {
    /// Create a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity)?)),
        })
    }

    /// Create a shared cache from a validated [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(LruCache::from_config(config)?)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up `key`, promoting a hit; the value comes back cloned.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    /// Insert or update `key`; returns the evicted pair, if any.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.lock().put(key, value)
    }

    /// Remove `key`, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.lock().remove(key)
    }

    /// Evict and return the current least-recently-used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.lock().pop_lru()
    }

    /// Non-promoting read of `key`, cloned.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.lock().peek(key).cloned()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats().clone()
    }

    /// Return the accumulated counters and reset them to zero.
    pub fn take_stats(&self) -> CacheStats {
        self.lock().take_stats()
    }
}
