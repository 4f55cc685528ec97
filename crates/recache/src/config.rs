//! Cache configuration.
//!
//! A small serde-friendly struct so embedding applications can carry cache
//! sizing in their own configuration files and fail fast on invalid
//! values. [`LruCache::from_config`](crate::LruCache::from_config) routes
//! construction through [`CacheConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of entries when the embedding config omits `capacity`.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries. Fixed for the cache's lifetime.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Config with an explicit capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject configurations the cache cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
