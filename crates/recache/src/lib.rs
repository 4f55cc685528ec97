//! recache: bounded LRU cache engine
//!
//! A fixed-capacity key→value store with O(1) amortized lookup,
//! insertion/update, and eviction of the least-recently-used entry when
//! capacity is exceeded. Recency is defined by access: a `get` hit
//! promotes the entry to most-recently-used, so eviction always removes
//! the entry untouched for the longest time.
//!
//! # Architecture
//!
//! ```text
//! get/put ──► Cache Engine ──┬─► Key Index    (key → stable handle)
//!                            └─► Recency List (handle arena, MRU ◄─► LRU)
//! ```
//!
//! The engine keeps the two leaf structures in bijection and resolves
//! capacity overflow inside the same `put` that caused it. The recency
//! list is an arena-backed doubly linked list with sentinel head/tail
//! slots — stable integer handles instead of raw pointers, so there is no
//! aliasing and no unsafe code anywhere in the crate.
//!
//! # Modules
//!
//! - `cache`: the public engine ([`LruCache`]) and its statistics
//! - `config`: serde-friendly sizing configuration ([`CacheConfig`])
//! - `error`: error types (construction is the only fallible operation)
//! - `shared`: single-lock thread-shared handle ([`SharedLruCache`])
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod error;
mod key_index;
mod recency_list;
pub mod shared;

pub use cache::{CacheStats, LruCache};
pub use config::CacheConfig;
pub use error::{ConfigError, Error, Result};
pub use recency_list::Iter;
pub use shared::SharedLruCache;
