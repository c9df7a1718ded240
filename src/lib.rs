#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LruCache`] | Single-threaded strict-LRU cache |
//! | [`ConcurrentLruCache`] | Thread-safe wrapper, one mutex per cache (requires `concurrent`) |
//!
//! ## Semantics at a Glance
//!
//! | Operation | Returns | Recency touch | Can evict |
//! |-----------|---------|---------------|-----------|
//! | `set`     | `bool` (key existed) | yes | yes |
//! | `get`     | `Option<&V>` / `Option<V>` | yes | no |
//! | `get_mut` | `Option<&mut V>` | yes | no |
//! | `remove`  | `Option<V>` | n/a | no |
//! | `contains`| `bool` | **no** | no |
//! | `clear`   | `()` | n/a | no |
//!
//! Every operation completes in O(1); none of them can fail. "Not found"
//! and "already existed" are outcomes carried in the return values, never
//! errors.
//!
//! ## Example
//!
//! ```rust
//! use lru_rs::LruCache;
//! use lru_rs::config::LruCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(2).unwrap(),
//! };
//! let mut cache = LruCache::init(config, None);
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.set("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration structure for cache construction
//! - [`entry`]: The key-value payload type stored in the recency list
//! - [`metrics`]: Operation counters behind the `CacheMetrics` trait
//! - [`concurrent`]: Thread-safe cache (requires the `concurrent` feature)

#![no_std]

/// Cache entry type.
///
/// A `CacheEntry<K, V>` couples a value with the key it is stored under,
/// which is what lets eviction delete the index record without scanning.
pub mod entry;

/// Recency-ordered list used as the eviction queue.
///
/// An arena-backed doubly linked list addressed by generation-checked
/// handles. O(1) insert-front, move-to-front, remove-any, and peeks at
/// either end, with no unsafe code.
///
/// **Note**: This module is internal infrastructure; handles must stay in
/// lock-step with the key index, which only the cache itself can guarantee.
/// Use the high-level cache types instead.
pub(crate) mod list;

/// Cache configuration structure.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-capacity cache that evicts the least recently used
/// entry when the capacity is reached. Reads count as uses.
pub mod lru;

/// Cache metrics system.
///
/// Passive operation counters (hits, misses, insertions, evictions) exposed
/// through a common `CacheMetrics` trait with deterministic reporting order.
pub mod metrics;

/// Concurrent cache implementation.
///
/// A thread-safe LRU cache serializing whole logical operations behind a
/// single `parking_lot::Mutex`, preserving strict global recency order and
/// linearizability.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export cache types
pub use lru::LruCache;

// Re-export entry type
pub use entry::CacheEntry;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
