//! Cache Configuration
//!
//! Configuration structs have all public fields for simple instantiation:
//! no constructors or builder methods, just create the struct with every
//! field set.
//!
//! Capacity is a [`NonZeroUsize`]: a zero-capacity LRU cache has no
//! meaningful behavior (every insert would immediately evict itself), so the
//! type rules it out instead of leaving it to a runtime check.
//!
//! # Examples
//!
//! ```
//! use lru_rs::config::LruCacheConfig;
//! use lru_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: maximum number of entries the cache can hold. Fixed for the
///   cache's lifetime; there is no resizing after construction.
///
/// # Examples
///
/// ```
/// use lru_rs::config::LruCacheConfig;
/// use lru_rs::LruCache;
/// use core::num::NonZeroUsize;
///
/// let config = LruCacheConfig {
///     capacity: NonZeroUsize::new(500).unwrap(),
/// };
/// let cache: LruCache<&str, i32> = LruCache::init(config, None);
/// ```
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
