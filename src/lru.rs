//! Least Recently Used (LRU) Cache Implementation
//!
//! A fixed-capacity cache with strict LRU eviction and O(1) operations.
//!
//! # Algorithm
//!
//! The cache keeps two structures in lock-step: a hash index from key to a
//! list handle, and a recency list ordered from most to least recently
//! touched. Every hit — read or write — moves the touched entry to the front
//! of the list. When an insert would exceed capacity, the entry at the back
//! of the list is evicted, and its index record is deleted by the key stored
//! on the evicted entry itself, so the eviction path is O(1) too.
//!
//! The invariants maintained after every operation:
//!
//! - every indexed key maps to exactly one live list node holding that key,
//!   and vice versa;
//! - `len(list) == len(index) <= capacity`;
//! - front of the list = most recently touched entry, back = least.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**: Get O(1), Set O(1), Remove O(1) — eviction
//!   included.
//! - **Space Complexity**: O(n) where n is the capacity; list slots are
//!   recycled through a free list, so the arena never outgrows capacity.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access use
//! [`ConcurrentLruCache`](crate::ConcurrentLruCache) (requires the
//! `concurrent` feature), or wrap the cache in a mutex yourself. A
//! reader/writer split is never correct here: reads mutate recency order.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{Handle, RecencyList};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LRU segment containing the actual cache algorithm.
///
/// This is shared between [`LruCache`] (single-threaded) and
/// `ConcurrentLruCache` (multi-threaded). All algorithm logic is implemented
/// here to avoid code duplication.
///
/// The `map` holds [`Handle`]s into `list`; a handle is registered exactly
/// when its node is linked, so the segment never holds a stale handle.
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: RecencyList<CacheEntry<K, V>>,
    map: HashMap<K, Handle, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let cap = config.capacity.get();
        LruSegment {
            config,
            list: RecencyList::with_capacity(cap),
            map: HashMap::with_capacity_and_hasher(cap, hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Looks up a key, touching it on a hit.
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&handle) = self.map.get(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        let moved = self.list.move_to_front(handle);
        debug_assert!(moved, "index held a stale handle");
        self.metrics.core.record_hit();
        self.list.get(handle).map(|entry| &entry.value)
    }

    /// Looks up a key for in-place mutation, touching it on a hit.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&handle) = self.map.get(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        let moved = self.list.move_to_front(handle);
        debug_assert!(moved, "index held a stale handle");
        self.metrics.core.record_hit();
        self.list.get_mut(handle).map(|entry| &mut entry.value)
    }

    /// Inserts or overwrites a key.
    ///
    /// Returns `true` when the key already existed: its value is replaced in
    /// place and the entry becomes most recently used. Returns `false` for a
    /// fresh insert, evicting the least recently used entry first if the
    /// cache is full.
    pub(crate) fn set(&mut self, key: K, value: V) -> bool
    where
        K: Clone,
    {
        if let Some(&handle) = self.map.get(&key) {
            let moved = self.list.move_to_front(handle);
            debug_assert!(moved, "index held a stale handle");
            if let Some(entry) = self.list.get_mut(handle) {
                entry.value = value;
            }
            self.metrics.core.record_update();
            return true;
        }

        if self.map.len() == self.cap().get() {
            if let Some(back) = self.list.back() {
                if let Some(evicted) = self.list.remove(back) {
                    // the entry carries its key: delete the index record
                    // directly, no scan
                    self.map.remove(&evicted.key);
                    self.metrics.core.record_eviction();
                }
            }
        }

        let handle = self.list.push_front(CacheEntry::new(key.clone(), value));
        self.map.insert(key, handle);
        self.metrics.core.record_insertion();
        debug_assert_eq!(self.map.len(), self.list.len());
        false
    }

    /// Removes a key, returning its value if it was present.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.remove(key)?;
        let entry = self.list.remove(handle);
        debug_assert!(entry.is_some(), "index held a stale handle");
        entry.map(|e| e.value)
    }

    /// Existence check without a recency touch.
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// The most recently used entry, without touching it.
    pub(crate) fn peek_front(&self) -> Option<(&K, &V)> {
        let handle = self.list.front()?;
        self.list.get(handle).map(|e| (&e.key, &e.value))
    }

    /// The least recently used entry — the next eviction candidate — without
    /// touching it.
    pub(crate) fn peek_back(&self) -> Option<(&K, &V)> {
        let handle = self.list.back()?;
        self.list.get(handle).map(|e| (&e.key, &e.value))
    }

    /// Drops all entries; capacity is unchanged.
    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

impl<K, V, S> core::fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for inserting,
/// retrieving, and updating entries. When the cache reaches capacity, the
/// least recently used entry is evicted to make room for new entries. Both
/// reads and writes count as uses.
///
/// "Not found" and "already existed" are ordinary outcomes carried in the
/// return values; no operation fails.
///
/// # Examples
///
/// ```
/// use lru_rs::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// assert!(!cache.set("apple", 1));
/// assert!(!cache.set("banana", 2));
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.set("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    segment: LruSegment<K, V, S>,
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// Passing `None` uses the default hash builder.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: LruSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }

    /// Creates a new LRU cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        Self::init(LruCacheConfig { capacity: cap }, None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified configuration and hash
    /// builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: LruSegment::with_hasher(config, hash_builder),
        }
    }

    /// Returns the fixed capacity of the cache.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.segment.cap()
    }

    /// Returns the number of entries currently cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Retrieves a value, marking the entry most recently used on a hit.
    ///
    /// The recency touch is the defining side effect of an LRU read: a `get`
    /// protects the entry from eviction just like a `set` does.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Retrieves a mutable reference, marking the entry most recently used
    /// on a hit.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Checks for a key without updating recency order.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains(key)
    }

    /// Returns the most recently used entry without touching it.
    #[inline]
    pub fn peek_front(&self) -> Option<(&K, &V)> {
        self.segment.peek_front()
    }

    /// Returns the least recently used entry — the next eviction candidate —
    /// without touching it.
    #[inline]
    pub fn peek_back(&self) -> Option<(&K, &V)> {
        self.segment.peek_back()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or overwrites a key, returning `true` if the key already
    /// existed.
    ///
    /// On overwrite the value is replaced in place and the entry becomes
    /// most recently used; the cache size is unchanged. On a fresh insert
    /// into a full cache, the least recently used entry is evicted first.
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> bool {
        self.segment.set(key, value)
    }

    /// Removes a key, returning its value if it was present.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Drops all entries. The capacity is unchanged and the cache behaves as
    /// freshly constructed afterwards.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}
