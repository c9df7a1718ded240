//! Concurrent LRU Cache Implementation
//!
//! The thread-safe counterpart to [`LruCache`](crate::LruCache): the same
//! segment, behind one `parking_lot::Mutex`.
//!
//! All the algorithm logic lives in the shared segment; this type only adds
//! the locking discipline. The mutex is acquired as a scoped guard at the
//! top of every method and held for the whole logical operation, so callers
//! always observe the cache between operations, never mid-relink.
//!
//! Handles into the recency list never leave the segment, and no value
//! reference escapes the lock: `get` clones the value out, and the
//! `get_with`/`get_mut_with` closures run to completion before the guard
//! drops.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::lru::LruSegment;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache with strict global recency ordering.
///
/// Safe to share across threads (`Send + Sync`); wrap it in an `Arc` for
/// shared ownership. Every operation locks the cache exclusively for its
/// O(1) duration — reads included, since a read reorders recency.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq`.
/// - `V`: Value type. `Clone` is required for `get`, which clones the value
///   out rather than holding the lock while the caller uses it.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Example
///
/// ```rust,ignore
/// use lru_rs::ConcurrentLruCache;
/// use core::num::NonZeroUsize;
/// use std::sync::Arc;
///
/// let cache = Arc::new(ConcurrentLruCache::new(NonZeroUsize::new(1000).unwrap()));
///
/// cache.set("key".to_string(), 42);
/// assert_eq!(cache.get(&"key".to_string()), Some(42));
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LruSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent LRU cache from a configuration with an
    /// optional hasher.
    ///
    /// Passing `None` uses the default hash builder.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: Mutex::new(LruSegment::with_hasher(config, hasher.unwrap_or_default())),
        }
    }

    /// Creates a new concurrent LRU cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        Self::init(LruCacheConfig { capacity: cap }, None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a concurrent LRU cache with a custom hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LruSegment::with_hasher(config, hash_builder)),
        }
    }

    /// Returns the fixed capacity of the cache.
    pub fn cap(&self) -> NonZeroUsize {
        self.segment.lock().cap()
    }

    /// Returns the number of entries currently cached.
    ///
    /// In the presence of concurrent writers the value is a snapshot; it is
    /// exact once operations quiesce.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Retrieves a value, marking the entry most recently used on a hit.
    ///
    /// Returns a **clone** of the value so the lock is not held while the
    /// caller uses it. For read-only access without cloning, use
    /// [`get_with()`](Self::get_with).
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        let mut segment = self.segment.lock();
        segment.get(key).cloned()
    }

    /// Retrieves a value and applies a function to it while holding the
    /// lock.
    ///
    /// More efficient than `get()` when the caller only needs to read from
    /// the value, as it avoids cloning. The closure must stay O(1)-cheap:
    /// it runs with the cache locked.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Get length without cloning the whole string
    /// let len = cache.get_with(&key, |value| value.len());
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        let mut segment = self.segment.lock();
        segment.get(key).map(f)
    }

    /// Retrieves a mutable reference and applies a function to it.
    ///
    /// Allows in-place modification of cached values without removing them.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Increment a counter in-place
    /// cache.get_mut_with(&"counter".to_string(), |value| *value += 1);
    /// ```
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        let mut segment = self.segment.lock();
        segment.get_mut(key).map(f)
    }

    /// Checks for a key without updating recency order.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains(key)
    }

    /// Drops all entries. The capacity is unchanged.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Inserts or overwrites a key, returning `true` if the key already
    /// existed.
    ///
    /// On overwrite the value is replaced in place and the entry becomes
    /// most recently used. On a fresh insert into a full cache, the globally
    /// least recently used entry is evicted first — lookup, relink, and
    /// eviction all happen under the one lock acquisition.
    pub fn set(&self, key: K, value: V) -> bool {
        let mut segment = self.segment.lock();
        segment.set(key, value)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let mut segment = self.segment.lock();
        segment.remove(key)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> core::fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentLruCache")
            .field("len", &self.segment.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::string::ToString;
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    fn make_cache(capacity: usize) -> ConcurrentLruCache<String, i32> {
        ConcurrentLruCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_basic_operations() {
        let cache = make_cache(100);

        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);

        assert!(!cache.set("a".to_string(), 1));
        assert!(!cache.set("b".to_string(), 2));
        assert!(!cache.set("c".to_string(), 3));

        assert_eq!(cache.len(), 3);
        assert!(!cache.is_empty());

        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"b".to_string()), Some(2));
        assert_eq!(cache.get(&"c".to_string()), Some(3));
        assert_eq!(cache.get(&"d".to_string()), None);
    }

    #[test]
    fn test_set_returns_existence() {
        let cache = make_cache(10);
        assert!(!cache.set("key".to_string(), 1));
        assert!(cache.set("key".to_string(), 2));
        assert_eq!(cache.get(&"key".to_string()), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_with() {
        let cache: ConcurrentLruCache<String, String> =
            ConcurrentLruCache::new(NonZeroUsize::new(100).unwrap());

        cache.set("key".to_string(), "hello world".to_string());

        let len = cache.get_with(&"key".to_string(), |v: &String| v.len());
        assert_eq!(len, Some(11));

        let missing = cache.get_with(&"missing".to_string(), |v: &String| v.len());
        assert_eq!(missing, None);
    }

    #[test]
    fn test_get_mut_with() {
        let cache = make_cache(100);

        cache.set("counter".to_string(), 0);
        cache.get_mut_with(&"counter".to_string(), |v: &mut i32| *v += 1);
        cache.get_mut_with(&"counter".to_string(), |v: &mut i32| *v += 1);

        assert_eq!(cache.get(&"counter".to_string()), Some(2));
    }

    #[test]
    fn test_remove() {
        let cache = make_cache(100);

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);

        assert_eq!(cache.remove(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"a".to_string()), None);
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.remove(&"nonexistent".to_string()), None);
    }

    #[test]
    fn test_clear() {
        let cache = make_cache(100);

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a".to_string()), None);
    }

    #[test]
    fn test_contains() {
        let cache = make_cache(100);
        cache.set("exists".to_string(), 1);
        assert!(cache.contains(&"exists".to_string()));
        assert!(!cache.contains(&"missing".to_string()));
    }

    #[test]
    fn test_strict_global_eviction_order() {
        let cache = make_cache(3);

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        cache.set("c".to_string(), 3);

        // touch "a" so "b" is the global LRU
        let _ = cache.get(&"a".to_string());
        cache.set("d".to_string(), 4);

        assert!(cache.contains(&"a".to_string()));
        assert!(!cache.contains(&"b".to_string()));
        assert!(cache.contains(&"c".to_string()));
        assert!(cache.contains(&"d".to_string()));
    }

    #[test]
    fn test_concurrent_access() {
        let cache: Arc<ConcurrentLruCache<String, usize>> =
            Arc::new(ConcurrentLruCache::new(NonZeroUsize::new(1000).unwrap()));
        let num_threads = 8;
        let ops_per_thread = 1000;

        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("thread_{}_key_{}", t, i);
                    cache.set(key.clone(), t * 1000 + i);
                    let _ = cache.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(!cache.is_empty());
        assert!(cache.len() <= 1000);
    }

    #[test]
    fn test_concurrent_mixed_operations() {
        let cache: Arc<ConcurrentLruCache<String, usize>> =
            Arc::new(ConcurrentLruCache::new(NonZeroUsize::new(100).unwrap()));
        let num_threads = 8;
        let ops_per_thread = 500;

        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("key_{}", i % 200);

                    match i % 4 {
                        0 => {
                            cache.set(key, i);
                        }
                        1 => {
                            let _ = cache.get(&key);
                        }
                        2 => {
                            cache.get_mut_with(&key, |v: &mut usize| *v += 1);
                        }
                        3 => {
                            let _ = cache.remove(&key);
                        }
                        _ => unreachable!(),
                    }

                    if i == 250 && t == 0 {
                        cache.clear();
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 100);
    }

    #[test]
    fn test_with_hasher() {
        let cache: ConcurrentLruCache<String, i32, _> = ConcurrentLruCache::with_hasher(
            LruCacheConfig {
                capacity: NonZeroUsize::new(100).unwrap(),
            },
            DefaultHashBuilder::default(),
        );

        cache.set("test".to_string(), 42);
        assert_eq!(cache.get(&"test".to_string()), Some(42));
    }

    #[test]
    fn test_borrowed_key_lookup() {
        let cache = make_cache(100);
        cache.set("test_key".to_string(), 42);

        let key_str = "test_key";
        assert_eq!(cache.get(key_str), Some(42));
        assert!(cache.contains(key_str));
        assert_eq!(cache.remove(key_str), Some(42));
    }

    #[test]
    fn test_metrics() {
        let cache = make_cache(100);
        cache.set("a".to_string(), 1);
        let _ = cache.get(&"a".to_string());
        let _ = cache.get(&"missing".to_string());

        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits"), Some(&1.0));
        assert_eq!(metrics.get("cache_misses"), Some(&1.0));
        assert_eq!(cache.algorithm_name(), "ConcurrentLRU");
    }
}
