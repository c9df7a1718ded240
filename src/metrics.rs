//! Cache Metrics System
//!
//! Passive operation counters for cache instances, reported through the
//! [`CacheMetrics`] trait as a `BTreeMap` of named values.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap keeps the reported metrics in a deterministic order, which makes
//! test assertions, log output, and exported snapshots reproducible. With a
//! handful of keys the O(log n) lookup cost is irrelevant.
//!
//! Metrics never influence cache behavior; they only observe it.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters common to any cache algorithm.
///
/// All counters are monotonic and count operations, not bytes: this cache is
/// bounded by entry count, so byte accounting has nothing to attach to.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`) made against the cache.
    pub requests: u64,

    /// Lookups that found their key.
    pub cache_hits: u64,

    /// Entries newly inserted by `set`.
    pub insertions: u64,

    /// `set` calls that overwrote an existing key in place.
    pub updates: u64,

    /// Entries evicted to make room for an insert.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that missed.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a newly inserted entry.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an in-place overwrite of an existing entry.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an eviction of the least recently used entry.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Fraction of lookups that hit, in `0.0..=1.0`; `0.0` before any
    /// lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, in `0.0..=1.0`; `0.0` before any
    /// lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// LRU-specific metrics (extends [`CoreCacheMetrics`]).
///
/// LRU tracks only the core counters today; the wrapper keeps the reporting
/// shape uniform should recency-specific metrics be added later.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache algorithms.
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates a zeroed metrics set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

/// Uniform metrics-reporting interface for cache implementations.
///
/// The BTreeMap return type guarantees deterministic key ordering, which is
/// what test assertions and metric exporters rely on.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = CoreCacheMetrics::new();
        assert_eq!(metrics.requests, 0);
        assert_eq!(metrics.cache_hits, 0);
        assert_eq!(metrics.evictions, 0);
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.miss_rate(), 0.0);
    }

    #[test]
    fn test_hit_and_miss_rates() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        assert_eq!(metrics.requests, 4);
        assert_eq!(metrics.cache_hits, 3);
        assert_eq!(metrics.hit_rate(), 0.75);
        assert_eq!(metrics.miss_rate(), 0.25);
    }

    #[test]
    fn test_to_btreemap_is_complete() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_insertion();
        metrics.record_update();
        metrics.record_eviction();
        metrics.record_hit();
        metrics.record_miss();

        let map = metrics.to_btreemap();
        assert_eq!(map.get("insertions"), Some(&1.0));
        assert_eq!(map.get("updates"), Some(&1.0));
        assert_eq!(map.get("evictions"), Some(&1.0));
        assert_eq!(map.get("cache_hits"), Some(&1.0));
        assert_eq!(map.get("cache_misses"), Some(&1.0));
        assert_eq!(map.get("requests"), Some(&2.0));
    }

    #[test]
    fn test_lru_metrics_trait() {
        let metrics = LruCacheMetrics::new();
        assert_eq!(metrics.algorithm_name(), "LRU");
        assert!(metrics.metrics().contains_key("hit_rate"));
    }
}
