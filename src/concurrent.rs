//! Concurrent Cache Implementation
//!
//! A thread-safe wrapper around the LRU segment for shared access from many
//! threads.
//!
//! # One Lock, Held for the Whole Operation
//!
//! Every logical operation — lookup, recency relink, index mutation, and a
//! possible eviction — executes under a single `parking_lot::Mutex` acquired
//! as a scoped guard and released on every exit path. That gives two
//! guarantees a striped design cannot:
//!
//! - **Strict global LRU order**: there is exactly one recency list, so the
//!   entry evicted is always the globally least recently used one.
//! - **Linearizability**: concurrent operations behave as some total order
//!   consistent with real-time non-overlap; no caller can observe a node
//!   half-relinked.
//!
//! # Why Mutex Instead of RwLock?
//!
//! LRU requires **mutable access even for reads**: every `get()` moves the
//! accessed entry to the front of the recency list. A `RwLock` would provide
//! no benefit — every access still needs exclusive access — while costing
//! extra bookkeeping. `parking_lot::Mutex` is small and fast for exactly
//! this pattern.
//!
//! Lock hold time is bounded: no operation does anything but O(1) pointer
//! and hash work while holding the lock, and nothing ever blocks on I/O
//! inside it.
//!
//! # Example
//!
//! ```rust,ignore
//! use lru_rs::ConcurrentLruCache;
//! use core::num::NonZeroUsize;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(NonZeroUsize::new(1000).unwrap()));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.set(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```

mod lru;

pub use self::lru::ConcurrentLruCache;
