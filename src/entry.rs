//! Cache Entry Type
//!
//! The payload stored in the recency list: a value together with the key it
//! belongs to. Carrying the key on the entry is what keeps eviction O(1) —
//! when the least recently used node is removed, its index record is deleted
//! by the key stored right there, never by scanning the index for the node.

use core::fmt;

/// A key-value pair as stored in the recency list.
///
/// The value is opaque to the cache: it is stored and returned verbatim,
/// never inspected or compared.
///
/// # Examples
///
/// ```
/// use lru_rs::entry::CacheEntry;
///
/// let entry = CacheEntry::new("user:123", 42);
/// assert_eq!(entry.key, "user:123");
/// assert_eq!(entry.value, 42);
/// ```
pub struct CacheEntry<K, V> {
    /// The cached key.
    pub key: K,
    /// The cached value.
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Consumes the entry and returns its parts.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone> Clone for CacheEntry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
