//! Bounded in-process LRU cache.

use lru::LruCache;
use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Fixed-capacity map that evicts the least recently used entry when full.
///
/// Reads through [`get`](Self::get) count as a use. [`contains`](Self::contains)
/// and [`size`](Self::size) do not touch recency.
///
/// Not synchronized: callers sharing one instance across tasks must wrap it in
/// a mutex.
#[derive(Debug)]
pub struct BoundedLruCache<K: Hash + Eq, V> {
    cache: LruCache<K, V>,
}

impl<K: Hash + Eq, V: Clone> BoundedLruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Returns a copy of the value for `key` and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.get(key).cloned()
    }

    /// Inserts or replaces `key`, making it the most recently used entry.
    ///
    /// Inserting a new key into a full cache evicts exactly one entry, the
    /// least recently used. Returns the evicted key, if any.
    pub fn set(&mut self, key: K, value: V) -> Option<K> {
        if self.cache.contains(&key) {
            self.cache.put(key, value);
            return None;
        }

        self.cache.push(key, value).map(|(evicted, _)| evicted)
    }

    /// Number of entries currently stored.
    pub fn size(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if `key` is cached, without updating its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.contains(key)
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}
