//! Fixed-capacity FIFO cache.
//!
//! Entries live in a hash map; eviction order is tracked by a ring of keys
//! with a circular delete cursor. Reads never touch the ring, so an entry
//! that is read often is evicted exactly as early as one that is never read.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

use ahash::RandomState;

/// Default capacity for both resolver caches.
///
/// A prime so the backing hash table is sized well; nothing depends on the
/// exact value.
pub const DEFAULT_CACHE_CAPACITY: usize = 107;

/// A bounded cache that evicts strictly in insertion order.
///
/// Values may themselves encode "no result" (for example `Option<T>` or a
/// dedicated enum variant), which lets callers cache known failures.
///
/// # Example
///
/// ```
/// use inflect::BoundedKeyedCache;
///
/// let mut cache = BoundedKeyedCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // Reading "a" does not protect it: it was written first, so it goes first.
/// cache.put("c", 3);
/// assert_eq!(cache.get(&"a"), None);
/// assert_eq!(cache.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedKeyedCache<K, V> {
    map: HashMap<K, V, RandomState>,
    /// Keys in write order. Grows until it reaches `capacity`, after which
    /// slots are overwritten in place.
    ring: Vec<K>,
    /// Slot holding the oldest key once the ring is full.
    delete_cursor: usize,
    capacity: usize,
}

impl<K, V> BoundedKeyedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be greater than 0");

        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            ring: Vec::with_capacity(capacity),
            delete_cursor: 0,
            capacity,
        }
    }

    /// Returns the cached value for `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Returns true if `key` is currently held.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Inserts a mapping, evicting the earliest-written entry when full.
    ///
    /// Returns the evicted key, if an eviction happened. Putting a key that
    /// is already held replaces its value in place and keeps its position in
    /// the eviction order.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Some(existing) = self.map.get_mut(&key) {
            *existing = value;
            return None;
        }

        if self.ring.len() < self.capacity {
            self.ring.push(key.clone());
            self.map.insert(key, value);
            return None;
        }

        let evicted = mem::replace(&mut self.ring[self.delete_cursor], key.clone());
        self.map.remove(&evicted);
        self.delete_cursor = (self.delete_cursor + 1) % self.capacity;
        self.map.insert(key, value);
        Some(evicted)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
