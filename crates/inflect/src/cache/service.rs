//! The cache service shared by the lookup resolver and the replace engine.

use std::cell::{Cell, RefCell};

use regex::Regex;
use serde::Serialize;

use crate::cache::{BoundedKeyedCache, DEFAULT_CACHE_CAPACITY, LookupCacheKey};

/// Outcome of trying to turn a replace rule's `old` text into a pattern.
///
/// `NoPattern` is a cached answer ("already tried, nothing usable"), which is
/// different from the text being absent from the pattern cache.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// A case-insensitive compiled pattern.
    Compiled(Regex),
    /// The text has no pattern metacharacters or failed to compile.
    NoPattern,
}

impl CompiledPattern {
    /// Get the compiled regex, if there is one.
    pub fn as_regex(&self) -> Option<&Regex> {
        match self {
            CompiledPattern::Compiled(regex) => Some(regex),
            CompiledPattern::NoPattern => None,
        }
    }
}

/// Snapshot of cache activity counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// `lookup` calls answered from the cache.
    pub lookup_hits: u64,
    /// `lookup` calls that had to run the resolution algorithm.
    pub lookup_misses: u64,
    /// Entries pushed out of either cache.
    pub evictions: u64,
    /// Times a replace rule's `old` text was handed to the regex compiler.
    pub pattern_compilations: u64,
}

impl CacheStats {
    /// Fraction of `lookup` calls served from the cache (0.0 to 1.0).
    pub fn lookup_hit_ratio(&self) -> f64 {
        let total = self.lookup_hits + self.lookup_misses;
        if total == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / total as f64
        }
    }
}

/// Owns the lookup cache and the replace-pattern cache.
///
/// Construct one at startup and hand it by reference to the resolvers. The
/// caches use `RefCell`, so this type is not `Sync`: all access is confined
/// to the thread that owns it, which keeps the FIFO ring consistent.
#[derive(Debug)]
pub struct ResolverCaches {
    lookups: RefCell<BoundedKeyedCache<LookupCacheKey, String>>,
    patterns: RefCell<BoundedKeyedCache<String, CompiledPattern>>,
    lookup_hits: Cell<u64>,
    lookup_misses: Cell<u64>,
    evictions: Cell<u64>,
    pattern_compilations: Cell<u64>,
}

impl Default for ResolverCaches {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ResolverCaches {
    /// Create both caches with the same capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            lookups: RefCell::new(BoundedKeyedCache::new(capacity)),
            patterns: RefCell::new(BoundedKeyedCache::new(capacity)),
            lookup_hits: Cell::new(0),
            lookup_misses: Cell::new(0),
            evictions: Cell::new(0),
            pattern_compilations: Cell::new(0),
        }
    }

    /// Get a previously resolved `lookup` result.
    pub fn cached_lookup(&self, key: &LookupCacheKey) -> Option<String> {
        let hit = self.lookups.borrow().get(key).cloned();
        let counter = if hit.is_some() {
            &self.lookup_hits
        } else {
            &self.lookup_misses
        };
        counter.set(counter.get() + 1);
        hit
    }

    /// Record the final outcome of a `lookup` call, successful or not.
    pub fn store_lookup(&self, key: LookupCacheKey, value: String) {
        if self.lookups.borrow_mut().put(key, value).is_some() {
            self.record_eviction();
        }
    }

    /// Get the cached compilation outcome for a pattern text.
    pub fn cached_pattern(&self, text: &str) -> Option<CompiledPattern> {
        self.patterns.borrow().get(text).cloned()
    }

    /// Record the compilation outcome for a pattern text.
    pub fn store_pattern(&self, text: impl Into<String>, pattern: CompiledPattern) {
        if self.patterns.borrow_mut().put(text.into(), pattern).is_some() {
            self.record_eviction();
        }
    }

    /// Note that a pattern text was handed to the regex compiler.
    pub(crate) fn record_pattern_compilation(&self) {
        self.pattern_compilations
            .set(self.pattern_compilations.get() + 1);
    }

    fn record_eviction(&self) {
        self.evictions.set(self.evictions.get() + 1);
    }

    /// Number of entries in the lookup cache.
    pub fn lookup_len(&self) -> usize {
        self.lookups.borrow().len()
    }

    /// Number of entries in the pattern cache.
    pub fn pattern_len(&self) -> usize {
        self.patterns.borrow().len()
    }

    /// Current activity counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            lookup_hits: self.lookup_hits.get(),
            lookup_misses: self.lookup_misses.get(),
            evictions: self.evictions.get(),
            pattern_compilations: self.pattern_compilations.get(),
        }
    }
}
