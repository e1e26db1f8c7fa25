//! Bounded caches used by the template function resolvers.

mod bounded;
mod key;
mod service;

pub use bounded::{BoundedKeyedCache, DEFAULT_CACHE_CAPACITY};
pub use key::LookupCacheKey;
pub use service::{CacheStats, CompiledPattern, ResolverCaches};
