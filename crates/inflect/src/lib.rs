//! Resolution of `lookup` and `replace` calls embedded in localized templates.
//!
//! Inflected languages need a different form of a noun or adjective
//! depending on its role in a sentence. Templates express this with calls
//! such as `lookup(the big red fox(1), nouns/genitive)` or
//! `replace(лиса, "а"-"у")`. The host parses those calls out of its templates
//! and hands them to a [`FunctionDispatcher`], which resolves them against
//! the host's [`Dictionary`] and caches the outcome.

pub mod cache;
pub mod dictionary;
pub mod resolver;
pub mod scanner;

pub use cache::{BoundedKeyedCache, CacheStats, CompiledPattern, LookupCacheKey, ResolverCaches};
pub use dictionary::{Dictionary, DictionaryError, FunctionFallback, StaticDictionary};
pub use resolver::{
    FunctionDispatcher, LookupResolver, ReplaceEngine, ReplaceError, ReplaceRule, ResolveError,
    ResolverConfig,
};

/// Creates a `Vec<String>` of function arguments.
///
/// # Example
///
/// ```
/// use inflect::args;
///
/// let a = args!["fox", "nouns/gen", 2];
/// assert_eq!(a, vec!["fox".to_string(), "nouns/gen".to_string(), "2".to_string()]);
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    [ $($arg:expr),+ $(,)? ] => {
        ::std::vec![$(::std::string::ToString::to_string(&$arg)),+]
    };
}
