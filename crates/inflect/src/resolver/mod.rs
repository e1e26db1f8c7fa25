//! Resolution of the `lookup` and `replace` template functions.
//!
//! Both resolvers borrow a shared [`ResolverConfig`] and
//! [`ResolverCaches`](crate::ResolverCaches); the [`FunctionDispatcher`]
//! bundles them behind a single call-by-name entry point.

mod config;
mod diagnostics;
mod dispatch;
mod error;
mod lookup;
mod replace;
mod rule;

pub use config::{
    DEFAULT_GENDER_PATH, DEFAULT_MAX_TRIM_ITERATIONS, DEFAULT_WINDOW_DELIMITERS, ResolverConfig,
};
pub use dispatch::{FunctionDispatcher, LOOKUP_FUNCTION, REPLACE_FUNCTION};
pub use error::{ReplaceError, ResolveError};
pub use lookup::{
    DEFAULT_LOOKUP_INDEX, INVALID_LOOKUP_INDEX, LookupResolver, normalize_path, parse_lookup_index,
};
pub use replace::{PATTERN_METACHARACTERS, ReplaceEngine};
pub use rule::{ReplaceRule, parse_replace_rule};
