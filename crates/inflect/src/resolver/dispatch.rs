//! Routing of template function calls.

use crate::cache::ResolverCaches;
use crate::dictionary::{Dictionary, FunctionFallback};
use crate::resolver::{LookupResolver, ReplaceEngine, ResolveError, ResolverConfig};

/// Name of the dictionary lookup function.
pub const LOOKUP_FUNCTION: &str = "lookup";

/// Name of the rule-based replace function.
pub const REPLACE_FUNCTION: &str = "replace";

/// Entry point for a host's template parser.
///
/// `lookup` and `replace` are handled here; any other function name goes to
/// the host's fallback unchanged.
///
/// # Example
///
/// ```
/// use inflect::{FunctionDispatcher, ResolverCaches, ResolverConfig, StaticDictionary};
///
/// let mut dictionary = StaticDictionary::new();
/// dictionary.insert("nouns/gen", "fox", ["fox's"]);
///
/// let config = ResolverConfig::default();
/// let caches = ResolverCaches::new(config.cache_capacity());
/// let fallback = |name: &str, _: &[String], _: &str| format!("<{name}>");
/// let dispatcher = FunctionDispatcher::new(&config, &caches, &dictionary, &fallback);
///
/// let mut args = vec!["fox(1)".to_string(), "nouns/gen".to_string()];
/// assert_eq!(dispatcher.call("lookup", &mut args, "").unwrap(), "fox's(1)");
/// assert_eq!(dispatcher.call("upper", &mut [], "").unwrap(), "<upper>");
/// ```
pub struct FunctionDispatcher<'a> {
    lookup: LookupResolver<'a>,
    replace: ReplaceEngine<'a>,
    fallback: &'a dyn FunctionFallback,
}

impl<'a> FunctionDispatcher<'a> {
    pub fn new(
        config: &'a ResolverConfig,
        caches: &'a ResolverCaches,
        dictionary: &'a dyn Dictionary,
        fallback: &'a dyn FunctionFallback,
    ) -> Self {
        Self {
            lookup: LookupResolver::new(config, caches, dictionary),
            replace: ReplaceEngine::new(config, caches),
            fallback,
        }
    }

    /// Resolve one function call.
    ///
    /// `args` may be modified: `lookup` normalizes its path argument in place.
    pub fn call(
        &self,
        name: &str,
        args: &mut [String],
        reference: &str,
    ) -> Result<String, ResolveError> {
        match name {
            LOOKUP_FUNCTION => self.lookup.resolve(args, reference),
            REPLACE_FUNCTION => Ok(self.replace.replace(args, reference)?),
            _ => Ok(self.fallback.resolve_function(name, args, reference)),
        }
    }
}
