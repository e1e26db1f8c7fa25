//! Resolver configuration.

use bon::Builder;

use crate::cache::DEFAULT_CACHE_CAPACITY;

/// Default bound on how many times the lookup window may shrink by a word.
pub const DEFAULT_MAX_TRIM_ITERATIONS: usize = 50;

/// Default reserved path whose results are gender codes rather than text.
pub const DEFAULT_GENDER_PATH: &str = "gender";

/// Characters that end the fast-lookup window (e.g. `fox(1)` or `fox[pl]`).
pub const DEFAULT_WINDOW_DELIMITERS: [char; 2] = ['(', '['];

/// Settings shared by the lookup resolver and the replace engine.
///
/// # Example
///
/// ```
/// use inflect::ResolverConfig;
///
/// let config = ResolverConfig::builder()
///     .max_trim_iterations(10)
///     .gender_path("Grammar/Gender")
///     .build();
///
/// assert_eq!(config.max_trim_iterations(), 10);
/// assert_eq!(config.cache_capacity(), 107);
/// assert!(!config.debug());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct ResolverConfig {
    /// Capacity of each of the two caches.
    #[builder(default = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// How many word-trimming steps a single lookup may take before giving up.
    #[builder(default = DEFAULT_MAX_TRIM_ITERATIONS)]
    max_trim_iterations: usize,

    /// Lookup path whose results are returned verbatim, never spliced into
    /// the surrounding subject text.
    #[builder(default = DEFAULT_GENDER_PATH.to_string())]
    gender_path: String,

    /// Characters that end the fast-lookup window.
    #[builder(default = DEFAULT_WINDOW_DELIMITERS.to_vec())]
    window_delimiters: Vec<char>,

    /// Collect per-call diagnostics and emit them through `tracing`.
    #[builder(default)]
    debug: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig::builder().build()
    }
}

impl ResolverConfig {
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    pub fn max_trim_iterations(&self) -> usize {
        self.max_trim_iterations
    }

    pub fn gender_path(&self) -> &str {
        &self.gender_path
    }

    pub fn window_delimiters(&self) -> &[char] {
        &self.window_delimiters
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Turn diagnostics on or off after construction.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }
}
