//! CLI command implementations.

mod batch;
mod lookup;
mod replace;

pub use batch::{run_batch, BatchArgs};
pub use lookup::{run_lookup, LookupArgs};
pub use replace::{run_replace, ReplaceArgs};

use std::path::Path;

use inflect::{ResolverConfig, StaticDictionary};

/// Build the resolver configuration shared by all commands.
fn resolver_config(verbose: bool, max_trim_iterations: Option<usize>) -> ResolverConfig {
    ResolverConfig::builder()
        .debug(verbose)
        .maybe_max_trim_iterations(max_trim_iterations)
        .build()
}

/// Load a JSON dictionary, or start from an empty one.
fn load_dictionary(path: Option<&Path>) -> miette::Result<StaticDictionary> {
    match path {
        Some(path) => StaticDictionary::load(path)
            .map_err(|e| miette::miette!("Cannot load dictionary: {}", e)),
        None => Ok(StaticDictionary::new()),
    }
}
