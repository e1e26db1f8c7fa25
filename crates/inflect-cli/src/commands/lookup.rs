//! Implementation of the `inflect lookup` command.

use std::path::PathBuf;

use inflect::{LookupResolver, ResolverCaches};

use crate::commands::{load_dictionary, resolver_config};
use crate::output::report::{print_error, print_json, print_result, CallResult};

/// Arguments for the lookup command.
#[derive(Debug, clap::Args)]
pub struct LookupArgs {
    /// Dictionary file (JSON: { "path": { "subject": ["form", ...] } })
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Subject text, e.g. "the big red fox(1)"
    #[arg(long, required = true)]
    pub subject: String,

    /// Dictionary path, e.g. nouns/genitive
    #[arg(long, required = true)]
    pub path: String,

    /// Form index (defaults to 1; non-integers become -1)
    #[arg(long)]
    pub index: Option<String>,

    /// Maximum number of word-trimming steps
    #[arg(long, env = "INFLECT_MAX_TRIM_ITERATIONS")]
    pub max_trim_iterations: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs, verbose: bool) -> miette::Result<i32> {
    let dictionary = load_dictionary(args.dictionary.as_deref())?;
    let config = resolver_config(verbose, args.max_trim_iterations);
    let caches = ResolverCaches::new(config.cache_capacity());
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    let mut call_args = vec![args.subject, args.path];
    call_args.extend(args.index);

    match resolver.resolve(&mut call_args, "") {
        Ok(result) => {
            if args.json {
                print_json(&CallResult {
                    function: "lookup",
                    args: &call_args,
                    result: Some(&result),
                    error: None,
                });
            } else {
                print_result(&result);
            }
            Ok(if result.is_empty() {
                exitcode::DATAERR
            } else {
                exitcode::OK
            })
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(exitcode::USAGE)
        }
    }
}
