//! Implementation of the `inflect batch` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use inflect::{CacheStats, FunctionDispatcher, ResolverCaches};
use serde::{Deserialize, Serialize};

use crate::commands::{load_dictionary, resolver_config};
use crate::output::report::{print_error, print_json, print_result, CallResult};
use crate::output::table::format_stats_table;

/// Arguments for the batch command.
#[derive(Debug, clap::Args)]
pub struct BatchArgs {
    /// File with calls: [{ "function": "lookup", "args": ["fox(1)", "nouns/gen"] }, ...]
    pub calls: PathBuf,

    /// Dictionary file (JSON: { "path": { "subject": ["form", ...] } })
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Maximum number of word-trimming steps
    #[arg(long, env = "INFLECT_MAX_TRIM_ITERATIONS")]
    pub max_trim_iterations: Option<usize>,

    /// Print cache statistics after resolving all calls
    #[arg(long)]
    pub stats: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One template function call from the calls file.
#[derive(Debug, Deserialize)]
pub struct BatchCall {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Template the call came from, passed through to the dictionary.
    #[serde(default)]
    pub reference: String,
}

/// JSON output for the whole batch.
#[derive(Serialize)]
struct BatchOutput<'a> {
    results: Vec<CallResult<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<CacheStats>,
}

/// Functions other than lookup/replace are echoed back as written.
fn echo_function(name: &str, args: &[String], _reference: &str) -> String {
    format!("{name}({})", args.join(", "))
}

/// Run the batch command.
pub fn run_batch(args: BatchArgs, verbose: bool) -> miette::Result<i32> {
    let content = read_to_string(&args.calls).map_err(|e| {
        miette::miette!("Cannot read calls file {}: {}", args.calls.display(), e)
    })?;
    let mut calls: Vec<BatchCall> = serde_json::from_str(&content)
        .map_err(|e| miette::miette!("Failed to parse calls file: {}", e))?;
    tracing::debug!("loaded {} calls from {}", calls.len(), args.calls.display());

    let dictionary = load_dictionary(args.dictionary.as_deref())?;
    let config = resolver_config(verbose, args.max_trim_iterations);
    let caches = ResolverCaches::new(config.cache_capacity());
    let dispatcher = FunctionDispatcher::new(&config, &caches, &dictionary, &echo_function);

    let outcomes: Vec<_> = calls
        .iter_mut()
        .map(|call| dispatcher.call(&call.function, &mut call.args, &call.reference))
        .collect();
    let failures = outcomes.iter().filter(|outcome| outcome.is_err()).count();

    if args.json {
        let results = calls
            .iter()
            .zip(&outcomes)
            .map(|(call, outcome)| CallResult {
                function: &call.function,
                args: &call.args,
                result: outcome.as_deref().ok(),
                error: outcome.as_ref().err().map(ToString::to_string),
            })
            .collect();
        print_json(&BatchOutput {
            results,
            stats: args.stats.then(|| caches.stats()),
        });
    } else {
        for (call, outcome) in calls.iter().zip(&outcomes) {
            match outcome {
                Ok(result) => print_result(result),
                Err(e) => print_error(&format!("{}: {}", call.function, e)),
            }
        }
        if args.stats {
            println!("{}", format_stats_table(&caches.stats()));
        }
    }

    Ok(if failures == 0 {
        exitcode::OK
    } else {
        exitcode::DATAERR
    })
}
