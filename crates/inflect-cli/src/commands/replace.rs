//! Implementation of the `inflect replace` command.

use inflect::{ReplaceEngine, ReplaceError, ResolverCaches};

use crate::commands::resolver_config;
use crate::output::diagnostic::RuleDiagnostic;
use crate::output::report::{print_json, print_result, CallResult};

/// Arguments for the replace command.
#[derive(Debug, clap::Args)]
pub struct ReplaceArgs {
    /// Subject text to rewrite
    #[arg(long, required = true)]
    pub subject: String,

    /// Rule of the form "old"-"new" (repeatable, tried in order)
    #[arg(short, long = "rule")]
    pub rules: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the replace command.
pub fn run_replace(args: ReplaceArgs, verbose: bool) -> miette::Result<i32> {
    let config = resolver_config(verbose, None);
    let caches = ResolverCaches::new(config.cache_capacity());
    let engine = ReplaceEngine::new(&config, &caches);

    let mut call_args = vec![args.subject];
    call_args.extend(args.rules);

    match engine.replace(&call_args, "") {
        Ok(result) => {
            if args.json {
                print_json(&CallResult {
                    function: "replace",
                    args: &call_args,
                    result: Some(&result),
                    error: None,
                });
            } else {
                print_result(&result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                print_json(&CallResult {
                    function: "replace",
                    args: &call_args,
                    result: None,
                    error: Some(e.to_string()),
                });
            } else if let ReplaceError::MalformedRule { argument } = &e {
                // Rules start after the subject.
                let position = call_args[1..]
                    .iter()
                    .position(|rule| rule == argument)
                    .map_or(1, |i| i + 1);
                let report = miette::Report::new(RuleDiagnostic::new(position, argument));
                eprintln!("{:?}", report);
            } else {
                eprintln!("Replace error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
