//! inflect CLI entry point.
//!
//! Provides command-line tools for exercising template function resolution:
//! - `inflect lookup` - Resolve one `lookup` call against a dictionary file
//! - `inflect replace` - Apply `"old"-"new"` rules to a subject
//! - `inflect batch` - Resolve a file of calls through one shared cache

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_batch, run_lookup, run_replace, BatchArgs, LookupArgs, ReplaceArgs};
use tracing_subscriber::EnvFilter;

/// Template function resolution tools.
#[derive(Debug, Parser)]
#[command(name = "inflect")]
#[command(about = "Resolve lookup() and replace() template functions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log resolver diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a single lookup call
    Lookup(LookupArgs),
    /// Apply replace rules to a subject
    Replace(ReplaceArgs),
    /// Resolve a JSON file of function calls with a shared cache
    Batch(BatchArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send resolver diagnostics to stderr. `RUST_LOG` overrides the level.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "inflect=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Lookup(args) => run_lookup(args, cli.verbose),
        Commands::Replace(args) => run_replace(args, cli.verbose),
        Commands::Batch(args) => run_batch(args, cli.verbose),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
