//! Miette diagnostic wrapper for malformed replace rules.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at a bad `--rule` argument.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("malformed replace rule")]
#[diagnostic(
    code(inflect::replace::rule),
    help("rules look like \"old\"-\"new\", quotes included")
)]
pub struct RuleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("expected \"old\"-\"new\"")]
    span: SourceSpan,
}

impl RuleDiagnostic {
    /// Create a diagnostic for rule number `position` (1-based).
    pub fn new(position: usize, argument: &str) -> Self {
        RuleDiagnostic {
            src: NamedSource::new(format!("--rule #{position}"), argument.to_string()),
            span: (0, argument.len().max(1)).into(),
        }
    }
}
