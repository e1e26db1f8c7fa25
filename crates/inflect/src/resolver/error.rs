//! Error types for template function resolution.

use thiserror::Error;

/// A `replace` call that could not be carried out.
///
/// This is distinct from a call that ran but changed nothing, which returns
/// the subject unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    /// `replace` was called without even a subject.
    #[error("replace requires a subject argument")]
    NoArguments,

    /// A rule argument is not of the form `"old"-"new"`.
    #[error("malformed replace rule '{argument}': expected \"old\"-\"new\"")]
    MalformedRule { argument: String },
}

/// An error returned by the function dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Wrong number of arguments for a built-in function.
    #[error("function '{function}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        function: String,
        expected: &'static str,
        got: usize,
    },

    /// A `replace` call failed.
    #[error(transparent)]
    Replace(#[from] ReplaceError),
}
