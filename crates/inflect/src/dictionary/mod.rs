//! Collaborator interfaces supplied by the host translation engine.

mod error;
mod static_dictionary;

pub use error::DictionaryError;
pub use static_dictionary::StaticDictionary;

/// The host's dictionary of inflected forms.
///
/// Returns the form of `subject` found under `path` (e.g. a grammatical case)
/// at position `index`. An empty string, or `subject` echoed back unchanged,
/// means "not found"; the resolver treats both the same way.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use inflect::Dictionary;
///
/// let upper = |subject: &str, _path: &str, _index: i32, _reference: &str| {
///     subject.to_uppercase()
/// };
/// assert_eq!(upper.lookup("fox", "nouns", 1, ""), "FOX");
/// ```
pub trait Dictionary {
    fn lookup(&self, subject: &str, path: &str, index: i32, reference: &str) -> String;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str, i32, &str) -> String,
{
    fn lookup(&self, subject: &str, path: &str, index: i32, reference: &str) -> String {
        self(subject, path, index, reference)
    }
}

/// The host's handler for template functions other than `lookup` and `replace`.
pub trait FunctionFallback {
    fn resolve_function(&self, name: &str, args: &[String], reference: &str) -> String;
}

impl<F> FunctionFallback for F
where
    F: Fn(&str, &[String], &str) -> String,
{
    fn resolve_function(&self, name: &str, args: &[String], reference: &str) -> String {
        self(name, args, reference)
    }
}
