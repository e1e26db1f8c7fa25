use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a [`StaticDictionary`](super::StaticDictionary).
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// File I/O error when reading a dictionary file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not a JSON object of `{ path: { subject: [forms] } }`.
    #[error("invalid dictionary JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// One subject appears under two spellings of the same path.
    #[error("subject '{subject}' is listed twice under path '{path}'")]
    DuplicateSubject { path: String, subject: String },
}
