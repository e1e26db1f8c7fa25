//! In-memory dictionary of inflected forms.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use crate::dictionary::{Dictionary, DictionaryError};
use crate::resolver::normalize_path;

/// A fixed table of forms: `path -> subject -> [form 1, form 2, ...]`.
///
/// Indices are 1-based; any index outside the stored forms is "not found".
/// Paths are normalized on insertion so `nouns/gen` and `nouns\gen` name the
/// same table. A JSON file may spell one path both ways; the subjects are
/// merged, and a subject listed under both spellings is an error.
///
/// # Example
///
/// ```
/// use inflect::{Dictionary, StaticDictionary};
///
/// let dictionary = StaticDictionary::from_json_str(r#"{
///     "nouns/acc": { "лиса": ["лису", "лис"] }
/// }"#).unwrap();
///
/// assert_eq!(dictionary.lookup("лиса", "nouns/acc", 1, ""), "лису");
/// assert_eq!(dictionary.lookup("лиса", "nouns/acc", 2, ""), "лис");
/// assert_eq!(dictionary.lookup("лиса", "nouns/acc", 3, ""), "");
/// ```
#[derive(Debug, Default, Clone)]
pub struct StaticDictionary {
    paths: HashMap<String, HashMap<String, Vec<String>>>,
}

impl StaticDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let raw: HashMap<String, HashMap<String, Vec<String>>> =
            serde_json::from_str(json).map_err(|source| DictionaryError::Json { source })?;
        let mut dictionary = Self::new();
        raw.into_iter()
            .try_for_each(|(path, subjects)| dictionary.merge_path(&path, subjects))?;
        Ok(dictionary)
    }

    /// Add a table of subjects under `path` without overwriting any subject
    /// already stored there.
    fn merge_path(
        &mut self,
        path: &str,
        subjects: HashMap<String, Vec<String>>,
    ) -> Result<(), DictionaryError> {
        let normalized = normalize_path(path);
        let table = self.paths.entry(normalized.clone()).or_default();
        subjects
            .into_iter()
            .try_for_each(|(subject, forms)| match table.entry(subject) {
                Entry::Occupied(entry) => Err(DictionaryError::DuplicateSubject {
                    path: normalized.clone(),
                    subject: entry.key().clone(),
                }),
                Entry::Vacant(entry) => {
                    entry.insert(forms);
                    Ok(())
                }
            })
    }

    /// Read and parse a JSON dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DictionaryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Add or replace the forms of `subject` under `path`.
    pub fn insert<I, S>(&mut self, path: &str, subject: impl Into<String>, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths
            .entry(normalize_path(path))
            .or_default()
            .insert(subject.into(), forms.into_iter().map(Into::into).collect());
    }

    /// Get the forms stored for `subject` under `path`.
    pub fn forms(&self, path: &str, subject: &str) -> Option<&[String]> {
        self.paths
            .get(&normalize_path(path))
            .and_then(|subjects| subjects.get(subject))
            .map(Vec::as_slice)
    }

    /// Total number of subjects across all paths.
    pub fn len(&self) -> usize {
        self.paths.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dictionary for StaticDictionary {
    fn lookup(&self, subject: &str, path: &str, index: i32, _reference: &str) -> String {
        let Some(forms) = self.forms(path, subject) else {
            return String::new();
        };
        usize::try_from(index)
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|position| forms.get(position))
            .cloned()
            .unwrap_or_default()
    }
}
