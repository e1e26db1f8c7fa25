//! The `lookup` template function.
//!
//! A subject such as `"the big red fox(1)"` is rarely a dictionary entry as a
//! whole. The resolver first tries the text before the first delimiter, then
//! drops trailing words one at a time until the dictionary recognizes the
//! remaining window. Whatever surrounded the window is spliced back around
//! the dictionary's answer, so `"fox(1)"` can become `"FOX(1)"`.

use std::path::MAIN_SEPARATOR;

use crate::cache::{LookupCacheKey, ResolverCaches};
use crate::dictionary::Dictionary;
use crate::resolver::diagnostics::Diagnostics;
use crate::resolver::{ResolveError, ResolverConfig};
use crate::scanner::{find_first_of, find_word_boundary_backward};

/// Index used when a `lookup` call has no third argument.
pub const DEFAULT_LOOKUP_INDEX: i32 = 1;

/// Index used when the third argument is not an integer.
pub const INVALID_LOOKUP_INDEX: i32 = -1;

/// Rewrite every `/` and `\` in a dictionary path to the platform separator.
///
/// # Example
///
/// ```
/// use std::path::MAIN_SEPARATOR;
/// use inflect::resolver::normalize_path;
///
/// let expected = format!("nouns{MAIN_SEPARATOR}genitive");
/// assert_eq!(normalize_path("nouns/genitive"), expected);
/// assert_eq!(normalize_path("nouns\\genitive"), expected);
/// ```
pub fn normalize_path(path: &str) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

/// Parse the optional index argument of a `lookup` call.
pub fn parse_lookup_index(raw: Option<&str>) -> i32 {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or(INVALID_LOOKUP_INDEX),
        None => DEFAULT_LOOKUP_INDEX,
    }
}

/// Byte range of the subject currently offered to the dictionary.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: usize,
    end: usize,
}

/// Everything about one `lookup` call that stays fixed while the window moves.
struct LookupRequest<'r> {
    subject: &'r str,
    path: &'r str,
    index: i32,
    reference: &'r str,
    is_gender: bool,
}

/// Resolves `lookup(subject, path[, index])` calls.
pub struct LookupResolver<'a> {
    config: &'a ResolverConfig,
    caches: &'a ResolverCaches,
    dictionary: &'a dyn Dictionary,
}

impl<'a> LookupResolver<'a> {
    pub fn new(
        config: &'a ResolverConfig,
        caches: &'a ResolverCaches,
        dictionary: &'a dyn Dictionary,
    ) -> Self {
        Self {
            config,
            caches,
            dictionary,
        }
    }

    /// Resolve a `lookup` call.
    ///
    /// `args` is `[subject, path]` or `[subject, path, index]`. The path in
    /// `args[1]` is normalized in place so later consumers of the same
    /// argument list see the canonical form. `reference` is the full template
    /// string, passed through to the dictionary for context.
    ///
    /// The result is cached whether or not any window matched; a call that
    /// matched nothing returns whatever the dictionary says about the whole
    /// subject.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ArgumentCount`] unless there are two or three
    /// arguments.
    pub fn resolve(&self, args: &mut [String], reference: &str) -> Result<String, ResolveError> {
        if !(2..=3).contains(&args.len()) {
            return Err(ResolveError::ArgumentCount {
                function: "lookup".to_string(),
                expected: "2 or 3",
                got: args.len(),
            });
        }

        args[1] = normalize_path(&args[1]);
        let index = parse_lookup_index(args.get(2).map(String::as_str));
        let subject = args[0].as_str();
        let path = args[1].as_str();

        let mut diagnostics = Diagnostics::new("lookup", self.config.debug());
        let key = LookupCacheKey::new(subject, path, index);
        if let Some(cached) = self.caches.cached_lookup(&key) {
            diagnostics.note(|| format!("cache hit for '{subject}' at '{path}' [{index}]"));
            diagnostics.flush(reference);
            return Ok(cached);
        }

        let request = LookupRequest {
            subject,
            path,
            index,
            reference,
            is_gender: path == normalize_path(self.config.gender_path()),
        };
        let result = match self.narrow(&request, &mut diagnostics) {
            Some(found) => found,
            None => {
                diagnostics.note(|| format!("no window matched, asking for '{subject}' as is"));
                self.dictionary.lookup(subject, path, index, reference)
            }
        };

        self.caches.store_lookup(key, result.clone());
        diagnostics.flush(reference);
        Ok(result)
    }

    /// Try the fast window, then shrink it word by word.
    fn narrow(&self, request: &LookupRequest<'_>, diagnostics: &mut Diagnostics) -> Option<String> {
        let subject = request.subject;
        // Leading whitespace is never part of a dictionary entry; keep it as prefix.
        let start = subject.len() - subject.trim_start().len();
        let end = find_first_of(subject, self.config.window_delimiters(), start, true)
            .unwrap_or_else(|| start + subject[start..].trim_end().len());
        let mut window = Window { start, end };

        if let Some(found) = self.try_lookup(request, window, diagnostics) {
            return Some(found);
        }

        for _ in 0..self.config.max_trim_iterations() {
            let shrunk = find_word_boundary_backward(subject, &mut window.end, start, true)
                && find_word_boundary_backward(subject, &mut window.end, start, false);
            if !shrunk {
                diagnostics.note(|| "no word boundary left".to_string());
                return None;
            }
            if let Some(found) = self.try_lookup(request, window, diagnostics) {
                return Some(found);
            }
        }

        diagnostics.note(|| {
            format!(
                "gave up after {} trimming steps",
                self.config.max_trim_iterations()
            )
        });
        None
    }

    /// Ask the dictionary about one window and rebuild the full string.
    fn try_lookup(
        &self,
        request: &LookupRequest<'_>,
        window: Window,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        if window.end <= window.start {
            return None;
        }
        let subject = request.subject;
        let text = &subject[window.start..window.end];
        let found = self
            .dictionary
            .lookup(text, request.path, request.index, request.reference);
        diagnostics.note(|| format!("window '{text}' -> '{found}'"));

        if found.is_empty() || found == text {
            return None;
        }
        // Gender codes are metadata about the subject, not a replacement for it.
        if request.is_gender {
            return Some(found);
        }

        let mut result = String::with_capacity(subject.len() + found.len());
        result.push_str(&subject[..window.start]);
        result.push_str(&found);
        result.push_str(&subject[window.end..]);
        (!result.is_empty()).then_some(result)
    }
}
