//! Integration tests for the `lookup` resolver: window narrowing, splicing,
//! gender handling, caching, and the trimming bound.

use inflect::resolver::normalize_path;
use inflect::{Dictionary, LookupResolver, ResolveError, ResolverCaches, ResolverConfig, args};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::MAIN_SEPARATOR;

/// Dictionary stub that answers from a fixed table and records every subject
/// it is asked about, in order.
struct RecordingDictionary {
    answers: HashMap<String, String>,
    echo_unknown: bool,
    calls: RefCell<Vec<String>>,
    indices: RefCell<Vec<i32>>,
}

impl RecordingDictionary {
    fn new(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            echo_unknown: false,
            calls: RefCell::new(Vec::new()),
            indices: RefCell::new(Vec::new()),
        }
    }

    fn echoing(answers: &[(&str, &str)]) -> Self {
        Self {
            echo_unknown: true,
            ..Self::new(answers)
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Dictionary for RecordingDictionary {
    fn lookup(&self, subject: &str, _path: &str, index: i32, _reference: &str) -> String {
        self.calls.borrow_mut().push(subject.to_string());
        self.indices.borrow_mut().push(index);
        match self.answers.get(subject) {
            Some(answer) => answer.clone(),
            None if self.echo_unknown => subject.to_string(),
            None => String::new(),
        }
    }
}

fn resolve(dictionary: &RecordingDictionary, mut args: Vec<String>) -> String {
    let config = ResolverConfig::default();
    let caches = ResolverCaches::new(config.cache_capacity());
    LookupResolver::new(&config, &caches, dictionary)
        .resolve(&mut args, "template")
        .unwrap()
}

// =============================================================================
// Window Narrowing
// =============================================================================

#[test]
fn trims_trailing_words_in_order() {
    let dictionary = RecordingDictionary::new(&[("the", "THE")]);
    let result = resolve(&dictionary, args!["the big red fox", "nouns"]);

    assert_eq!(
        dictionary.calls(),
        vec!["the big red fox", "the big red", "the big", "the"]
    );
    assert_eq!(result, "THE big red fox");
}

#[test]
fn stops_at_first_matching_window() {
    let dictionary = RecordingDictionary::new(&[("the big red", "X"), ("the big", "Y")]);
    let result = resolve(&dictionary, args!["the big red fox", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["the big red fox", "the big red"]);
    assert_eq!(result, "X fox");
}

#[test]
fn fast_window_ends_at_delimiter() {
    let dictionary = RecordingDictionary::new(&[("the big red fox", "FOX")]);
    let result = resolve(&dictionary, args!["the big red fox(1)", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["the big red fox"]);
    assert_eq!(result, "FOX(1)");
}

#[test]
fn fast_window_trims_whitespace_before_delimiter() {
    let dictionary = RecordingDictionary::new(&[("red fox", "RED FOX")]);
    let result = resolve(&dictionary, args!["red fox [pl]", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["red fox"]);
    assert_eq!(result, "RED FOX [pl]");
}

#[test]
fn trimming_continues_from_delimiter_window() {
    let dictionary = RecordingDictionary::new(&[("big", "BIG")]);
    let result = resolve(&dictionary, args!["big fox (1)", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["big fox", "big"]);
    assert_eq!(result, "BIG fox (1)");
}

#[test]
fn echoed_window_counts_as_failure() {
    let dictionary = RecordingDictionary::echoing(&[("the", "THE")]);
    let result = resolve(&dictionary, args!["the big fox", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["the big fox", "the big", "the"]);
    assert_eq!(result, "THE big fox");
}

#[test]
fn leading_whitespace_is_kept_as_prefix() {
    let dictionary = RecordingDictionary::new(&[("fox", "FOX")]);
    let result = resolve(&dictionary, args!["  fox", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["fox"]);
    assert_eq!(result, "  FOX");
}

#[test]
fn trailing_whitespace_is_kept_as_suffix() {
    let dictionary = RecordingDictionary::new(&[("fox", "FOX")]);
    let result = resolve(&dictionary, args!["fox  ", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["fox"]);
    assert_eq!(result, "FOX  ");
}

#[test]
fn trailing_whitespace_does_not_cost_a_trimming_step() {
    let dictionary = RecordingDictionary::new(&[]);
    let result = resolve(&dictionary, args!["the fox  ", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["the fox", "the", "the fox  "]);
    assert_eq!(result, "");
}

#[test]
fn narrows_cyrillic_subjects() {
    let dictionary = RecordingDictionary::new(&[("большая", "большую")]);
    let result = resolve(&dictionary, args!["большая лиса", "adjectives/acc"]);

    assert_eq!(dictionary.calls(), vec!["большая лиса", "большая"]);
    assert_eq!(result, "большую лиса");
}

// =============================================================================
// Fallback When Nothing Matches
// =============================================================================

#[test]
fn unmatched_subject_asks_for_full_subject_again() {
    let dictionary = RecordingDictionary::new(&[]);
    let result = resolve(&dictionary, args!["red fox(2)", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["red fox", "red", "red fox(2)"]);
    assert_eq!(result, "");
}

#[test]
fn unmatched_subject_returns_dictionary_answer_verbatim() {
    let dictionary = RecordingDictionary::echoing(&[]);
    let result = resolve(&dictionary, args!["red fox", "nouns"]);

    assert_eq!(result, "red fox");
}

#[test]
fn delimiter_at_start_goes_straight_to_fallback() {
    let dictionary = RecordingDictionary::new(&[("(1) fox", "whole")]);
    let result = resolve(&dictionary, args!["(1) fox", "nouns"]);

    assert_eq!(dictionary.calls(), vec!["(1) fox"]);
    assert_eq!(result, "whole");
}

// =============================================================================
// Gender Path
// =============================================================================

#[test]
fn gender_result_is_never_spliced() {
    let dictionary = RecordingDictionary::new(&[("the big", "f")]);
    let result = resolve(&dictionary, args!["the big red fox(1)", "gender"]);

    assert_eq!(result, "f");
}

#[test]
fn gender_result_ignores_prefix_and_suffix() {
    let dictionary = RecordingDictionary::new(&[("fox", "f")]);
    let result = resolve(&dictionary, args!["  fox(1)", "gender"]);

    assert_eq!(dictionary.calls(), vec!["fox"]);
    assert_eq!(result, "f");
}

#[test]
fn gender_path_is_configurable() {
    let dictionary = RecordingDictionary::new(&[("fox", "m")]);
    let config = ResolverConfig::builder().gender_path("grammar/gender").build();
    let caches = ResolverCaches::new(config.cache_capacity());
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    let mut args = args!["fox(1)", "grammar\\gender"];
    assert_eq!(resolver.resolve(&mut args, "").unwrap(), "m");

    // The default gender path is an ordinary path under this config.
    let mut args = args!["fox(1)", "gender"];
    assert_eq!(resolver.resolve(&mut args, "").unwrap(), "m(1)");
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn path_is_normalized_in_place() {
    let dictionary = RecordingDictionary::new(&[("fox", "FOX")]);
    let config = ResolverConfig::default();
    let caches = ResolverCaches::default();
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    let mut args = args!["fox", "nouns\\gen"];
    resolver.resolve(&mut args, "").unwrap();
    assert_eq!(args[1], format!("nouns{MAIN_SEPARATOR}gen"));
    assert_eq!(args[1], normalize_path("nouns/gen"));
}

#[test]
fn index_argument_is_parsed() {
    let dictionary = RecordingDictionary::new(&[("a", "A"), ("b", "B"), ("c", "C")]);
    resolve(&dictionary, args!["a", "p"]);
    resolve(&dictionary, args!["b", "p", "2"]);
    resolve(&dictionary, args!["c", "p", "two"]);

    assert_eq!(*dictionary.indices.borrow(), vec![1, 2, -1]);
}

#[test]
fn wrong_argument_count_is_an_error() {
    let dictionary = RecordingDictionary::new(&[]);
    let config = ResolverConfig::default();
    let caches = ResolverCaches::default();
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    let err = resolver.resolve(&mut args!["fox"], "").unwrap_err();
    assert_eq!(
        err,
        ResolveError::ArgumentCount {
            function: "lookup".to_string(),
            expected: "2 or 3",
            got: 1,
        }
    );
    assert!(resolver.resolve(&mut args!["a", "b", "1", "x"], "").is_err());
    assert!(dictionary.calls().is_empty());
}

// =============================================================================
// Caching
// =============================================================================

#[test]
fn repeated_lookup_is_served_from_cache() {
    let dictionary = RecordingDictionary::new(&[("the", "THE")]);
    let config = ResolverConfig::default();
    let caches = ResolverCaches::default();
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    let first = resolver.resolve(&mut args!["the fox", "nouns"], "").unwrap();
    let calls_after_first = dictionary.calls().len();
    let second = resolver.resolve(&mut args!["the fox", "nouns"], "").unwrap();

    assert_eq!(first, second);
    assert_eq!(dictionary.calls().len(), calls_after_first);
    assert_eq!(caches.stats().lookup_hits, 1);
    assert_eq!(caches.stats().lookup_misses, 1);
}

#[test]
fn failures_are_cached_too() {
    let dictionary = RecordingDictionary::new(&[]);
    let config = ResolverConfig::default();
    let caches = ResolverCaches::default();
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    resolver.resolve(&mut args!["unknown word", "nouns"], "").unwrap();
    let calls_after_first = dictionary.calls().len();
    resolver.resolve(&mut args!["unknown word", "nouns"], "").unwrap();

    assert_eq!(dictionary.calls().len(), calls_after_first);
}

#[test]
fn separator_style_does_not_cause_cache_miss() {
    let dictionary = RecordingDictionary::new(&[("fox", "FOX")]);
    let config = ResolverConfig::default();
    let caches = ResolverCaches::default();
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    resolver.resolve(&mut args!["fox", "nouns/gen"], "").unwrap();
    resolver.resolve(&mut args!["fox", "nouns\\gen"], "").unwrap();

    assert_eq!(dictionary.calls(), vec!["fox"]);
}

#[test]
fn cache_key_includes_index_and_path() {
    let dictionary = RecordingDictionary::new(&[("fox", "FOX")]);
    let config = ResolverConfig::default();
    let caches = ResolverCaches::default();
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    resolver.resolve(&mut args!["fox", "nouns"], "").unwrap();
    resolver.resolve(&mut args!["fox", "nouns", "2"], "").unwrap();
    resolver.resolve(&mut args!["fox", "verbs"], "").unwrap();

    assert_eq!(dictionary.calls().len(), 3);
    assert_eq!(caches.lookup_len(), 3);
}

// =============================================================================
// Trimming Bound
// =============================================================================

#[test]
fn long_subject_stops_after_iteration_bound() {
    let subject = (0..60)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    let dictionary = RecordingDictionary::new(&[]);
    let result = resolve(&dictionary, args![subject.clone(), "nouns"]);

    let calls = dictionary.calls();
    // Fast window, 50 shrinking steps, then the final whole-subject request.
    assert_eq!(calls.len(), 52);
    assert_eq!(calls[50], "w0 w1 w2 w3 w4 w5 w6 w7 w8 w9");
    assert_eq!(calls[51], subject);
    assert_eq!(result, "");
}

#[test]
fn iteration_bound_is_configurable() {
    let dictionary = RecordingDictionary::new(&[("a", "A")]);
    let config = ResolverConfig::builder().max_trim_iterations(2).build();
    let caches = ResolverCaches::default();
    let resolver = LookupResolver::new(&config, &caches, &dictionary);

    let result = resolver.resolve(&mut args!["a b c d", "p"], "").unwrap();

    assert_eq!(dictionary.calls(), vec!["a b c d", "a b c", "a b", "a b c d"]);
    assert_eq!(result, "");
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn debug_diagnostics_do_not_change_results() {
    let quiet = RecordingDictionary::new(&[("the", "THE")]);
    let verbose = RecordingDictionary::new(&[("the", "THE")]);
    let config = ResolverConfig::builder().debug(true).build();
    let caches = ResolverCaches::default();

    let expected = resolve(&quiet, args!["the big fox(3)", "nouns"]);
    let actual = LookupResolver::new(&config, &caches, &verbose)
        .resolve(&mut args!["the big fox(3)", "nouns"], "")
        .unwrap();

    assert_eq!(actual, expected);
    assert_eq!(verbose.calls(), quiet.calls());
}
