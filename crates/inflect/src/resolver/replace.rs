//! The `replace` template function.
//!
//! Rules are tried in order. A rule whose old text occurs literally wins
//! immediately; otherwise the old text is tried as a case-insensitive regular
//! expression. Compilation outcomes, including "not a pattern", are cached.

use regex::RegexBuilder;

use crate::cache::{CompiledPattern, ResolverCaches};
use crate::resolver::diagnostics::Diagnostics;
use crate::resolver::rule::{ReplaceRule, parse_replace_rule};
use crate::resolver::{ReplaceError, ResolverConfig};

/// Characters whose presence makes an old text worth compiling as a pattern.
pub const PATTERN_METACHARACTERS: &[char] = &['(', '[', '{', '*', '+', '?', '.', '^', '$', '|'];

/// Applies `"old"-"new"` rules to a subject string.
pub struct ReplaceEngine<'a> {
    config: &'a ResolverConfig,
    caches: &'a ResolverCaches,
}

impl<'a> ReplaceEngine<'a> {
    pub fn new(config: &'a ResolverConfig, caches: &'a ResolverCaches) -> Self {
        Self { config, caches }
    }

    /// Run `replace(subject, rule...)`.
    ///
    /// Every rule is parsed before any is applied, so one malformed rule
    /// fails the whole call. A subject with no rules, or with rules that
    /// change nothing, comes back unchanged. `reference` is the template the
    /// call came from; it only labels diagnostics.
    ///
    /// # Example
    ///
    /// ```
    /// use inflect::{ReplaceEngine, ResolverCaches, ResolverConfig};
    ///
    /// let config = ResolverConfig::default();
    /// let caches = ResolverCaches::default();
    /// let engine = ReplaceEngine::new(&config, &caches);
    ///
    /// let args = ["the cat sat".to_string(), r#""cat"-"dog""#.to_string()];
    /// assert_eq!(engine.replace(&args, "").unwrap(), "the dog sat");
    /// ```
    pub fn replace(&self, args: &[String], reference: &str) -> Result<String, ReplaceError> {
        let Some((subject, rule_args)) = args.split_first() else {
            return Err(ReplaceError::NoArguments);
        };
        let rules = rule_args
            .iter()
            .map(|argument| parse_replace_rule(argument))
            .collect::<Result<Vec<_>, _>>()?;

        let mut diagnostics = Diagnostics::new("replace", self.config.debug());
        let result = self.apply_rules(subject, &rules, &mut diagnostics);
        diagnostics.flush(reference);
        Ok(result)
    }

    fn apply_rules(
        &self,
        subject: &str,
        rules: &[ReplaceRule],
        diagnostics: &mut Diagnostics,
    ) -> String {
        for rule in rules {
            if subject.contains(rule.old()) {
                diagnostics.note(|| format!("literal match for '{}'", rule.old()));
                return subject.replace(rule.old(), rule.new_text());
            }

            let pattern = self.pattern_for(rule.old());
            let Some(regex) = pattern.as_regex() else {
                diagnostics.note(|| format!("'{}' is not a usable pattern", rule.old()));
                continue;
            };
            let replaced = regex.replace_all(subject, rule.new_text());
            if replaced != subject {
                diagnostics.note(|| format!("pattern match for '{}'", rule.old()));
                return replaced.into_owned();
            }
            diagnostics.note(|| format!("pattern '{}' changed nothing", rule.old()));
        }
        subject.to_string()
    }

    /// Get the compiled form of `text`, compiling at most once per text.
    fn pattern_for(&self, text: &str) -> CompiledPattern {
        if let Some(cached) = self.caches.cached_pattern(text) {
            return cached;
        }
        let compiled = self.compile(text);
        self.caches.store_pattern(text, compiled.clone());
        compiled
    }

    fn compile(&self, text: &str) -> CompiledPattern {
        if !text.contains(PATTERN_METACHARACTERS) {
            return CompiledPattern::NoPattern;
        }
        self.caches.record_pattern_compilation();
        match RegexBuilder::new(text).case_insensitive(true).build() {
            Ok(regex) => CompiledPattern::Compiled(regex),
            Err(e) => {
                tracing::trace!("'{}' does not compile as a pattern: {}", text, e);
                CompiledPattern::NoPattern
            }
        }
    }
}
