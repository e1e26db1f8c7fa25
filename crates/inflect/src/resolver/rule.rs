//! Parser for `replace` rule arguments.
//!
//! A rule argument has the literal shape `"old"-"new"`. The old text runs up
//! to the first `"-"` separator; everything after it, minus the closing
//! quote, is the new text.

use winnow::combinator::preceded;
use winnow::prelude::*;
use winnow::token::{literal, rest, take_until};

use crate::resolver::ReplaceError;

const RULE_SEPARATOR: &str = "\"-\"";

/// A parsed `"old"-"new"` replacement rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRule {
    old: String,
    new: String,
}

impl ReplaceRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Text to look for, literally or as a pattern.
    pub fn old(&self) -> &str {
        &self.old
    }

    /// Replacement text. When the rule is applied as a pattern, `$1` and
    /// `${name}` refer to capture groups.
    pub fn new_text(&self) -> &str {
        &self.new
    }
}

/// Parse one rule argument, ignoring surrounding whitespace.
///
/// # Example
///
/// ```
/// use inflect::resolver::parse_replace_rule;
///
/// let rule = parse_replace_rule(r#""cat"-"dog""#).unwrap();
/// assert_eq!(rule.old(), "cat");
/// assert_eq!(rule.new_text(), "dog");
///
/// assert!(parse_replace_rule("cat-dog").is_err());
/// ```
pub fn parse_replace_rule(argument: &str) -> Result<ReplaceRule, ReplaceError> {
    replace_rule
        .parse(argument.trim())
        .map_err(|_| ReplaceError::MalformedRule {
            argument: argument.to_string(),
        })
}

fn replace_rule(input: &mut &str) -> ModalResult<ReplaceRule> {
    let old = preceded('"', take_until(1.., RULE_SEPARATOR)).parse_next(input)?;
    literal(RULE_SEPARATOR).parse_next(input)?;
    let quoted_new = rest
        .verify(|s: &str| s.ends_with('"'))
        .parse_next(input)?;
    let new = &quoted_new[..quoted_new.len() - 1];
    Ok(ReplaceRule::new(old, new))
}
