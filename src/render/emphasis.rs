//! Inline emphasis tokenizer.
//!
//! Splits short text (chat bubbles, book paragraphs) into plain and
//! emphasized runs. The only markup understood is a single delimiter
//! character on both sides of a non-empty span: `*text*`, and optionally
//! `_text_`. Spans never nest; an unpaired delimiter stays literal text.

use crate::model::EmphasisRun;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ASTERISK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

static ASTERISK_OR_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*|_([^_]+)_").unwrap());

/// Which characters delimit an emphasized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiters {
    /// `*text*` only
    #[default]
    Asterisk,
    /// `*text*` or `_text_`
    AsteriskOrUnderscore,
}

impl Delimiters {
    /// Check whether `c` opens or closes a span under this configuration.
    pub fn is_delimiter(self, c: char) -> bool {
        match self {
            Delimiters::Asterisk => c == '*',
            Delimiters::AsteriskOrUnderscore => c == '*' || c == '_',
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Delimiters::Asterisk => &ASTERISK_RE,
            Delimiters::AsteriskOrUnderscore => &ASTERISK_OR_UNDERSCORE_RE,
        }
    }
}

/// Tokenizer for a fixed delimiter configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmphasisTokenizer {
    delimiters: Delimiters,
}

impl EmphasisTokenizer {
    /// Create a tokenizer for the given delimiters.
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    /// Delimiters this tokenizer recognizes.
    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Split `input` into runs.
    ///
    /// Matching is greedy left to right and takes the shortest span at each
    /// position, so `*a**b*` yields two emphasized runs. Plain runs are only
    /// emitted when non-empty; empty input yields no runs. Input without any
    /// span comes back as a single plain run.
    pub fn tokenize(&self, input: &str) -> Vec<EmphasisRun> {
        let mut runs = Vec::new();
        let mut last = 0;

        for caps in self.delimiters.pattern().captures_iter(input) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2)))
            else {
                continue;
            };
            if whole.start() > last {
                runs.push(EmphasisRun::plain(&input[last..whole.start()]));
            }
            runs.push(EmphasisRun::emphasized(inner.as_str()));
            last = whole.end();
        }

        if last < input.len() {
            runs.push(EmphasisRun::plain(&input[last..]));
        }
        runs
    }

    /// Check whether `input` contains at least one emphasized span.
    pub fn has_emphasis(&self, input: &str) -> bool {
        self.delimiters.pattern().is_match(input)
    }
}

/// Tokenize with the default `*text*` delimiters.
///
/// ```
/// use pagemark::{tokenize_emphasis, EmphasisRun};
///
/// assert_eq!(
///     tokenize_emphasis("Keep *coming* back"),
///     vec![
///         EmphasisRun::plain("Keep "),
///         EmphasisRun::emphasized("coming"),
///         EmphasisRun::plain(" back"),
///     ]
/// );
/// ```
pub fn tokenize_emphasis(input: &str) -> Vec<EmphasisRun> {
    EmphasisTokenizer::default().tokenize(input)
}

/// Tokenize with an explicit delimiter configuration.
pub fn tokenize_emphasis_with(input: &str, delimiters: Delimiters) -> Vec<EmphasisRun> {
    EmphasisTokenizer::new(delimiters).tokenize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both() -> EmphasisTokenizer {
        EmphasisTokenizer::new(Delimiters::AsteriskOrUnderscore)
    }

    #[test]
    fn test_single_span() {
        assert_eq!(
            tokenize_emphasis("Keep *coming* back"),
            vec![
                EmphasisRun::plain("Keep "),
                EmphasisRun::emphasized("coming"),
                EmphasisRun::plain(" back"),
            ]
        );
    }

    #[test]
    fn test_no_markup() {
        assert_eq!(
            tokenize_emphasis("no markup here"),
            vec![EmphasisRun::plain("no markup here")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_emphasis("").is_empty());
    }

    #[test]
    fn test_unmatched_delimiter_is_literal() {
        assert_eq!(
            tokenize_emphasis("5 * 3 = 15"),
            vec![EmphasisRun::plain("5 * 3 = 15")]
        );
        assert_eq!(
            tokenize_emphasis("a *b* c *d"),
            vec![
                EmphasisRun::plain("a "),
                EmphasisRun::emphasized("b"),
                EmphasisRun::plain(" c *d"),
            ]
        );
    }

    #[test]
    fn test_adjacent_spans() {
        assert_eq!(
            tokenize_emphasis("*a**b*"),
            vec![EmphasisRun::emphasized("a"), EmphasisRun::emphasized("b")]
        );
    }

    #[test]
    fn test_empty_span_not_matched() {
        assert_eq!(tokenize_emphasis("**"), vec![EmphasisRun::plain("**")]);
    }

    #[test]
    fn test_asterisk_only_ignores_underscore() {
        assert_eq!(
            tokenize_emphasis("an _aside_ here"),
            vec![EmphasisRun::plain("an _aside_ here")]
        );
    }

    #[test]
    fn test_underscore_variant() {
        assert_eq!(
            both().tokenize("an _aside_ and *stress*"),
            vec![
                EmphasisRun::plain("an "),
                EmphasisRun::emphasized("aside"),
                EmphasisRun::plain(" and "),
                EmphasisRun::emphasized("stress"),
            ]
        );
    }

    #[test]
    fn test_mixed_delimiters_do_not_pair() {
        assert_eq!(
            both().tokenize("*half_"),
            vec![EmphasisRun::plain("*half_")]
        );
        // The other delimiter is ordinary text inside a span.
        assert_eq!(
            both().tokenize("*snake_case*"),
            vec![EmphasisRun::emphasized("snake_case")]
        );
    }

    #[test]
    fn test_spans_cross_newlines() {
        assert_eq!(
            tokenize_emphasis("*one\ntwo*"),
            vec![EmphasisRun::emphasized("one\ntwo")]
        );
    }

    #[test]
    fn test_has_emphasis() {
        assert!(EmphasisTokenizer::default().has_emphasis("a *b*"));
        assert!(!EmphasisTokenizer::default().has_emphasis("a _b_"));
        assert!(both().has_emphasis("a _b_"));
    }

    #[test]
    fn test_is_delimiter() {
        assert!(Delimiters::Asterisk.is_delimiter('*'));
        assert!(!Delimiters::Asterisk.is_delimiter('_'));
        assert!(Delimiters::AsteriskOrUnderscore.is_delimiter('_'));
    }
}
