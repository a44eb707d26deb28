//! Inline emphasis runs.

use serde::{Deserialize, Serialize};

/// A contiguous span of text rendered either plain or emphasized (italic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisRun {
    /// The text content, never empty when produced by the tokenizer
    pub text: String,

    /// Whether the run renders with emphasized styling
    pub emphasis: bool,
}

impl EmphasisRun {
    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    /// Create an emphasized run.
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// Concatenate the text of a run sequence.
pub fn runs_text(runs: &[EmphasisRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(!EmphasisRun::plain("a").emphasis);
        assert!(EmphasisRun::emphasized("a").emphasis);
    }

    #[test]
    fn test_runs_text() {
        let runs = vec![
            EmphasisRun::plain("Keep "),
            EmphasisRun::emphasized("coming"),
            EmphasisRun::plain(" back"),
        ];
        assert_eq!(runs_text(&runs), "Keep coming back");
    }
}
