//! Page-aware full-text search.
//!
//! Every hit is attributed to the page it falls in, with offsets relative to
//! the chapter text so it can be fed back into `PageIndex::page_for_position`.

use crate::error::Result;
use crate::index::PageIndex;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NEWLINE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Options for searching page text.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Match case exactly
    pub case_sensitive: bool,

    /// Only match whole words
    pub whole_words: bool,

    /// Characters of context on each side of the match in the excerpt
    pub context_chars: usize,

    /// Characters kept in `before` and `after`
    pub excerpt_edge_chars: usize,
}

impl SearchOptions {
    /// Create new search options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match case exactly.
    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    /// Allow matches inside words.
    pub fn partial_words(mut self) -> Self {
        self.whole_words = false;
        self
    }

    /// Set the excerpt context width.
    pub fn with_context(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            whole_words: true,
            context_chars: 100,
            excerpt_edge_chars: 50,
        }
    }
}

/// A single search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Page the match falls in
    pub page_id: String,

    /// Chapter of that page
    pub chapter_id: String,

    /// Page number of that page
    pub page_number: u32,

    /// Byte offset of the match in the chapter text
    pub offset: usize,

    /// Byte length of the match
    pub length: usize,

    /// The matched text as it appears in the page
    pub matched: String,

    /// Text just before the match
    pub before: String,

    /// Text just after the match
    pub after: String,

    /// Surrounding context with paragraph breaks collapsed
    pub excerpt: String,
}

/// Search the text of every page.
///
/// A blank term finds nothing. Hits are ordered by page number, then by
/// offset.
pub fn search(index: &PageIndex, term: &str, options: &SearchOptions) -> Result<Vec<SearchHit>> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let escaped = regex::escape(term);
    let pattern = if options.whole_words {
        format!(r"\b{}\b", escaped)
    } else {
        escaped
    };
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()?;

    let mut hits = Vec::new();
    for page in index {
        let content = page.content.as_str();
        for m in re.find_iter(content) {
            let head = &content[..m.start()];
            let tail = &content[m.end()..];
            let before = tail_chars(head, options.excerpt_edge_chars);
            let after = head_chars(tail, options.excerpt_edge_chars);

            let context_start = m.start() - tail_chars(head, options.context_chars).len();
            let context_end = m.end() + head_chars(tail, options.context_chars).len();
            let excerpt = NEWLINE_RUN_RE
                .replace_all(&content[context_start..context_end], " ")
                .trim()
                .to_string();

            hits.push(SearchHit {
                page_id: page.id.clone(),
                chapter_id: page.chapter_id.clone(),
                page_number: page.page_number,
                offset: page.start_index + m.start(),
                length: m.len(),
                matched: m.as_str().to_string(),
                before: before.to_string(),
                after: after.to_string(),
                excerpt,
            });
        }
    }

    hits.sort_by(|a, b| {
        a.page_number
            .cmp(&b.page_number)
            .then(a.offset.cmp(&b.offset))
    });
    log::debug!("search for {:?} found {} hits", term, hits.len());
    Ok(hits)
}

/// Last `n` characters of `s`.
fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

/// First `n` characters of `s`.
fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
