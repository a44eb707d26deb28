//! Classification of blocks that are nothing but a page label.

use regex::Regex;
use std::sync::LazyLock;

/// `**Pages xiii–xiv**`, `**Page 12**`
static PAGES_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\*\*Pages?\s+[xivlcdm0-9–—-]+\*\*$").unwrap());

/// `--- *Page xvi* ---`
static PAGE_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^---\s*\*Page\s+[xivlcdm0-9]+\*\s*---$").unwrap());

/// Check whether a content block is only a page-boundary label.
///
/// Renderers use this to keep structural markers out of body text.
///
/// ```
/// use pagemark::is_page_marker;
///
/// assert!(is_page_marker("**Pages xiii–xiv**"));
/// assert!(is_page_marker("--- *Page 66* ---"));
/// assert!(!is_page_marker("Hello world"));
/// ```
pub fn is_page_marker(content: &str) -> bool {
    let trimmed = content.trim();
    PAGES_LABEL_RE.is_match(trimmed) || PAGE_RULE_RE.is_match(trimmed)
}
