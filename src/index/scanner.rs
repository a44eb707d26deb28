//! Page-marker scanning.
//!
//! A chapter's text is split into pages at markers of the form
//! `--- *Page <digits>* ---` followed by a blank line. A page's content runs
//! from just after that blank line up to the blank line preceding the next
//! marker, or to the end of the text.

use crate::model::Page;
use regex::Regex;
use std::sync::LazyLock;

/// A marker that opens a page: the label plus its blank-line separator.
static PAGE_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--- \*Page ([0-9]+)\* ---\n\n").unwrap());

/// Where the current page's content stops: a blank line, then a marker that
/// itself opens a page.
static PAGE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n--- \*Page [0-9]+\* ---\n\n").unwrap());

/// Split a chapter's text into pages.
///
/// Pages come back in scan order; numbers are not re-sorted or deduplicated.
/// Text before the first marker is not assigned to any page. A marker that
/// does not match the grammar exactly, or is not followed by a blank line, is
/// ordinary content of the page before it.
///
/// # Example
///
/// ```
/// use pagemark::build_page_index;
///
/// let text = "--- *Page 66* ---\n\nHello world\n\n--- *Page 67* ---\n\nSecond page";
/// let pages = build_page_index("chapter-5", text);
///
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0].id, "chapter-5-page-66");
/// assert_eq!(pages[0].content, "Hello world");
/// assert_eq!(&text[pages[1].start_index..pages[1].end_index], "Second page");
/// ```
pub fn build_page_index(chapter_id: &str, text: &str) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut cursor = 0;
    let mut previous: Option<u32> = None;

    while let Some(caps) = PAGE_START_RE.captures_at(text, cursor) {
        let (Some(marker), Some(digits)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let start = marker.end();
        // An empty page: the blank line before the next marker was consumed
        // as this marker's separator.
        let next_opens_here = PAGE_START_RE
            .find_at(text, start)
            .is_some_and(|m| m.start() == start);
        let end = if next_opens_here {
            start
        } else {
            PAGE_END_RE
                .find_at(text, start)
                .map_or(text.len(), |m| m.start())
        };
        cursor = end;

        let page_number = match digits.as_str().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                log::warn!(
                    "{}: skipping marker with out-of-range page number {} at offset {}",
                    chapter_id,
                    digits.as_str(),
                    marker.start()
                );
                continue;
            }
        };

        if let Some(prev) = previous {
            if page_number <= prev {
                log::warn!(
                    "{}: page {} follows page {} in scan order",
                    chapter_id,
                    page_number,
                    prev
                );
            }
        }
        previous = Some(page_number);

        log::trace!(
            "{}: page {} spans {}..{}",
            chapter_id,
            page_number,
            start,
            end
        );
        pages.push(Page::new(chapter_id, page_number, &text[start..end], start));
    }

    log::debug!("{}: indexed {} pages", chapter_id, pages.len());
    pages
}
