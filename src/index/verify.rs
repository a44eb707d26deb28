//! Drift detection between stored page data and a fresh regeneration.

use super::PageIndex;
use crate::model::Page;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A difference between stored and regenerated page data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum PageDrift {
    /// Regeneration produced a page the stored data lacks.
    Missing(String),
    /// The stored data has a page regeneration no longer produces.
    Unexpected(String),
    /// Both have the page but its record differs.
    Changed(String),
}

impl PageDrift {
    /// Id of the page concerned.
    pub fn page_id(&self) -> &str {
        match self {
            PageDrift::Missing(id) | PageDrift::Unexpected(id) | PageDrift::Changed(id) => id,
        }
    }
}

impl fmt::Display for PageDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageDrift::Missing(id) => write!(f, "missing from stored data: {}", id),
            PageDrift::Unexpected(id) => write!(f, "no longer generated: {}", id),
            PageDrift::Changed(id) => write!(f, "changed: {}", id),
        }
    }
}

/// Compare stored page data against a regenerated index.
///
/// Pages are matched by id; when an id repeats, every record carrying it
/// must match in order. Drift is reported in the regenerated index's order,
/// followed by stale stored pages in stored order. An empty result means the
/// stored data is exactly what the generator produces.
pub fn verify(stored: &PageIndex, generated: &PageIndex) -> Vec<PageDrift> {
    let (stored_order, stored_records) = group_by_id(stored);
    let (generated_order, generated_records) = group_by_id(generated);
    let mut drift = Vec::new();

    for id in generated_order {
        match stored_records.get(id) {
            None => drift.push(PageDrift::Missing(id.to_string())),
            Some(records) if *records != generated_records[id] => {
                drift.push(PageDrift::Changed(id.to_string()))
            }
            Some(_) => {}
        }
    }

    for id in stored_order {
        if !generated_records.contains_key(id) {
            drift.push(PageDrift::Unexpected(id.to_string()));
        }
    }

    drift
}

fn group_by_id(index: &PageIndex) -> (Vec<&str>, HashMap<&str, Vec<&Page>>) {
    let mut order = Vec::new();
    let mut records: HashMap<&str, Vec<&Page>> = HashMap::new();
    for page in index {
        let entry = records.entry(page.id.as_str()).or_default();
        if entry.is_empty() {
            order.push(page.id.as_str());
        }
        entry.push(page);
    }
    (order, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "--- *Page 1* ---\n\nOne\n\n--- *Page 2* ---\n\nTwo";

    fn index_of(text: &str) -> PageIndex {
        let mut index = PageIndex::new();
        index.add_chapter("c", text);
        index
    }

    #[test]
    fn test_no_drift() {
        assert!(verify(&index_of(TEXT), &index_of(TEXT)).is_empty());
    }

    #[test]
    fn test_changed_content() {
        let stored = index_of(TEXT);
        let generated = index_of("--- *Page 1* ---\n\nOne!\n\n--- *Page 2* ---\n\nTwo");
        let drift = verify(&stored, &generated);
        assert_eq!(
            drift,
            vec![
                PageDrift::Changed("c-page-1".into()),
                PageDrift::Changed("c-page-2".into())
            ]
        );
    }

    #[test]
    fn test_missing_and_unexpected() {
        let stored = index_of(TEXT);
        let generated = index_of("--- *Page 1* ---\n\nOne\n\n--- *Page 3* ---\n\nTwo");
        let drift = verify(&stored, &generated);
        assert!(drift.contains(&PageDrift::Missing("c-page-3".into())));
        assert!(drift.contains(&PageDrift::Unexpected("c-page-2".into())));
        assert!(!drift.iter().any(|d| d.page_id() == "c-page-1"));
    }

    #[test]
    fn test_hand_edited_record_detected() {
        let generated = index_of(TEXT);
        let mut pages = generated.pages().to_vec();
        pages[0].content = "One (edited)".to_string();
        let stored = PageIndex::from_pages(pages);

        assert_eq!(
            verify(&stored, &generated),
            vec![PageDrift::Changed("c-page-1".into())]
        );
    }

    #[test]
    fn test_duplicate_count_mismatch() {
        let generated = index_of("--- *Page 1* ---\n\nOne\n\n--- *Page 1* ---\n\nAgain");
        let stored = PageIndex::from_pages(vec![Page::new("c", 1, "One", 18)]);
        assert_eq!(
            verify(&stored, &generated),
            vec![PageDrift::Changed("c-page-1".into())]
        );
    }
}
