//! Indexing statistics.

use crate::index::PageIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Statistics collected over an index and its source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of chapters indexed
    pub chapter_count: u32,

    /// Number of pages produced
    pub page_count: u32,

    /// Bytes of chapter text assigned to a page
    pub indexed_bytes: u64,

    /// Total bytes of chapter text
    pub source_bytes: u64,

    /// Pages whose number repeats an earlier page of the same chapter
    pub duplicate_pages: u32,

    /// Pages numbered lower than the page before them
    pub out_of_order_pages: u32,

    /// Pages with no content
    pub empty_pages: u32,
}

impl IndexStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from an index.
    pub fn from_index(index: &PageIndex) -> Self {
        let mut stats = Self::new();
        for chapter_id in index.chapter_ids() {
            stats.add_chapter(index, chapter_id);
        }
        stats
    }

    /// Record the source text size so unindexed bytes can be reported.
    pub fn with_source_bytes(mut self, bytes: u64) -> Self {
        self.source_bytes = bytes;
        self
    }

    /// Bytes of source text not assigned to any page: front matter, markers
    /// and their separators.
    pub fn unindexed_bytes(&self) -> u64 {
        self.source_bytes.saturating_sub(self.indexed_bytes)
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &IndexStats) {
        self.chapter_count += other.chapter_count;
        self.page_count += other.page_count;
        self.indexed_bytes += other.indexed_bytes;
        self.source_bytes += other.source_bytes;
        self.duplicate_pages += other.duplicate_pages;
        self.out_of_order_pages += other.out_of_order_pages;
        self.empty_pages += other.empty_pages;
    }

    fn add_chapter(&mut self, index: &PageIndex, chapter_id: &str) {
        self.chapter_count += 1;

        let mut seen = HashSet::new();
        let mut previous: Option<u32> = None;
        for page in index.pages_in_chapter(chapter_id) {
            self.page_count += 1;
            self.indexed_bytes += page.len() as u64;
            if page.is_empty() {
                self.empty_pages += 1;
            }
            if !seen.insert(page.page_number) {
                self.duplicate_pages += 1;
            }
            if previous.is_some_and(|prev| page.page_number < prev) {
                self.out_of_order_pages += 1;
            }
            previous = Some(page.page_number);
        }
    }
}
