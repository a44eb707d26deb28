//! Lookup structure over the pages of one or more chapters.

use super::numeral::roman_to_arabic;
use super::options::IndexOptions;
use super::scanner::build_page_index;
use crate::model::{Chapter, Page};
use rayon::prelude::*;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Pages of a single chapter, by slot in `PageIndex::pages`.
#[derive(Debug, Clone, Default)]
struct ChapterEntry {
    slots: Vec<usize>,
    by_number: HashMap<u32, usize>,
}

/// Pages of a book, addressable by id, by chapter and page number, and by
/// offset into a chapter's text.
///
/// When ids or page numbers repeat, lookups resolve to the page indexed
/// first.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: Vec<Page>,
    by_id: HashMap<String, usize>,
    chapters: HashMap<String, ChapterEntry>,
    chapter_order: Vec<String>,
}

impl PageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a set of chapters.
    ///
    /// Output is identical whether or not chapters are scanned in parallel:
    /// pages keep chapter order, then scan order.
    pub fn build(chapters: &[Chapter], options: &IndexOptions) -> Self {
        let scanned: Vec<Vec<Page>> = if options.parallel && chapters.len() > 1 {
            chapters
                .par_iter()
                .map(|c| build_page_index(&c.id, &c.text))
                .collect()
        } else {
            chapters
                .iter()
                .map(|c| build_page_index(&c.id, &c.text))
                .collect()
        };

        let mut index = Self::new();
        for chapter in chapters {
            index.chapter_entry(&chapter.id);
        }
        for page in scanned.into_iter().flatten() {
            index.push(page);
        }
        index
    }

    /// Build an index from already derived pages, keeping their order.
    pub fn from_pages<I: IntoIterator<Item = Page>>(pages: I) -> Self {
        let mut index = Self::new();
        for page in pages {
            index.push(page);
        }
        index
    }

    /// Index a chapter's text, replacing any pages previously indexed for it.
    ///
    /// Returns the number of pages found.
    pub fn add_chapter(&mut self, chapter_id: &str, text: &str) -> usize {
        if self.chapters.contains_key(chapter_id) {
            log::debug!("{}: replacing previously indexed pages", chapter_id);
            self.remove_chapter(chapter_id);
        }

        let pages = build_page_index(chapter_id, text);
        let count = pages.len();
        if count == 0 {
            // Keep the chapter known even when it has no markers.
            self.chapter_entry(chapter_id);
        }
        for page in pages {
            self.push(page);
        }
        count
    }

    /// Drop every page of a chapter. Returns the number of pages removed.
    pub fn remove_chapter(&mut self, chapter_id: &str) -> usize {
        let before = self.pages.len();
        let kept: Vec<Page> = std::mem::take(&mut self.pages)
            .into_iter()
            .filter(|p| p.chapter_id != chapter_id)
            .collect();
        let order: Vec<String> = std::mem::take(&mut self.chapter_order)
            .into_iter()
            .filter(|c| c != chapter_id)
            .collect();

        self.by_id.clear();
        self.chapters.clear();
        for id in &order {
            self.chapter_entry(id);
        }
        for page in kept {
            self.push(page);
        }
        before - self.pages.len()
    }

    /// Look up a page by its id.
    pub fn page_by_id(&self, id: &str) -> Option<&Page> {
        self.by_id.get(id).map(|&slot| &self.pages[slot])
    }

    /// Look up a page by chapter and page number.
    pub fn page_by_number(&self, chapter_id: &str, page_number: u32) -> Option<&Page> {
        self.chapters
            .get(chapter_id)?
            .by_number
            .get(&page_number)
            .map(|&slot| &self.pages[slot])
    }

    /// Look up a page by a decimal or roman label such as `"66"` or `"xvii"`.
    pub fn page_by_label(&self, chapter_id: &str, label: &str) -> Option<&Page> {
        self.page_by_number(chapter_id, roman_to_arabic(label)?)
    }

    /// Find the page whose span contains `offset` in the chapter's text.
    ///
    /// Spans are inclusive on both ends. Offsets in unindexed text (front
    /// matter, marker lines) find nothing.
    pub fn page_for_position(&self, chapter_id: &str, offset: usize) -> Option<&Page> {
        self.pages_in_chapter(chapter_id)
            .find(|page| page.contains(offset))
    }

    /// Pages of one chapter in scan order.
    pub fn pages_in_chapter<'a>(&'a self, chapter_id: &str) -> impl Iterator<Item = &'a Page> + 'a {
        self.chapters
            .get(chapter_id)
            .map(|entry| entry.slots.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&slot| &self.pages[slot])
    }

    /// Chapter ids in the order they were first indexed.
    pub fn chapter_ids(&self) -> impl Iterator<Item = &str> {
        self.chapter_order.iter().map(String::as_str)
    }

    /// Check whether a chapter has been indexed.
    pub fn contains_chapter(&self, chapter_id: &str) -> bool {
        self.chapters.contains_key(chapter_id)
    }

    /// Lowest and highest page number across the index.
    pub fn page_range(&self) -> Option<RangeInclusive<u32>> {
        let min = self.pages.iter().map(|p| p.page_number).min()?;
        let max = self.pages.iter().map(|p| p.page_number).max()?;
        Some(min..=max)
    }

    /// All pages, in chapter order then scan order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Iterate over all pages.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the index holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of chapters known to the index.
    pub fn chapter_count(&self) -> usize {
        self.chapter_order.len()
    }

    fn push(&mut self, page: Page) {
        let slot = self.pages.len();
        self.by_id.entry(page.id.clone()).or_insert(slot);

        let entry = self.chapter_entry(&page.chapter_id);
        entry.slots.push(slot);
        if entry.by_number.contains_key(&page.page_number) {
            log::warn!(
                "{}: duplicate page number {}, lookups keep the first",
                page.chapter_id,
                page.page_number
            );
        } else {
            entry.by_number.insert(page.page_number, slot);
        }

        self.pages.push(page);
    }

    fn chapter_entry(&mut self, chapter_id: &str) -> &mut ChapterEntry {
        if !self.chapters.contains_key(chapter_id) {
            self.chapter_order.push(chapter_id.to_string());
        }
        self.chapters.entry(chapter_id.to_string()).or_default()
    }
}

impl<'a> IntoIterator for &'a PageIndex {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
