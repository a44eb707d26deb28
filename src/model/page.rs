//! Page-level types.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A logical page: an addressable slice of a chapter's text.
///
/// Offsets are byte offsets into the chapter text, so
/// `&text[page.start_index..page.end_index] == page.content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique id, `<chapter_id>-page-<page_number>`
    pub id: String,

    /// Owning chapter
    pub chapter_id: String,

    /// Page number as printed in the marker
    pub page_number: u32,

    /// Page text, marker and its blank-line separator excluded
    pub content: String,

    /// Offset of the first content byte in the chapter text
    pub start_index: usize,

    /// Offset one past the last content byte
    pub end_index: usize,
}

impl Page {
    /// Create a page whose content starts at `start_index` in the chapter text.
    pub fn new(
        chapter_id: impl Into<String>,
        page_number: u32,
        content: impl Into<String>,
        start_index: usize,
    ) -> Self {
        let chapter_id = chapter_id.into();
        let content = content.into();
        Self {
            id: Self::page_id(&chapter_id, page_number),
            end_index: start_index + content.len(),
            chapter_id,
            page_number,
            content,
            start_index,
        }
    }

    /// Build the id for a page of a chapter.
    pub fn page_id(chapter_id: &str, page_number: u32) -> String {
        format!("{}-page-{}", chapter_id, page_number)
    }

    /// Check whether `offset` falls inside this page.
    ///
    /// Both ends are inclusive, so the offset just past the last content byte
    /// still belongs to the page.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start_index && offset <= self.end_index
    }

    /// Byte span of the content within the chapter text.
    pub fn span(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the page has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check the record's internal consistency.
    ///
    /// Returns a description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_index > self.end_index {
            return Err(format!(
                "{}: startIndex {} is past endIndex {}",
                self.id, self.start_index, self.end_index
            ));
        }
        if self.end_index - self.start_index != self.content.len() {
            return Err(format!(
                "{}: span {}..{} does not match content length {}",
                self.id,
                self.start_index,
                self.end_index,
                self.content.len()
            ));
        }
        let expected = Self::page_id(&self.chapter_id, self.page_number);
        if self.id != expected {
            return Err(format!("{}: id should be {}", self.id, expected));
        }
        Ok(())
    }
}
