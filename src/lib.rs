//! # pagemark
//!
//! Page indexing and inline emphasis for long-form book text.
//!
//! Chapters carry their printed page boundaries inline as
//! `--- *Page 66* ---` markers. This library turns that text into
//! addressable logical pages, answers lookups by id, page number and text
//! offset, and splits short passages with `*emphasis*` markup into runs a
//! renderer can style directly.
//!
//! ## Quick Start
//!
//! ```
//! use pagemark::{build_page_index, tokenize_emphasis};
//!
//! let text = "--- *Page 66* ---\n\nHello world\n\n--- *Page 67* ---\n\nSecond page";
//! let pages = build_page_index("chapter-5", text);
//! assert_eq!(pages[0].content, "Hello world");
//!
//! let runs = tokenize_emphasis("Keep *coming* back");
//! assert!(runs[1].emphasis);
//! ```
//!
//! ## Features
//!
//! - **Page index**: lookups by id, by chapter and number, by roman label,
//!   and by character offset
//! - **Page data**: generate JSON once, reload it, and detect drift against
//!   a fresh regeneration
//! - **Inline emphasis**: `*text*` or `_text_` spans, configurable per caller
//! - **Search**: whole-word search with page attribution and excerpts
//! - **Parallel indexing**: uses Rayon for multi-chapter books

pub mod error;
pub mod index;
pub mod model;
pub mod render;
pub mod search;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use index::{
    arabic_to_roman, build_page_index, format_page_number, is_page_marker, roman_to_arabic,
    verify, IndexOptions, NumeralStyle, PageDrift, PageIndex,
};
pub use model::{Chapter, EmphasisRun, Page};
pub use render::{
    tokenize_emphasis, tokenize_emphasis_with, Delimiters, EmphasisTokenizer, IndexStats,
    JsonFormat, RenderOptions,
};
pub use search::{SearchHit, SearchOptions};

use std::path::Path;

/// Index every chapter file in a directory.
///
/// # Example
///
/// ```no_run
/// use pagemark::index_dir;
///
/// let index = index_dir("content/bigbook").unwrap();
/// println!("Pages: {}", index.len());
/// ```
pub fn index_dir<P: AsRef<Path>>(dir: P) -> Result<PageIndex> {
    Ok(Pagemark::new().load_dir(dir)?.index)
}

/// Index a single chapter file; the file stem is the chapter id.
pub fn index_file<P: AsRef<Path>>(path: P) -> Result<PageIndex> {
    let chapter = Chapter::from_file(path)?;
    let mut index = PageIndex::new();
    index.add_chapter(&chapter.id, &chapter.text);
    Ok(index)
}

/// Generate JSON page data for every chapter file in a directory.
///
/// # Example
///
/// ```no_run
/// use pagemark::{generate_page_data, JsonFormat};
///
/// let json = generate_page_data("content/bigbook", JsonFormat::Pretty).unwrap();
/// std::fs::write("pageData.json", json).unwrap();
/// ```
pub fn generate_page_data<P: AsRef<Path>>(dir: P, format: JsonFormat) -> Result<String> {
    let index = index_dir(dir)?;
    render::to_json(&index, format)
}

/// Builder for loading and indexing a book.
///
/// # Example
///
/// ```no_run
/// use pagemark::{Delimiters, NumeralStyle, Pagemark};
///
/// let book = Pagemark::new()
///     .sequential()
///     .with_delimiters(Delimiters::AsteriskOrUnderscore)
///     .with_numeral_style(NumeralStyle::Roman)
///     .load_dir("content/bigbook")?;
///
/// if let Some(page) = book.index.page_by_label("foreword", "xiii") {
///     println!("{}", book.page_text(page));
/// }
/// # Ok::<(), pagemark::Error>(())
/// ```
pub struct Pagemark {
    index_options: IndexOptions,
    render_options: RenderOptions,
}

impl Pagemark {
    /// Create a new Pagemark builder.
    pub fn new() -> Self {
        Self {
            index_options: IndexOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Disable parallel indexing.
    pub fn sequential(mut self) -> Self {
        self.index_options = self.index_options.sequential();
        self
    }

    /// Set the accepted chapter file extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.index_options = self.index_options.with_extensions(extensions);
        self
    }

    /// Set the emphasis delimiters used when rendering page text.
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.render_options = self.render_options.with_delimiters(delimiters);
        self
    }

    /// Keep page-label paragraphs in rendered text.
    pub fn keep_page_markers(mut self) -> Self {
        self.render_options = self.render_options.with_skip_page_markers(false);
        self
    }

    /// Set the numeral style for page headings.
    pub fn with_numeral_style(mut self, style: NumeralStyle) -> Self {
        self.render_options = self.render_options.with_numeral_style(style);
        self
    }

    /// Load and index every chapter file in a directory.
    pub fn load_dir<P: AsRef<Path>>(self, dir: P) -> Result<Book> {
        let chapters = source::load_chapters(dir, &self.index_options)?;
        Ok(self.from_chapters(chapters))
    }

    /// Index chapters already in memory.
    pub fn from_chapters(self, chapters: Vec<Chapter>) -> Book {
        let index = PageIndex::build(&chapters, &self.index_options);
        Book {
            chapters,
            index,
            render_options: self.render_options,
        }
    }
}

impl Default for Pagemark {
    fn default() -> Self {
        Self::new()
    }
}

/// Chapters together with their page index.
pub struct Book {
    /// Source chapters, in load order
    pub chapters: Vec<Chapter>,
    /// Pages derived from the chapters
    pub index: PageIndex,
    render_options: RenderOptions,
}

impl Book {
    /// Look up a chapter's source text.
    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    /// Render a page as plain text with its heading.
    pub fn page_text(&self, page: &Page) -> String {
        let body = render::to_text(&page.content, &self.render_options);
        format!(
            "{}\n\n{}",
            render::page_heading(page, &self.render_options),
            body
        )
    }

    /// Render a page as paragraphs of emphasis runs.
    pub fn page_paragraphs(&self, page: &Page) -> Vec<Vec<EmphasisRun>> {
        render::paragraphs(&page.content, &self.render_options)
    }

    /// Search page text.
    pub fn search(&self, term: &str, options: &SearchOptions) -> Result<Vec<SearchHit>> {
        search::search(&self.index, term, options)
    }

    /// Statistics over the index and its source text.
    pub fn stats(&self) -> IndexStats {
        let source_bytes = self.chapters.iter().map(|c| c.len() as u64).sum();
        IndexStats::from_index(&self.index).with_source_bytes(source_bytes)
    }

    /// Serialize the page index as JSON page data.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.index, format)
    }

    /// Compare stored page data against this book's pages.
    pub fn verify(&self, stored: &PageIndex) -> Vec<PageDrift> {
        index::verify(stored, &self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapters() -> Vec<Chapter> {
        vec![
            Chapter::new(
                "foreword",
                "FOREWORD\n\n--- *Page 13* ---\n\nWe, of *Alcoholics Anonymous*, are more than one hundred men",
            ),
            Chapter::new(
                "chapter-5",
                "--- *Page 58* ---\n\nRarely have we seen a person fail\n\n--- *Page 59* ---\n\nRemember that we deal with alcohol",
            ),
        ]
    }

    #[test]
    fn test_pagemark_builder() {
        let builder = Pagemark::new()
            .sequential()
            .with_delimiters(Delimiters::AsteriskOrUnderscore)
            .keep_page_markers()
            .with_numeral_style(NumeralStyle::Roman);

        assert!(!builder.index_options.parallel);
        assert_eq!(
            builder.render_options.delimiters,
            Delimiters::AsteriskOrUnderscore
        );
        assert!(!builder.render_options.skip_page_markers);
        assert_eq!(builder.render_options.numeral_style, NumeralStyle::Roman);
    }

    #[test]
    fn test_pagemark_builder_default() {
        let builder = Pagemark::default();
        assert!(builder.index_options.parallel);
        assert!(builder.render_options.skip_page_markers);
    }

    #[test]
    fn test_book_page_text() {
        let book = Pagemark::new()
            .with_numeral_style(NumeralStyle::Roman)
            .from_chapters(chapters());
        let page = book.index.page_by_label("foreword", "xiii").unwrap();

        assert_eq!(
            book.page_text(page),
            "— Page xiii —\n\nWe, of Alcoholics Anonymous, are more than one hundred men"
        );
    }

    #[test]
    fn test_book_stats() {
        let book = Pagemark::new().from_chapters(chapters());
        let stats = book.stats();
        assert_eq!(stats.chapter_count, 2);
        assert_eq!(stats.page_count, 3);
        assert!(stats.unindexed_bytes() > 0);
    }

    #[test]
    fn test_book_verify_round_trip() {
        let book = Pagemark::new().from_chapters(chapters());
        let json = book.to_json(JsonFormat::Compact).unwrap();
        let stored = render::from_json(&json).unwrap();
        assert!(book.verify(&stored).is_empty());
    }

    #[test]
    fn test_book_chapter_lookup() {
        let book = Pagemark::new().from_chapters(chapters());
        assert!(book.chapter("chapter-5").is_some());
        assert!(book.chapter("chapter-6").is_none());
    }

    #[test]
    fn test_index_dir_missing() {
        assert!(matches!(
            index_dir("/nonexistent/pagemark"),
            Err(Error::Io(_))
        ));
    }
}
