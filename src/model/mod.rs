//! Book model types.
//!
//! Chapters are the raw input, pages are derived from them by the indexer,
//! and emphasis runs are what the inline tokenizer hands to a renderer.

mod chapter;
mod emphasis;
mod page;

pub use chapter::Chapter;
pub use emphasis::{runs_text, EmphasisRun};
pub use page::Page;
