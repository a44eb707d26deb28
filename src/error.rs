//! Error types for pagemark library.

use std::io;
use thiserror::Error;

/// Result type alias for pagemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, exporting or searching book text.
///
/// Indexing, lookups and tokenizing never fail; these variants only cover the
/// I/O and serialization edges around them.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Page data could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A chapter file name does not yield a usable chapter id.
    #[error("Invalid chapter id: {0}")]
    InvalidChapterId(String),

    /// A deserialized page record violates a page invariant.
    #[error("Invalid page data: {0}")]
    InvalidPageData(String),

    /// A search pattern failed to compile.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A directory contained no chapter files.
    #[error("No chapter files found in {0}")]
    NoChapters(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
