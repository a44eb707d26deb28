//! Chapter source text.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw text of one chapter, identified by an opaque id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter id (e.g., "chapter-5")
    pub id: String,

    /// Full chapter text including page markers
    pub text: String,
}

impl Chapter {
    /// Create a chapter from an id and its text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Read a chapter from a file; the file stem becomes the chapter id.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::InvalidChapterId(path.display().to_string()))?;
        let text = fs::read_to_string(path)?;
        Ok(Self::new(id, text))
    }

    /// Text length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the chapter has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_new() {
        let chapter = Chapter::new("chapter-1", "--- *Page 1* ---\n\nText");
        assert_eq!(chapter.id, "chapter-1");
        assert!(!chapter.is_empty());
    }

    #[test]
    fn test_from_file_uses_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctors-opinion.md");
        fs::write(&path, "--- *Page 25* ---\n\nWe of Alcoholics Anonymous").unwrap();

        let chapter = Chapter::from_file(&path).unwrap();
        assert_eq!(chapter.id, "doctors-opinion");
        assert!(chapter.text.starts_with("--- *Page 25*"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Chapter::from_file("/nonexistent/chapter-1.md");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
