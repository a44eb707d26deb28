//! Loading chapter text from disk.

use crate::error::{Error, Result};
use crate::index::IndexOptions;
use crate::model::Chapter;
use std::fs;
use std::path::{Path, PathBuf};

/// Read every chapter file in a directory.
///
/// Files are taken in file-name order so repeated loads index identically.
/// Files whose extension is not accepted by `options` are skipped;
/// subdirectories are not descended into.
pub fn load_chapters<P: AsRef<Path>>(dir: P, options: &IndexOptions) -> Result<Vec<Chapter>> {
    let dir = dir.as_ref();
    let files = chapter_files(dir, options)?;
    if files.is_empty() {
        return Err(Error::NoChapters(dir.display().to_string()));
    }

    let chapters = files
        .iter()
        .map(Chapter::from_file)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("loaded {} chapters from {}", chapters.len(), dir.display());
    Ok(chapters)
}

/// List chapter files in a directory, sorted by file name.
pub fn chapter_files<P: AsRef<Path>>(dir: P, options: &IndexOptions) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let accepted = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| options.accepts_extension(e));
        if accepted {
            files.push(path);
        } else {
            log::warn!("skipping non-chapter file {}", path.display());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_chapters_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chapter-2.md"), "--- *Page 17* ---\n\nTwo").unwrap();
        fs::write(dir.path().join("chapter-1.txt"), "--- *Page 1* ---\n\nOne").unwrap();
        fs::write(dir.path().join("notes.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("drafts.md")).unwrap();

        let chapters = load_chapters(dir.path(), &IndexOptions::default()).unwrap();
        let ids: Vec<&str> = chapters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["chapter-1", "chapter-2"]);
    }

    #[test]
    fn test_load_chapters_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_chapters(dir.path(), &IndexOptions::default());
        assert!(matches!(result, Err(Error::NoChapters(_))));
    }

    #[test]
    fn test_load_chapters_custom_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chapter-1.md"), "").unwrap();
        fs::write(dir.path().join("chapter-1.book"), "").unwrap();

        let options = IndexOptions::new().with_extensions(["book"]);
        let chapters = load_chapters(dir.path(), &options).unwrap();
        assert_eq!(chapters.len(), 1);
    }

    #[test]
    fn test_missing_dir() {
        let result = load_chapters("/nonexistent/pagemark", &IndexOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
