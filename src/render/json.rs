//! JSON page data: the output of an offline generator run.

use crate::error::{Error, Result};
use crate::index::PageIndex;
use crate::model::Page;
use serde::{Deserialize, Serialize};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageDataRef<'a> {
    page_count: usize,
    pages: &'a [Page],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageData {
    #[serde(default)]
    page_count: Option<usize>,
    pages: Vec<Page>,
}

/// Serialize an index as page data.
///
/// `startIndex` and `endIndex` are UTF-8 byte offsets into the chapter text,
/// not UTF-16 code unit or character counts. They agree with other
/// conventions only for ASCII text; consumers slicing non-ASCII chapters in
/// another runtime must convert.
///
/// ```
/// use pagemark::{render::to_json, JsonFormat, PageIndex};
///
/// let mut index = PageIndex::new();
/// index.add_chapter("préface", "Avant-propos\n\n--- *Page 1* ---\n\nÉté");
/// let json = to_json(&index, JsonFormat::Compact).unwrap();
///
/// // "Été" is 3 characters but 5 bytes.
/// assert!(json.contains("\"startIndex\":32,\"endIndex\":37"));
/// ```
pub fn to_json(index: &PageIndex, format: JsonFormat) -> Result<String> {
    pages_to_json(index.pages(), format)
}

/// Serialize a page list as page data.
pub fn pages_to_json(pages: &[Page], format: JsonFormat) -> Result<String> {
    let data = PageDataRef {
        page_count: pages.len(),
        pages,
    };
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&data)?,
        JsonFormat::Compact => serde_json::to_string(&data)?,
    };
    Ok(json)
}

/// Load page data back into an index.
///
/// Every record is checked for internal consistency, and `pageCount`, when
/// present, must match the number of records.
pub fn from_json(json: &str) -> Result<PageIndex> {
    let data: PageData = serde_json::from_str(json)?;

    if let Some(count) = data.page_count {
        if count != data.pages.len() {
            return Err(Error::InvalidPageData(format!(
                "pageCount is {} but {} pages are present",
                count,
                data.pages.len()
            )));
        }
    }
    for page in &data.pages {
        page.validate().map_err(Error::InvalidPageData)?;
    }

    Ok(PageIndex::from_pages(data.pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PageIndex {
        let mut index = PageIndex::new();
        index.add_chapter(
            "chapter-5",
            "--- *Page 66* ---\n\nHello world\n\n--- *Page 67* ---\n\nSecond page",
        );
        index
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"pageCount\": 2"));
        assert!(json.contains("\"id\": \"chapter-5-page-66\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_from_json_restores_index() {
        let index = sample();
        let json = to_json(&index, JsonFormat::Compact).unwrap();
        let restored = from_json(&json).unwrap();

        assert_eq!(restored.pages(), index.pages());
        assert_eq!(
            restored.page_by_number("chapter-5", 67).unwrap().content,
            "Second page"
        );
    }

    #[test]
    fn test_from_json_rejects_bad_span() {
        let json = r#"{"pages":[{"id":"c-page-1","chapterId":"c","pageNumber":1,"content":"abc","startIndex":0,"endIndex":9}]}"#;
        assert!(matches!(from_json(json), Err(Error::InvalidPageData(_))));
    }

    #[test]
    fn test_from_json_rejects_count_mismatch() {
        let json = r#"{"pageCount":3,"pages":[]}"#;
        assert!(matches!(from_json(json), Err(Error::InvalidPageData(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(from_json("{"), Err(Error::Json(_))));
    }
}
