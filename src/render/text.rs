//! Paragraph and plain text rendering for pages.

use crate::index::{format_page_number, is_page_marker};
use crate::model::{runs_text, EmphasisRun, Page};
use regex::Regex;
use std::sync::LazyLock;

use super::{EmphasisTokenizer, RenderOptions};

static PARAGRAPH_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Split content into paragraphs of emphasis runs.
///
/// Paragraphs are separated by blank lines and trimmed. Empty paragraphs are
/// dropped, as are page-label paragraphs when `skip_page_markers` is set.
pub fn paragraphs(content: &str, options: &RenderOptions) -> Vec<Vec<EmphasisRun>> {
    let tokenizer = EmphasisTokenizer::new(options.delimiters);

    PARAGRAPH_BREAK_RE
        .split(content)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter(|p| !(options.skip_page_markers && is_page_marker(p)))
        .map(|p| tokenizer.tokenize(p))
        .collect()
}

/// Render content as plain text: emphasis delimiters removed, paragraphs
/// separated by one blank line.
pub fn to_text(content: &str, options: &RenderOptions) -> String {
    paragraphs(content, options)
        .iter()
        .map(|runs| runs_text(runs))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Heading line for a page, e.g. `— Page xvii —`.
pub fn page_heading(page: &Page, options: &RenderOptions) -> String {
    format!(
        "— Page {} —",
        format_page_number(page.page_number, options.numeral_style)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::NumeralStyle;

    #[test]
    fn test_paragraphs_skip_markers() {
        let content = "**Pages xiii–xiv**\n\nWe, of *Alcoholics Anonymous*, are\n\n  \n\nmore than one hundred";
        let paras = paragraphs(content, &RenderOptions::default());

        assert_eq!(paras.len(), 2);
        assert_eq!(
            paras[0],
            vec![
                EmphasisRun::plain("We, of "),
                EmphasisRun::emphasized("Alcoholics Anonymous"),
                EmphasisRun::plain(", are"),
            ]
        );
        assert_eq!(paras[1], vec![EmphasisRun::plain("more than one hundred")]);
    }

    #[test]
    fn test_paragraphs_keep_markers() {
        let options = RenderOptions::new().with_skip_page_markers(false);
        let paras = paragraphs("--- *Page 1* ---\n\nBody", &options);
        assert_eq!(paras.len(), 2);
    }

    #[test]
    fn test_to_text() {
        let options = RenderOptions::new().with_underscore();
        let text = to_text("Keep *coming*\n\nback _often_", &options);
        assert_eq!(text, "Keep coming\n\nback often");
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text("", &RenderOptions::default()), "");
    }

    #[test]
    fn test_page_heading() {
        let page = Page::new("foreword", 17, "text", 0);
        let roman = RenderOptions::new().with_numeral_style(NumeralStyle::Roman);
        assert_eq!(page_heading(&page, &roman), "— Page xvii —");
        assert_eq!(page_heading(&page, &RenderOptions::default()), "— Page 17 —");
    }
}
