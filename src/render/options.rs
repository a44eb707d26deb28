//! Rendering options and configuration.

use super::Delimiters;
use crate::index::NumeralStyle;

/// Options for rendering page content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Which characters delimit emphasized spans
    pub delimiters: Delimiters,

    /// Drop paragraphs that are only a page label
    pub skip_page_markers: bool,

    /// How page numbers are displayed in headings
    pub numeral_style: NumeralStyle,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emphasis delimiters.
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Accept `_text_` as well as `*text*`.
    pub fn with_underscore(mut self) -> Self {
        self.delimiters = Delimiters::AsteriskOrUnderscore;
        self
    }

    /// Enable or disable skipping of page-label paragraphs.
    pub fn with_skip_page_markers(mut self, skip: bool) -> Self {
        self.skip_page_markers = skip;
        self
    }

    /// Set the numeral style for page numbers.
    pub fn with_numeral_style(mut self, style: NumeralStyle) -> Self {
        self.numeral_style = style;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::Asterisk,
            skip_page_markers: true,
            numeral_style: NumeralStyle::Arabic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_underscore()
            .with_skip_page_markers(false)
            .with_numeral_style(NumeralStyle::Roman);

        assert_eq!(options.delimiters, Delimiters::AsteriskOrUnderscore);
        assert!(!options.skip_page_markers);
        assert_eq!(options.numeral_style, NumeralStyle::Roman);
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.delimiters, Delimiters::Asterisk);
        assert!(options.skip_page_markers);
        assert_eq!(options.numeral_style, NumeralStyle::Arabic);
    }
}
