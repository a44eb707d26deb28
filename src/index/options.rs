//! Indexing options and configuration.

/// Options for indexing chapters.
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Whether to index chapters in parallel
    pub parallel: bool,

    /// File extensions (lowercase, no leading dot) accepted as chapter files
    pub extensions: Vec<String>,
}

impl IndexOptions {
    /// Create new index options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the accepted chapter file extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Check if a file extension is accepted.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.extensions.iter().any(|e| *e == ext_lower)
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            extensions: vec!["md".to_string(), "txt".to_string()],
        }
    }
}
