//! Rendering module: inline emphasis, page text, page data and statistics.

mod emphasis;
mod json;
mod options;
mod result;
mod text;

pub use emphasis::{tokenize_emphasis, tokenize_emphasis_with, Delimiters, EmphasisTokenizer};
pub use json::{from_json, pages_to_json, to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::IndexStats;
pub use text::{page_heading, paragraphs, to_text};
