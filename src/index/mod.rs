//! Page indexing module.

mod marker;
mod numeral;
mod options;
mod page_index;
mod scanner;
mod verify;

pub use marker::is_page_marker;
pub use numeral::{arabic_to_roman, format_page_number, roman_to_arabic, NumeralStyle, MAX_ROMAN};
pub use options::IndexOptions;
pub use page_index::PageIndex;
pub use scanner::build_page_index;
pub use verify::{verify, PageDrift};
