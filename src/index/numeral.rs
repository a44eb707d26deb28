//! Page number display: arabic and lowercase roman numerals.

use serde::{Deserialize, Serialize};

/// Largest value with a standard roman form.
pub const MAX_ROMAN: u32 = 3999;

const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// How page numbers are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralStyle {
    /// Decimal digits, as printed in body pages
    #[default]
    Arabic,
    /// Lowercase roman numerals, as printed in front matter
    Roman,
}

/// Convert a number to lowercase roman numerals.
///
/// Values outside `1..=3999` come back as their decimal string.
///
/// ```
/// use pagemark::arabic_to_roman;
///
/// assert_eq!(arabic_to_roman(1994), "mcmxciv");
/// assert_eq!(arabic_to_roman(4000), "4000");
/// ```
pub fn arabic_to_roman(num: u32) -> String {
    if !(1..=MAX_ROMAN).contains(&num) {
        return num.to_string();
    }

    let mut result = String::new();
    let mut remaining = num;
    for (value, numeral) in ROMAN_NUMERALS {
        while remaining >= value {
            result.push_str(numeral);
            remaining -= value;
        }
    }
    result
}

/// Parse a page label written in decimal or roman numerals.
///
/// Roman labels are case-insensitive and read with subtractive pairs
/// (`xiv` is 14). Returns `None` for empty labels or labels containing
/// anything but decimal digits or roman letters.
pub fn roman_to_arabic(label: &str) -> Option<u32> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    if label.bytes().all(|b| b.is_ascii_digit()) {
        return label.parse().ok();
    }

    let values = label
        .chars()
        .map(roman_value)
        .collect::<Option<Vec<u32>>>()?;

    let mut total: u32 = 0;
    let mut i = 0;
    while i < values.len() {
        let current = values[i];
        match values.get(i + 1) {
            Some(&next) if current < next => {
                total = total.checked_add(next - current)?;
                i += 2;
            }
            _ => {
                total = total.checked_add(current)?;
                i += 1;
            }
        }
    }
    Some(total)
}

fn roman_value(c: char) -> Option<u32> {
    match c.to_ascii_lowercase() {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}

/// Format a page number for display in the given style.
pub fn format_page_number(page_number: u32, style: NumeralStyle) -> String {
    match style {
        NumeralStyle::Arabic => page_number.to_string(),
        NumeralStyle::Roman => arabic_to_roman(page_number),
    }
}
