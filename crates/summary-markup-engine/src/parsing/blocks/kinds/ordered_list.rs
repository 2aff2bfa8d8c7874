use std::sync::OnceLock;

use regex::Regex;

/// Ordered list type with owned delimiter.
///
/// An item line is one or more ASCII digits, a period, a single space,
/// then the item text. The number itself is discarded.
pub struct OrderedList;

impl OrderedList {
    /// The character following the item number.
    pub const DELIMITER: char = '.';

    fn pattern() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX.get_or_init(|| {
            let delim = regex::escape(Self::DELIMITER.encode_utf8(&mut [0; 4]));
            Regex::new(&format!("^[0-9]+{delim} (.*)$")).expect("Invalid ordered list regex")
        })
    }

    /// Returns the item text of a trimmed numbered line, number stripped.
    pub fn item_text(trimmed: &str) -> Option<&str> {
        Self::pattern()
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
