use std::sync::OnceLock;

use regex::Regex;

/// Heading block type with owned marker knowledge.
///
/// A heading line is one to six `#` characters, a single space, then the
/// heading text. Seven or more `#` never form a heading.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest level a heading line can open.
    pub const MAX_LEVEL: u8 = 6;

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| {
            let marker = regex::escape(Self::MARKER.encode_utf8(&mut [0; 4]));
            Regex::new(&format!("^((?:{marker}){{1,{}}}) (.*)$", Self::MAX_LEVEL))
                .expect("Invalid heading regex")
        })
    }

    /// Splits a trimmed line into `(level, text)` if it is a heading line.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let caps = Self::pattern().captures(trimmed)?;
        let marks = caps.get(1)?.as_str();
        let text = caps.get(2)?.as_str();
        // The quantifier caps the count at MAX_LEVEL, so the cast cannot truncate.
        let level = marks.len() / Self::MARKER.len_utf8();
        Some((level as u8, text))
    }
}
