use std::sync::OnceLock;

use regex::Regex;

/// Unordered list type with owned bullet markers.
///
/// An item line is a bullet marker, a single space, then the item text.
pub struct BulletList;

impl BulletList {
    /// The accepted bullet characters.
    pub const MARKERS: [char; 2] = ['-', '*'];

    fn pattern() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| {
            let class: String = Self::MARKERS
                .iter()
                .map(|m| regex::escape(m.encode_utf8(&mut [0; 4])))
                .collect();
            Regex::new(&format!("^[{class}] (.*)$")).expect("Invalid bullet regex")
        })
    }

    /// Returns the item text of a trimmed bullet line, marker stripped.
    pub fn item_text(trimmed: &str) -> Option<&str> {
        Self::pattern()
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
