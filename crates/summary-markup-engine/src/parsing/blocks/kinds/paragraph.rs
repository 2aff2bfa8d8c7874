/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. They are the default block when a
/// non-blank line matches no other opener, and they keep one inline
/// sequence per source line instead of reflowing.
pub struct Paragraph;

impl Paragraph {
    /// Prepares a raw paragraph line for inline parsing.
    ///
    /// Trailing whitespace is dropped; leading whitespace is content.
    pub fn line_text(raw: &str) -> &str {
        raw.trim_end()
    }
}
