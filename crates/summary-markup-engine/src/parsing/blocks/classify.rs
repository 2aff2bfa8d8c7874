use crate::parsing::lines::LineRef;

use super::kinds::{BulletList, Heading, OrderedList, Paragraph};

/// What a single line looks like, judged without surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only.
    Blank,
    /// A heading line with its level and text after the marker.
    Heading { level: u8, text: &'a str },
    /// An unordered list item with the bullet stripped.
    Bullet { text: &'a str },
    /// An ordered list item with the number stripped.
    Ordered { text: &'a str },
    /// Any other line, right-trimmed, for paragraphs.
    Text { text: &'a str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based line index in the normalized input.
    pub line: usize,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the segmentation phase.
pub struct SummaryLineClassifier;

impl SummaryLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Openers are tried on the trimmed line in order: heading, bullet,
    /// numbered item. A line matching none is paragraph text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.text.trim();

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some((level, text)) = Heading::parse(trimmed) {
            LineKind::Heading { level, text }
        } else if let Some(text) = BulletList::item_text(trimmed) {
            LineKind::Bullet { text }
        } else if let Some(text) = OrderedList::item_text(trimmed) {
            LineKind::Ordered { text }
        } else {
            LineKind::Text {
                text: Paragraph::line_text(lr.text),
            }
        };

        LineClass {
            line: lr.index,
            kind,
        }
    }
}
