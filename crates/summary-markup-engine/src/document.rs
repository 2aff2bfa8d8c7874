//! # Document Model
//!
//! The parsed form of a narrative summary: an ordered list of [`Block`]s,
//! each owning one or more inline sequences of [`InlineNode`]s.
//!
//! The tree is built in a single pass by [`crate::parsing::segment`] and is
//! read-only afterwards. Every node owns its text outright, so a `Document`
//! can be moved across threads or serialized without borrowing the source.

use serde::{Deserialize, Serialize};

/// An ordered run of inline spans taken from one source line.
pub type InlineSequence = Vec<InlineNode>;

/// A styled or plain run of text within a single line.
///
/// Text is stored with its delimiters stripped and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum InlineNode {
    /// Text outside any recognized span.
    PlainText(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*`
    Italic(String),
    /// `` `code` ``
    Code(String),
}

impl InlineNode {
    /// Returns the literal text of this node (delimiters already stripped).
    pub fn text(&self) -> &str {
        match self {
            InlineNode::PlainText(s)
            | InlineNode::Bold(s)
            | InlineNode::Italic(s)
            | InlineNode::Code(s) => s,
        }
    }

    /// Short label used by the outline dump and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineNode::PlainText(_) => "PlainText",
            InlineNode::Bold(_) => "Bold",
            InlineNode::Italic(_) => "Italic",
            InlineNode::Code(_) => "Code",
        }
    }
}

/// A top-level structural unit of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// `#` to `######` followed by a space and the heading text.
    Heading {
        /// Number of leading `#` characters, always 1..=6.
        level: u8,
        content: InlineSequence,
    },
    /// Consecutive text lines. Each entry is one source line; an explicit
    /// line break separates entries, none follows the last.
    Paragraph { lines: Vec<InlineSequence> },
    /// Consecutive `- ` / `* ` lines.
    UnorderedList { items: Vec<InlineSequence> },
    /// Consecutive `N. ` lines. Source numbering is not kept.
    OrderedList { items: Vec<InlineSequence> },
}

impl Block {
    /// Short label used by the outline dump and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::UnorderedList { .. } => "UnorderedList",
            Block::OrderedList { .. } => "OrderedList",
        }
    }

    /// Returns every inline sequence this block owns, in source order.
    ///
    /// A heading yields its single content sequence, a paragraph its lines,
    /// and a list its items.
    pub fn inline_lines(&self) -> &[InlineSequence] {
        match self {
            Block::Heading { content, .. } => std::slice::from_ref(content),
            Block::Paragraph { lines } => lines,
            Block::UnorderedList { items } | Block::OrderedList { items } => items,
        }
    }

    /// Returns the heading level, or `None` for non-heading blocks.
    pub fn heading_level(&self) -> Option<HeadingLevel> {
        match self {
            Block::Heading { level, .. } => Some(HeadingLevel(*level)),
            _ => None,
        }
    }
}

/// A heading level in 1..=6.
///
/// Renderers style levels 1-2 as major headings and 3-6 as minor ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(pub u8);

impl HeadingLevel {
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_major(self) -> bool {
        self.0 <= 2
    }
}

/// A parsed summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Flattens the document to unstyled text.
    ///
    /// Inline sequences are joined with `\n` and blocks with a blank line.
    /// Delimiters are already gone, so this is the text a reader would see.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| {
                b.inline_lines()
                    .iter()
                    .map(|seq| seq.iter().map(InlineNode::text).collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
