//! # summary-markup-engine
//!
//! Parses the lightweight markup used in narrative coaching summaries into
//! a [`Document`] of blocks and inline spans.
//!
//! Parsing runs in two pure stages:
//!
//! 1. [`segment`] splits the text into headings, paragraphs and lists
//! 2. [`tokenize`] splits each captured line into plain, bold, italic and
//!    code spans
//!
//! Neither stage can fail. Markup that does not match degrades to plain
//! text, so callers need no error branch:
//!
//! ```
//! use summary_markup_engine::{Block, InlineNode, segment};
//!
//! let doc = segment("## Wins\n- **Slept** 8h");
//! assert_eq!(doc.blocks[0], Block::Heading {
//!     level: 2,
//!     content: vec![InlineNode::PlainText("Wins".into())],
//! });
//! ```

pub mod document;
pub mod io;
pub mod outline;
pub mod parsing;

// Re-export key types for easier usage
pub use document::{Block, Document, HeadingLevel, InlineNode, InlineSequence};
pub use outline::outline;
pub use parsing::{segment, tokenize};
