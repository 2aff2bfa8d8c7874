//! Human-readable dump of a parsed [`Document`].
//!
//! One line per block header, then one indented line per inline sequence:
//!
//! ```text
//! Heading(2)
//!   PlainText("Goals")
//! OrderedList
//!   1. Bold("Sleep"), PlainText(" earlier")
//! ```
//!
//! Text is shown with `Debug` escaping so whitespace and quotes are visible.

use std::fmt::Write;

use crate::document::{Block, Document, InlineNode};

/// Renders `doc` as an outline. An empty document renders as `""`.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc {
        write_block(block, &mut out);
    }
    out
}

fn write_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            let _ = writeln!(out, "Heading({level})");
            write_line("  ", content, out);
        }
        Block::Paragraph { lines } => {
            out.push_str("Paragraph\n");
            for line in lines {
                write_line("  | ", line, out);
            }
        }
        Block::UnorderedList { items } => {
            out.push_str("UnorderedList\n");
            for item in items {
                write_line("  - ", item, out);
            }
        }
        Block::OrderedList { items } => {
            out.push_str("OrderedList\n");
            for (n, item) in items.iter().enumerate() {
                write_line(&format!("  {}. ", n + 1), item, out);
            }
        }
    }
}

fn write_line(prefix: &str, nodes: &[InlineNode], out: &mut String) {
    out.push_str(prefix);
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}({:?})", node.kind_name(), node.text());
    }
    out.push('\n');
}
