use crate::document::{Block, InlineSequence};
use crate::parsing::inline::tokenize;

use super::classify::{LineClass, LineKind};

/// Which list pattern an open list is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        start_line: usize,
        lines: Vec<InlineSequence>,
    },
    List {
        kind: ListKind,
        start_line: usize,
        items: Vec<InlineSequence>,
    },
}

/// Phase 2 of segmentation: turns classified lines into blocks.
///
/// At most one leaf (paragraph or list) is open at a time. A line that
/// cannot extend the open leaf flushes it first, so every line lands in
/// exactly one block and blank lines in none.
pub struct BlockBuilder {
    leaf: LeafState,
    next_line: usize,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            next_line: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        self.next_line = c.line + 1;
        match c.kind {
            LineKind::Blank => self.flush(c.line),
            LineKind::Heading { level, text } => {
                self.flush(c.line);
                log::trace!("heading level {level} at line {}", c.line);
                self.out.push(Block::Heading {
                    level,
                    content: tokenize(text),
                });
            }
            LineKind::Bullet { text } => self.extend_list(ListKind::Unordered, c.line, text),
            LineKind::Ordered { text } => self.extend_list(ListKind::Ordered, c.line, text),
            LineKind::Text { text } => self.extend_paragraph(c.line, text),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush(self.next_line);
        self.out
    }

    fn extend_list(&mut self, kind: ListKind, line: usize, text: &str) {
        match &mut self.leaf {
            LeafState::List {
                kind: open, items, ..
            } if *open == kind => items.push(tokenize(text)),
            _ => {
                self.flush(line);
                self.leaf = LeafState::List {
                    kind,
                    start_line: line,
                    items: vec![tokenize(text)],
                };
            }
        }
    }

    fn extend_paragraph(&mut self, line: usize, text: &str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines, .. } => lines.push(tokenize(text)),
            _ => {
                self.flush(line);
                self.leaf = LeafState::Paragraph {
                    start_line: line,
                    lines: vec![tokenize(text)],
                };
            }
        }
    }

    /// Emits the open leaf, if any. `at` is the line that closed it.
    fn flush(&mut self, at: usize) {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { start_line, lines } => {
                log::trace!("paragraph of {} lines at {start_line}..{at}", lines.len());
                Block::Paragraph { lines }
            }
            LeafState::List {
                kind,
                start_line,
                items,
            } => {
                log::trace!("{kind:?} list of {} items at {start_line}..{at}", items.len());
                match kind {
                    ListKind::Unordered => Block::UnorderedList { items },
                    ListKind::Ordered => Block::OrderedList { items },
                }
            }
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
