use crate::document::{InlineNode, InlineSequence};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
};

/// Splits one line into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// At each position bold is tried before code and italic, so `**` is
/// read as a bold opener before it is read as an italic one. The earliest
/// position where any span closes wins.
///
/// # Returns
/// Nodes covering the whole line with delimiters of matched spans removed.
/// Unclosed or empty spans stay as literal text. An empty line yields an
/// empty sequence; no node ever carries empty text.
pub fn tokenize(line: &str) -> InlineSequence {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a PlainText node
    fn flush_text(out: &mut InlineSequence, cur: &Cursor<'_>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::PlainText(cur.slice(start, end).to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let node = try_parse_strong(&mut cur)
            .or_else(|| try_parse_code_span(&mut cur))
            .or_else(|| try_parse_emphasis(&mut cur));

        match node {
            Some(node) => {
                flush_text(&mut out, &cur, text_start, start);
                out.push(node);
                text_start = cur.pos();
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, &cur, text_start, cur.pos());
    out
}

/// Attempts a `open content close` span where content is one or more bytes
/// other than `forbidden`.
///
/// Returns the inner text. On failure, cursor position is restored.
fn try_parse_delimited<'a>(
    cur: &mut Cursor<'a>,
    delim: &[u8],
    forbidden: u8,
) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();
    let inner_len = cur.skip_until(forbidden);
    let inner_end = cur.pos();

    if inner_len == 0 || !cur.starts_with(delim) {
        // Empty or not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(delim.len());

    Some(cur.slice(inner_start, inner_end))
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    try_parse_delimited(cur, Strong::DELIM, Strong::MARKER)
        .map(|inner| InlineNode::Bold(inner.to_string()))
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    try_parse_delimited(cur, &[CodeSpan::TICK], CodeSpan::TICK)
        .map(|inner| InlineNode::Code(inner.to_string()))
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    try_parse_delimited(cur, Emphasis::DELIM, Emphasis::MARKER)
        .map(|inner| InlineNode::Italic(inner.to_string()))
}
