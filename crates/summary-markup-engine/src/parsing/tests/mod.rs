//! Behavior tests for segmentation and tokenizing working together.

mod properties;

use pretty_assertions::assert_eq;

use crate::document::{Block, Document, InlineNode, InlineSequence};
use crate::parsing::{segment, snapshot, tokenize};

fn plain(s: &str) -> InlineSequence {
    vec![InlineNode::PlainText(s.to_string())]
}

fn parse(text: &str) -> Document {
    let doc = segment(text);
    snapshot::invariants(&doc);
    doc
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn whitespace_only_document() {
    assert!(parse("   \n  ").is_empty());
    assert!(parse("\n\n\t\r\n").is_empty());
}

#[test]
fn single_heading() {
    assert_eq!(
        parse("# Title").blocks,
        vec![Block::Heading {
            level: 1,
            content: plain("Title")
        }]
    );
}

#[test]
fn level_three_heading() {
    assert_eq!(
        parse("### Sub").blocks,
        vec![Block::Heading {
            level: 3,
            content: plain("Sub")
        }]
    );
}

#[test]
fn seven_hashes_is_paragraph() {
    assert_eq!(
        parse("####### x").blocks,
        vec![Block::Paragraph {
            lines: vec![plain("####### x")]
        }]
    );
}

#[test]
fn unordered_list() {
    assert_eq!(
        parse("- a\n- b").blocks,
        vec![Block::UnorderedList {
            items: vec![plain("a"), plain("b")]
        }]
    );
}

#[test]
fn mixed_bullets_share_a_list() {
    assert_eq!(
        parse("- a\n* b").blocks,
        vec![Block::UnorderedList {
            items: vec![plain("a"), plain("b")]
        }]
    );
}

#[test]
fn ordered_list_drops_numbers() {
    assert_eq!(
        parse("1. x\n2. y").blocks,
        vec![Block::OrderedList {
            items: vec![plain("x"), plain("y")]
        }]
    );
    assert_eq!(parse("5. x\n1. y").blocks, parse("1. x\n2. y").blocks);
}

#[test]
fn paragraph_keeps_line_entries() {
    assert_eq!(
        parse("line1\nline2").blocks,
        vec![Block::Paragraph {
            lines: vec![plain("line1"), plain("line2")]
        }]
    );
}

#[test]
fn paragraph_lines_keep_leading_whitespace() {
    assert_eq!(
        parse("first\n   indented   ").blocks,
        vec![Block::Paragraph {
            lines: vec![plain("first"), plain("   indented")]
        }]
    );
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        parse("- a\n\n- b").blocks,
        vec![
            Block::UnorderedList {
                items: vec![plain("a")]
            },
            Block::UnorderedList {
                items: vec![plain("b")]
            },
        ]
    );
}

#[test]
fn blank_line_splits_paragraphs() {
    assert_eq!(
        parse("a\n\nb").blocks,
        vec![
            Block::Paragraph {
                lines: vec![plain("a")]
            },
            Block::Paragraph {
                lines: vec![plain("b")]
            },
        ]
    );
}

#[test]
fn list_line_ends_paragraph() {
    assert_eq!(
        parse("Notes:\n- one\n- two\nafter").blocks,
        vec![
            Block::Paragraph {
                lines: vec![plain("Notes:")]
            },
            Block::UnorderedList {
                items: vec![plain("one"), plain("two")]
            },
            Block::Paragraph {
                lines: vec![plain("after")]
            },
        ]
    );
}

#[test]
fn numbered_line_ends_paragraph() {
    assert_eq!(
        parse("para\n1. x").blocks,
        vec![
            Block::Paragraph {
                lines: vec![plain("para")]
            },
            Block::OrderedList {
                items: vec![plain("x")]
            },
        ]
    );
}

#[test]
fn heading_ends_list_and_paragraph() {
    let doc = parse("text\n## H\n1. a\n# Next");
    let kinds: Vec<_> = doc.iter().map(Block::kind_name).collect();
    assert_eq!(kinds, vec!["Paragraph", "Heading", "OrderedList", "Heading"]);
}

#[test]
fn crlf_matches_lf() {
    assert_eq!(
        parse("# T\r\n- a\r\n- b\r\n\r\npara\r\nline"),
        parse("# T\n- a\n- b\n\npara\nline")
    );
}

#[test]
fn inline_spans_inside_blocks() {
    assert_eq!(
        parse("## **Focus** areas\n- *sleep* `8h`").blocks,
        vec![
            Block::Heading {
                level: 2,
                content: vec![
                    InlineNode::Bold("Focus".into()),
                    InlineNode::PlainText(" areas".into()),
                ],
            },
            Block::UnorderedList {
                items: vec![vec![
                    InlineNode::Italic("sleep".into()),
                    InlineNode::PlainText(" ".into()),
                    InlineNode::Code("8h".into()),
                ]],
            },
        ]
    );
}

#[test]
fn italic_line_is_not_a_bullet() {
    assert_eq!(
        parse("*gentle* reminder").blocks,
        vec![Block::Paragraph {
            lines: vec![vec![
                InlineNode::Italic("gentle".into()),
                InlineNode::PlainText(" reminder".into()),
            ]]
        }]
    );
}

#[test]
fn repeated_segmenting_is_identical() {
    let text = "# A\n\n**b** c\n- d\n2. e\n";
    assert_eq!(segment(text), segment(text));
}

#[test]
fn tokenize_examples() {
    assert_eq!(
        tokenize("**bold** and *italic* and `code`"),
        vec![
            InlineNode::Bold("bold".into()),
            InlineNode::PlainText(" and ".into()),
            InlineNode::Italic("italic".into()),
            InlineNode::PlainText(" and ".into()),
            InlineNode::Code("code".into()),
        ]
    );
    assert_eq!(tokenize("**unterminated"), plain("**unterminated"));
    assert_eq!(tokenize("****"), plain("****"));
}
