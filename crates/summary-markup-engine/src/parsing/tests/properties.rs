//! Property tests over arbitrary input.

use proptest::prelude::*;

use crate::document::InlineNode;
use crate::parsing::{segment, snapshot, tokenize};

/// Re-adds the delimiters each node kind strips.
fn reassemble(nodes: &[InlineNode]) -> String {
    nodes
        .iter()
        .map(|n| match n {
            InlineNode::PlainText(s) => s.clone(),
            InlineNode::Bold(s) => format!("**{s}**"),
            InlineNode::Italic(s) => format!("*{s}*"),
            InlineNode::Code(s) => format!("`{s}`"),
        })
        .collect()
}

/// Markup-heavy text so that markers actually collide.
fn markup_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r"([-*#`0-9. \tab]|\r?\n|é){0,120}")
        .expect("valid strategy regex")
}

proptest! {
    #[test]
    fn tokenize_preserves_content(line in "[^\n]{0,80}") {
        let nodes = tokenize(&line);
        prop_assert_eq!(reassemble(&nodes), line);
    }

    #[test]
    fn tokenize_preserves_markup_content(line in "[*` ab]{0,40}") {
        let nodes = tokenize(&line);
        prop_assert_eq!(reassemble(&nodes), line);
    }

    #[test]
    fn spans_hold_no_own_marker(line in "[*` ab]{0,40}") {
        for node in tokenize(&line) {
            prop_assert!(!node.text().is_empty());
            match &node {
                InlineNode::Bold(s) | InlineNode::Italic(s) => prop_assert!(!s.contains('*')),
                InlineNode::Code(s) => prop_assert!(!s.contains('`')),
                InlineNode::PlainText(_) => {}
            }
        }
    }

    #[test]
    fn no_adjacent_plain_text(line in "[*` ab]{0,40}") {
        let nodes = tokenize(&line);
        for pair in nodes.windows(2) {
            let both_plain = matches!(
                pair,
                [InlineNode::PlainText(_), InlineNode::PlainText(_)]
            );
            prop_assert!(!both_plain);
        }
    }

    #[test]
    fn segment_upholds_invariants(text in markup_text()) {
        let doc = segment(&text);
        snapshot::invariants(&doc);
    }

    #[test]
    fn segment_is_total_on_any_string(text in any::<String>()) {
        let doc = segment(&text);
        snapshot::invariants(&doc);
    }

    #[test]
    fn segment_is_deterministic(text in markup_text()) {
        prop_assert_eq!(segment(&text), segment(&text));
    }

    #[test]
    fn every_non_blank_line_lands_in_one_block(text in markup_text()) {
        let normalized = text.replace("\r\n", "\n");
        let non_blank = normalized
            .split('\n')
            .filter(|l| !l.trim().is_empty())
            .count();
        let captured: usize = segment(&text)
            .iter()
            .map(|b| b.inline_lines().len())
            .sum();
        prop_assert_eq!(captured, non_blank);
    }
}
