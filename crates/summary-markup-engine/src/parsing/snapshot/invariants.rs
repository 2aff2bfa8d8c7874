use crate::document::{Block, Document, InlineSequence};
use crate::parsing::blocks::kinds::Heading;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are within 1..=6
/// - No paragraph or list is empty
/// - No inline sequence is empty
/// - No inline node carries empty text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for (i, b) in doc.blocks.iter().enumerate() {
        if let Block::Heading { level, .. } = b {
            assert!(
                (1..=Heading::MAX_LEVEL).contains(level),
                "block {i}: heading level out of range: {level}"
            );
        }

        let lines = b.inline_lines();
        assert!(!lines.is_empty(), "block {i}: empty {}", b.kind_name());
        for (j, seq) in lines.iter().enumerate() {
            check_sequence(i, j, seq);
        }
    }
}

fn check_sequence(block: usize, line: usize, seq: &InlineSequence) {
    assert!(
        !seq.is_empty(),
        "block {block} line {line}: empty inline sequence"
    );
    for node in seq {
        assert!(
            !node.text().is_empty(),
            "block {block} line {line}: empty {} node",
            node.kind_name()
        );
    }
}
