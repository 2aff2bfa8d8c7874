pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::document::Document;

use blocks::{BlockBuilder, SummaryLineClassifier};
use lines::{lines_with_index, normalize_newlines};

pub use inline::tokenize;

/// Splits a summary into its blocks.
///
/// Total over any input: an empty or whitespace-only string yields an
/// empty [`Document`], and text without recognizable markup comes back as
/// plain paragraphs.
pub fn segment(text: &str) -> Document {
    let text = normalize_newlines(text);
    let classifier = SummaryLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_index(&text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::debug!("segmented {} bytes into {} blocks", text.len(), blocks.len());
    Document::new(blocks)
}
