//! Markdown parsing: text in, typed block nodes out.
//!
//! The pipeline is a single forward pass: each line is classified into
//! local facts, a builder folds the classified lines into multi-line runs,
//! and every text-bearing block gets exactly one inline scan. Parsing
//! never fails; malformed input degrades to paragraphs and plain text.

pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

pub use blocks::{BlockKind, BlockNode};
pub use inline::{InlineElement, InlineStyle, parse_inline};

use blocks::{BlockBuilder, MarkdownLineClassifier};

/// Parses a whole document into an ordered block-node sequence.
///
/// Total for any finite input: the empty string yields an empty sequence,
/// an unterminated fence closes at end of document, and anything malformed
/// degrades to a more generic construct.
pub fn parse_document(text: &str) -> Vec<BlockNode> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}

/// Joins every node's raw lines back into source text.
///
/// Together with the raw lines kept on each node this is the lossless
/// round-trip surface: re-parsing the result reproduces the same node
/// sequence.
pub fn raw_source(blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .flat_map(|b| b.raw_lines.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
