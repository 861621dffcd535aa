use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineElement;

/// The kind of a parsed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// ATX heading, `level` is 1..=6.
    Heading { level: u8 },
    /// Default block for running text.
    Paragraph,
    /// Fenced code block; `language` is the fence's info tag, if any.
    CodeBlock { language: Option<String> },
    /// A run of `>`-prefixed lines.
    Blockquote,
    /// Container preceding a run of unordered list items.
    UnorderedList,
    /// Container preceding a run of ordered list items.
    OrderedList { start: u64 },
    /// One list item, emitted after its owning container in source order.
    ListItem { ordered: bool, index: u64 },
    /// Thematic break (`---`, `***`, `___`, `===`).
    HorizontalRule,
    /// A run of table rows, kept verbatim; row structure is the consumer's job.
    Table,
    /// A blank source line, kept so the raw lines round-trip losslessly.
    Blank,
}

/// One parsed unit of the document.
///
/// Nodes are immutable once built; a new parse pass produces an entirely new
/// sequence and no identity is carried between passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Original source lines, verbatim, for lossless reassembly.
    pub raw_lines: Vec<String>,
    /// Normalized text with syntax markers stripped and lines joined.
    pub content: String,
    /// Styled runs of `content`; empty for kinds that carry no text.
    pub inline: Vec<InlineElement>,
}
