use anyhow::Context;

use crate::layout::{ContentGroup, group_blocks};
use crate::parsing::{BlockNode, parse_document, raw_source};

/// An open markdown document: the source text plus the parsed view of it.
///
/// There is no incremental re-parsing; every text change runs the full
/// pipeline again, and nodes carry no identity between passes. Parsing is
/// pure, so documents can be built on any thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    text: String,
    blocks: Vec<BlockNode>,
    groups: Vec<ContentGroup>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let blocks = parse_document(&text);
        let groups = group_blocks(&blocks);
        Self {
            text,
            blocks,
            groups,
        }
    }

    /// Creates a document from raw file bytes, validating UTF-8 at the
    /// boundary so the core never sees invalid text.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes).context("document is not valid UTF-8")?;
        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The flat node stream, list containers followed by their items.
    pub fn blocks(&self) -> &[BlockNode] {
        &self.blocks
    }

    /// The grouped stream both renderers consume.
    pub fn groups(&self) -> &[ContentGroup] {
        &self.groups
    }

    /// Replaces the whole text and re-parses.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    /// Reassembles the source from the parsed nodes' raw lines.
    pub fn to_markdown(&self) -> String {
        raw_source(&self.blocks)
    }
}
