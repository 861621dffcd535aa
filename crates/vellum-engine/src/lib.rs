//! Parsing and layout core for the vellum markdown viewer.
//!
//! Raw markdown text goes in; a typed block-node stream and a per-block
//! vertical spacing plan come out. The two rendering surfaces (the flowing
//! rich-text view and the per-block view tree) both consume these outputs
//! as their single source of truth, which is what keeps them visually
//! identical.
//!
//! The whole pipeline is deterministic, synchronous and pure: no I/O, no
//! shared state, no failure mode. Malformed input always degrades to
//! something displayable.

pub mod io;
pub mod layout;
pub mod models;
pub mod parsing;

pub use layout::{ContentGroup, ListGroup, assign_gaps, gap_before, group_blocks};
pub use models::Document;
pub use parsing::{
    BlockKind, BlockNode, InlineElement, InlineStyle, parse_document, parse_inline, raw_source,
};
