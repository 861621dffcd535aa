//! # Block Parsing
//!
//! Two-phase block parsing over the document's lines.
//!
//! 1. **Line classification** (`classify`): each line is reduced to local
//!    facts (blank status, indentation, which construct it can open).
//! 2. **Block construction** (`builder`): a `BlockBuilder` consumes the
//!    classified lines, collects multi-line runs (paragraphs, fences,
//!    quotes, tables, lists) and emits `BlockNode`s.
//!
//! Classification tries constructs in a strict priority order (`open`);
//! first match wins, and a line that matches nothing is paragraph text.
//! Parsing never fails: malformed input degrades to a more generic
//! construct instead of producing an error.
//!
//! ## Modules
//!
//! - **`types`**: core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: block-specific syntax knowledge with owned markers
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`open`**: `try_open_leaf` priority dispatch for block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::BlockOpen;
pub use types::{BlockKind, BlockNode};
