//! Per-construct syntax knowledge.
//!
//! Each block kind owns its markers and line signatures here, so the
//! classifier and builder never hard-code syntax themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{Bullet, Numbered};
pub use table::Table;
pub use thematic_break::ThematicBreak;
