//! # Inline Parsing
//!
//! Turns a block's normalized text into an ordered run of styled elements.
//! One pass, strict precedence (code span first: it is a raw zone and
//! suppresses every other construct inside it), and no failure mode:
//! unmatched markers degrade to plain text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineElement, InlineStyle};
