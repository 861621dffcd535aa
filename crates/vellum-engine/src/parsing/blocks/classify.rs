use super::open::{BlockOpen, try_open_leaf};

/// Classification of a single source line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. The builder supplies context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The original line, trailing newline excluded.
    pub raw: String,
    /// Whether the line is empty after trimming whitespace.
    pub is_blank: bool,
    /// Whether the line is indented enough to continue a list item
    /// (two or more leading spaces, or a tab).
    pub is_continuation: bool,
    /// The construct this line can open, if any, by strict priority.
    pub open: Option<BlockOpen>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let raw = line.trim_end_matches(['\r', '\n']).to_string();
        let trimmed = raw.trim();
        let is_blank = trimmed.is_empty();
        let is_continuation = raw.starts_with("  ") || raw.starts_with('\t');
        let open = if is_blank { None } else { try_open_leaf(trimmed) };

        LineClass {
            raw,
            is_blank,
            is_continuation,
            open,
        }
    }
}
