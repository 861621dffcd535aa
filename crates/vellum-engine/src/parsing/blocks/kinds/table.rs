/// Table row syntax knowledge.
///
/// Rows are only detected here; header/body structure is deferred to the
/// consumer, so the raw lines travel verbatim.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// True for lines that belong to a table run: a `|`-led row, or a
    /// separator row containing both `|` and `-`.
    pub fn is_row(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PIPE)
            || (trimmed.contains(Self::PIPE) && trimmed.contains('-'))
    }
}
