/// Inline code span syntax knowledge.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
    /// A triple-tick run is fence syntax, never an inline opener.
    pub const FENCE_RUN: &'static [u8] = b"```";
}
