/// Fenced code block syntax knowledge.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True when the trimmed line opens or closes a fenced block.
    pub fn sig(trimmed: &str) -> bool {
        trimmed.starts_with(Self::FENCE)
    }

    /// Language tag of an opening fence line; an empty tag means none.
    pub fn language(trimmed: &str) -> Option<String> {
        let tag = trimmed.strip_prefix(Self::FENCE)?.trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }
}
