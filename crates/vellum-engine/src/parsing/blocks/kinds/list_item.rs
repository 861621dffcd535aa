use std::sync::LazyLock;

use regex::Regex;

/// Unordered list marker knowledge.
pub struct Bullet;

impl Bullet {
    pub const MARKERS: [&'static str; 3] = ["- ", "* ", "+ "];

    /// Returns the item text after the bullet marker.
    pub fn sig(trimmed: &str) -> Option<&str> {
        Self::MARKERS.iter().find_map(|m| trimmed.strip_prefix(m))
    }
}

/// Ordered list marker knowledge (`digits '.' space`).
pub struct Numbered;

static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("Invalid marker regex"));

impl Numbered {
    /// Returns the item text after the `1. `-style marker.
    pub fn sig(trimmed: &str) -> Option<&str> {
        let marker = NUMBERED_MARKER.find(trimmed)?;
        Some(&trimmed[marker.end()..])
    }
}
