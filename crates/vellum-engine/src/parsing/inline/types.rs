use serde::{Deserialize, Serialize};

/// Style of one inline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineStyle {
    Plain,
    Bold,
    Italic,
    BoldItalic,
    Code,
    Link { url: String },
    Image { alt: String, url: String },
}

/// One styled run of text within a block's content.
///
/// Concatenating the `text` fields of a block's elements reproduces the
/// block content with all style markers removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineElement {
    pub text: String,
    pub style: InlineStyle,
}

impl InlineElement {
    pub fn new(text: impl Into<String>, style: InlineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineStyle::Plain)
    }
}
