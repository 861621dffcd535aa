use super::{
    classify::LineClass,
    kinds::CodeFence,
    open::BlockOpen,
    types::{BlockKind, BlockNode},
};
use crate::parsing::inline::{InlineElement, InlineStyle, parse_inline};

/// One list item being collected: its raw lines and marker-stripped text.
#[derive(Debug)]
struct ItemDraft {
    raw: Vec<String>,
    text: String,
}

/// The run currently being collected, if any.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        raw: Vec<String>,
    },
    Fence {
        language: Option<String>,
        raw: Vec<String>,
        body: Vec<String>,
    },
    Quote {
        raw: Vec<String>,
        inner: Vec<String>,
    },
    Table {
        raw: Vec<String>,
    },
    List {
        ordered: bool,
        items: Vec<ItemDraft>,
    },
}

/// State machine that consumes classified lines and emits block nodes.
///
/// Single forward pass: each line either extends the current run, closes
/// it, or both (closes the run and opens the next). `finish` flushes
/// whatever is still open, which is how an unterminated fence gets closed
/// at end of document. The builder never fails; anything that matches no
/// construct becomes paragraph text.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        // Fences are raw zones: nothing inside them is classified.
        if matches!(self.leaf, LeafState::Fence { .. }) {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush();
            self.out.push(BlockNode {
                kind: BlockKind::Blank,
                raw_lines: vec![c.raw.clone()],
                content: String::new(),
                inline: vec![],
            });
            return;
        }

        match &c.open {
            Some(BlockOpen::ThematicBreak) => {
                self.flush();
                self.out.push(BlockNode {
                    kind: BlockKind::HorizontalRule,
                    raw_lines: vec![c.raw.clone()],
                    content: String::new(),
                    inline: vec![],
                });
            }
            Some(BlockOpen::Heading { level, text }) => {
                self.flush();
                self.out.push(BlockNode {
                    kind: BlockKind::Heading { level: *level },
                    raw_lines: vec![c.raw.clone()],
                    content: text.clone(),
                    inline: parse_inline(text),
                });
            }
            Some(BlockOpen::CodeFence { language }) => {
                self.flush();
                self.leaf = LeafState::Fence {
                    language: language.clone(),
                    raw: vec![c.raw.clone()],
                    body: vec![],
                };
            }
            Some(BlockOpen::BlockQuote { text }) => match &mut self.leaf {
                LeafState::Quote { raw, inner } => {
                    raw.push(c.raw.clone());
                    inner.push(text.clone());
                }
                _ => {
                    self.flush();
                    self.leaf = LeafState::Quote {
                        raw: vec![c.raw.clone()],
                        inner: vec![text.clone()],
                    };
                }
            },
            Some(BlockOpen::TableRow) => match &mut self.leaf {
                LeafState::Table { raw } => raw.push(c.raw.clone()),
                _ => {
                    self.flush();
                    self.leaf = LeafState::Table {
                        raw: vec![c.raw.clone()],
                    };
                }
            },
            Some(BlockOpen::ListItem { ordered, text }) => match &mut self.leaf {
                LeafState::List {
                    ordered: run_ordered,
                    items,
                } if *run_ordered == *ordered => {
                    items.push(ItemDraft {
                        raw: vec![c.raw.clone()],
                        text: text.clone(),
                    });
                }
                _ => {
                    self.flush();
                    self.leaf = LeafState::List {
                        ordered: *ordered,
                        items: vec![ItemDraft {
                            raw: vec![c.raw.clone()],
                            text: text.clone(),
                        }],
                    };
                }
            },
            None => {
                // Indented lines under a list item extend its raw-line
                // record without touching the parsed content.
                if c.is_continuation
                    && let LeafState::List { items, .. } = &mut self.leaf
                    && let Some(item) = items.last_mut()
                {
                    item.raw.push(c.raw.clone());
                    return;
                }
                match &mut self.leaf {
                    LeafState::Paragraph { raw } => raw.push(c.raw.clone()),
                    _ => {
                        self.flush();
                        self.leaf = LeafState::Paragraph {
                            raw: vec![c.raw.clone()],
                        };
                    }
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        self.flush();
        self.out
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { raw, body, .. } = &mut self.leaf else {
            return;
        };
        raw.push(c.raw.clone());
        if CodeFence::sig(c.raw.trim()) {
            // Closing fence; its trailing text is ignored.
            self.flush();
        } else {
            body.push(c.raw.clone());
        }
    }

    /// Converts the open run, if any, into emitted nodes.
    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { raw } => {
                // Soft line breaks collapse into single spaces.
                let content = raw
                    .iter()
                    .map(|l| l.trim())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.out.push(BlockNode {
                    kind: BlockKind::Paragraph,
                    raw_lines: raw,
                    inline: parse_inline(&content),
                    content,
                });
            }
            LeafState::Fence {
                language,
                raw,
                body,
            } => {
                let content = body.join("\n");
                self.out.push(BlockNode {
                    kind: BlockKind::CodeBlock { language },
                    raw_lines: raw,
                    inline: vec![InlineElement {
                        text: content.clone(),
                        style: InlineStyle::Plain,
                    }],
                    content,
                });
            }
            LeafState::Quote { raw, inner } => {
                let content = inner.join("\n");
                self.out.push(BlockNode {
                    kind: BlockKind::Blockquote,
                    raw_lines: raw,
                    inline: parse_inline(&content),
                    content,
                });
            }
            LeafState::Table { raw } => {
                let content = raw.join("\n");
                self.out.push(BlockNode {
                    kind: BlockKind::Table,
                    raw_lines: raw,
                    inline: vec![InlineElement {
                        text: content.clone(),
                        style: InlineStyle::Plain,
                    }],
                    content,
                });
            }
            LeafState::List { ordered, items } => {
                let start: u64 = 1;
                self.out.push(BlockNode {
                    kind: if ordered {
                        BlockKind::OrderedList { start }
                    } else {
                        BlockKind::UnorderedList
                    },
                    raw_lines: vec![],
                    content: String::new(),
                    inline: vec![],
                });
                for (i, item) in items.into_iter().enumerate() {
                    let index = if ordered { start + i as u64 } else { i as u64 };
                    self.out.push(BlockNode {
                        kind: BlockKind::ListItem { ordered, index },
                        raw_lines: item.raw,
                        inline: parse_inline(&item.text),
                        content: item.text,
                    });
                }
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
