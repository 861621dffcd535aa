use serde::{Deserialize, Serialize};

use crate::parsing::{BlockKind, BlockNode};

/// A run of list items grouped under their container, ready to render as a
/// single visual list block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroup {
    pub ordered: bool,
    /// First item number of an ordered list; unused for bullet lists.
    pub start: u64,
    pub items: Vec<BlockNode>,
}

/// One renderable unit: a single block, or a whole list.
///
/// Both rendering surfaces consume this grouping; neither re-derives list
/// runs from the flat node stream itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentGroup {
    Block(BlockNode),
    List(ListGroup),
}

impl ContentGroup {
    /// The block kind spacing decisions are made against. For a list group
    /// this is the container's kind.
    pub fn spacing_kind(&self) -> BlockKind {
        match self {
            ContentGroup::Block(b) => b.kind.clone(),
            ContentGroup::List(l) if l.ordered => BlockKind::OrderedList { start: l.start },
            ContentGroup::List(_) => BlockKind::UnorderedList,
        }
    }
}

/// Groups the flat node stream into renderable units.
///
/// Each list container absorbs the `ListItem` run that follows it. `Blank`
/// nodes are dropped here: they exist for lossless round-trip, not for
/// rendering, and the spacing table must see real content neighbors.
pub fn group_blocks(blocks: &[BlockNode]) -> Vec<ContentGroup> {
    let mut groups = Vec::new();
    let mut i = 0;

    while i < blocks.len() {
        let block = &blocks[i];
        match block.kind {
            BlockKind::Blank => {
                i += 1;
            }
            BlockKind::UnorderedList | BlockKind::OrderedList { .. } => {
                let (ordered, start) = match block.kind {
                    BlockKind::OrderedList { start } => (true, start),
                    _ => (false, 0),
                };
                i += 1;

                let mut items = Vec::new();
                while let Some(b) = blocks.get(i) {
                    match b.kind {
                        BlockKind::ListItem {
                            ordered: item_ordered,
                            ..
                        } if item_ordered == ordered => {
                            items.push(b.clone());
                            i += 1;
                        }
                        _ => break,
                    }
                }
                groups.push(ContentGroup::List(ListGroup {
                    ordered,
                    start,
                    items,
                }));
            }
            _ => {
                groups.push(ContentGroup::Block(block.clone()));
                i += 1;
            }
        }
    }

    groups
}
