use super::groups::ContentGroup;
use crate::parsing::BlockKind;

/// Gap before a level-1 or level-2 heading: a major group break.
pub const MAJOR_BREAK: u32 = 28;
/// Gap before a level-3 heading.
pub const SECTION_BREAK: u32 = 20;
/// Gap before a level-4, -5 or -6 heading.
pub const MINOR_BREAK: u32 = 14;
/// Gap binding content to the heading that introduces it.
pub const HEADING_FOLLOW: u32 = 2;
/// Gap isolating code blocks and tables from surrounding text.
pub const RAW_BLOCK_PAD: u32 = 4;
/// Gap around horizontal rules.
pub const RULE_PAD: u32 = 8;
/// Same-group peers sit flush.
pub const FLUSH: u32 = 0;

/// Vertical gap (in layout units) to place before `current`, given the
/// block that precedes it.
///
/// First matching rule wins and the order is load-bearing: a code block
/// directly after a heading binds to the heading (gap 2), it does not get
/// the code padding (gap 4). Both renderers must take this table as the
/// single source of truth to stay pixel-identical.
pub fn gap_before(previous: &BlockKind, current: &BlockKind) -> u32 {
    if let BlockKind::Heading { level } = current {
        return match level {
            1 | 2 => MAJOR_BREAK,
            3 => SECTION_BREAK,
            _ => MINOR_BREAK,
        };
    }
    if matches!(previous, BlockKind::Heading { .. }) {
        return HEADING_FOLLOW;
    }
    if is_raw_block(previous) || is_raw_block(current) {
        return RAW_BLOCK_PAD;
    }
    if matches!(previous, BlockKind::HorizontalRule)
        || matches!(current, BlockKind::HorizontalRule)
    {
        return RULE_PAD;
    }
    FLUSH
}

fn is_raw_block(kind: &BlockKind) -> bool {
    matches!(kind, BlockKind::CodeBlock { .. } | BlockKind::Table)
}

/// Assigns the gap to place before each group.
///
/// `gaps[i]` pairs with `groups[i]`; the first group always gets 0 so both
/// renderers can zip the two without an offset special case.
pub fn assign_gaps(groups: &[ContentGroup]) -> Vec<u32> {
    let mut gaps = Vec::with_capacity(groups.len());
    let mut previous: Option<BlockKind> = None;

    for group in groups {
        let kind = group.spacing_kind();
        gaps.push(match &previous {
            Some(prev) => gap_before(prev, &kind),
            None => FLUSH,
        });
        previous = Some(kind);
    }

    gaps
}
