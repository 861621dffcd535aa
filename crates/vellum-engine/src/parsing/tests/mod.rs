//! Behavior tests for the block scanner, written against whole documents.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::blocks::{BlockKind, BlockNode};
use crate::parsing::inline::InlineStyle;
use crate::parsing::{parse_document, raw_source};

/// Compact one-line outline of a parse result, for snapshot assertions.
fn outline(blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(|b| label(&b.kind))
        .collect::<Vec<_>>()
        .join(" ")
}

fn label(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Heading { level } => format!("h{level}"),
        BlockKind::Paragraph => "p".to_string(),
        BlockKind::CodeBlock { language: Some(l) } => format!("code({l})"),
        BlockKind::CodeBlock { language: None } => "code".to_string(),
        BlockKind::Blockquote => "quote".to_string(),
        BlockKind::UnorderedList => "ul".to_string(),
        BlockKind::OrderedList { start } => format!("ol({start})"),
        BlockKind::ListItem { index, .. } => format!("li[{index}]"),
        BlockKind::HorizontalRule => "hr".to_string(),
        BlockKind::Table => "table".to_string(),
        BlockKind::Blank => "blank".to_string(),
    }
}

fn parse_checked(md: &str) -> Vec<BlockNode> {
    let blocks = parse_document(md);
    invariants::check(&blocks);
    blocks
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn heading_levels_parse(#[case] level: u8) {
    let md = format!("{} text", "#".repeat(level as usize));
    let blocks = parse_checked(&md);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Heading { level });
    assert_eq!(blocks[0].content, "text");
}

#[test]
fn seven_hashes_degrade_to_paragraph() {
    let blocks = parse_checked("####### text");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    assert_eq!(blocks[0].content, "####### text");
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("___")]
#[case("===")]
#[case("- - -")]
fn rules_parse_alone(#[case] md: &str) {
    let blocks = parse_checked(md);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::HorizontalRule);
}

#[test]
fn fenced_code_block_excludes_fences() {
    let blocks = parse_checked("```lang\ncode line\n```");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].kind,
        BlockKind::CodeBlock {
            language: Some("lang".to_string())
        }
    );
    assert_eq!(blocks[0].content, "code line");
    assert_eq!(blocks[0].raw_lines, vec!["```lang", "code line", "```"]);
}

#[test]
fn code_block_body_is_a_raw_zone() {
    let blocks = parse_checked("```\n# not a heading\n- not a list\n```");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content, "# not a heading\n- not a list");
    // Raw content rides along as a single plain inline element.
    assert_eq!(blocks[0].inline.len(), 1);
    assert_eq!(blocks[0].inline[0].style, InlineStyle::Plain);
    assert_eq!(blocks[0].inline[0].text, blocks[0].content);
}

#[test]
fn unterminated_fence_closes_at_end_of_document() {
    let blocks = parse_checked("```rust\nfn main() {}");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].kind,
        BlockKind::CodeBlock {
            language: Some("rust".to_string())
        }
    );
    assert_eq!(blocks[0].content, "fn main() {}");
}

#[test]
fn closing_fence_trailing_text_is_ignored() {
    let blocks = parse_checked("```\nbody\n``` trailing");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content, "body");
}

#[test]
fn empty_fence_has_empty_content() {
    let blocks = parse_checked("```\n```");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::CodeBlock { language: None });
    assert_eq!(blocks[0].content, "");
}

#[test]
fn quote_run_joins_lines() {
    let blocks = parse_checked("> first\n> second");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Blockquote);
    assert_eq!(blocks[0].content, "first\nsecond");
}

#[test]
fn quote_run_stops_at_plain_line() {
    let blocks = parse_checked("> quoted\nplain after");
    assert_eq!(outline(&blocks), "quote p");
}

#[test]
fn quote_marker_without_space_still_counts() {
    let blocks = parse_checked(">tight");
    assert_eq!(blocks[0].kind, BlockKind::Blockquote);
    assert_eq!(blocks[0].content, "tight");
}

#[test]
fn table_run_keeps_raw_lines_verbatim() {
    let md = "| a | b |\n|---|---|\n| 1 | 2 |";
    let blocks = parse_checked(md);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Table);
    assert_eq!(blocks[0].content, md);
    assert_eq!(blocks[0].raw_lines.len(), 3);
}

#[test]
fn bullet_run_emits_container_then_items() {
    let blocks = parse_checked("- a\n- b\n- c");
    assert_eq!(outline(&blocks), "ul li[0] li[1] li[2]");
    assert_eq!(blocks[1].content, "a");
    assert_eq!(blocks[2].content, "b");
    assert_eq!(blocks[3].content, "c");
}

#[test]
fn bullet_marker_flavors_share_a_run() {
    let blocks = parse_checked("- a\n* b\n+ c");
    assert_eq!(outline(&blocks), "ul li[0] li[1] li[2]");
}

#[test]
fn ordered_run_counts_from_one() {
    let blocks = parse_checked("1. a\n2. b");
    assert_eq!(outline(&blocks), "ol(1) li[1] li[2]");
}

#[test]
fn ordered_source_numbering_is_ignored() {
    // The written digits survive only in the raw lines.
    let blocks = parse_checked("7. a\n9. b");
    assert_eq!(outline(&blocks), "ol(1) li[1] li[2]");
    assert_eq!(blocks[1].raw_lines, vec!["7. a"]);
}

#[test]
fn ordered_and_bullet_runs_do_not_merge() {
    let blocks = parse_checked("- a\n1. b");
    assert_eq!(outline(&blocks), "ul li[0] ol(1) li[1]");
}

#[test]
fn continuation_lines_stay_raw_only() {
    let blocks = parse_checked("- item\n  wrapped detail\n- next");
    assert_eq!(outline(&blocks), "ul li[0] li[1]");
    assert_eq!(blocks[1].raw_lines, vec!["- item", "  wrapped detail"]);
    // Parsed content is untouched by the continuation.
    assert_eq!(blocks[1].content, "item");
}

#[test]
fn indented_marker_line_starts_a_new_item() {
    let blocks = parse_checked("- a\n  - b");
    assert_eq!(outline(&blocks), "ul li[0] li[1]");
    assert_eq!(blocks[2].content, "b");
}

#[test]
fn blank_line_ends_a_list_run() {
    let blocks = parse_checked("- a\n\n- b");
    assert_eq!(outline(&blocks), "ul li[0] blank ul li[0]");
}

#[test]
fn paragraph_collapses_soft_line_breaks() {
    let blocks = parse_checked("line one\nline two\nline three");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content, "line one line two line three");
    assert_eq!(blocks[0].raw_lines.len(), 3);
}

#[test]
fn paragraph_stops_at_any_opener() {
    let blocks = parse_checked("prose\n# heading\nmore prose");
    assert_eq!(outline(&blocks), "p h1 p");
}

#[test]
fn blank_lines_are_kept_as_nodes() {
    let blocks = parse_checked("a\n\nb");
    assert_eq!(outline(&blocks), "p blank p");
}

#[test]
fn empty_input_parses_to_nothing() {
    assert_eq!(parse_checked(""), vec![]);
}

#[test]
fn heading_content_is_inline_styled() {
    let blocks = parse_checked("# A **bold** title");
    assert_eq!(blocks[0].inline.len(), 3);
    assert_eq!(blocks[0].inline[1].style, InlineStyle::Bold);
}

#[test]
fn quote_content_is_inline_styled() {
    let blocks = parse_checked("> has `code` inside");
    assert_eq!(blocks[0].inline.len(), 3);
    assert_eq!(blocks[0].inline[1].style, InlineStyle::Code);
}

#[test]
fn mixed_document_outline() {
    let md = "# Title\n\nintro paragraph\n\n- one\n- two\n\n```sh\nls\n```\n\n> aside\n\n---\n\n| a |\n|---|";
    let blocks = parse_checked(md);
    insta::assert_snapshot!(
        outline(&blocks),
        @"h1 blank p blank ul li[0] li[1] blank code(sh) blank quote blank hr blank table"
    );
}

#[rstest]
#[case("# Title\n\nbody text")]
#[case("- a\n- b\n- c")]
#[case("> quote\n> more")]
#[case("```rust\nlet x = 1;\n```")]
#[case("| a |\n|---|\n| 1 |")]
#[case("para one\npara one continued\n\npara two\n\n---")]
fn raw_source_is_byte_lossless(#[case] md: &str) {
    let blocks = parse_checked(md);
    assert_eq!(raw_source(&blocks), md);
}

#[test]
fn reparsing_raw_source_is_structurally_identical() {
    let md = "# T\n\n- a\n  cont\n- b\n\nplain **bold** tail\n\n```\nx\n```";
    let first = parse_checked(md);
    let second = parse_checked(&raw_source(&first));
    assert_eq!(first, second);
}
