use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link},
    types::{InlineElement, InlineStyle},
};

/// Scans a block's normalized text into an ordered run of styled elements.
///
/// One left-to-right pass with a pending plain-text accumulator, flushed
/// whenever a styled element is about to be emitted and at end of input.
/// Constructs are tried in precedence order: code span, bold-italic, bold,
/// italic, image, link. Longer marker runs are always tried before shorter
/// ones so a 3-marker run is never misread as bold plus a stray marker.
///
/// Never fails: concatenating the returned elements' `text` fields yields
/// the input with the markers of matched constructs removed, and anything
/// unmatched stays behind as plain text.
pub fn parse_inline(s: &str) -> Vec<InlineElement> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.i;

        if cur.peek() == Some(CodeSpan::TICK) {
            if cur.starts_with(CodeSpan::FENCE_RUN) {
                // A triple-tick run is fence syntax; the whole run stays
                // plain so its later ticks are never reconsidered.
                while cur.peek() == Some(CodeSpan::TICK) {
                    cur.bump();
                }
                continue;
            }
            match try_parse_code_span(&mut cur) {
                Some(el) => {
                    flush_text(&mut out, s, text_start, start);
                    out.push(el);
                    text_start = cur.i;
                    continue;
                }
                None => {
                    // Unterminated code: the rest is plain text from the
                    // opening tick onward.
                    cur.seek_to_end();
                    break;
                }
            }
        }

        if let Some(scan) = try_parse_emphasis(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            if let EmphasisScan::Styled(el) = scan {
                out.push(el);
            }
            text_start = cur.i;
            continue;
        }

        if let Some(el) = try_parse_image(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            out.push(el);
            text_start = cur.i;
            continue;
        }

        if let Some(el) = try_parse_link(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            out.push(el);
            text_start = cur.i;
            continue;
        }

        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.i);
    out
}

fn flush_text(out: &mut Vec<InlineElement>, s: &str, start: usize, end: usize) {
    if end > start {
        out.push(InlineElement::plain(&s[start..end]));
    }
}

/// Attempts to parse a code span at the current position.
///
/// The caller has already ruled out a triple-tick run. Returns `None` with
/// the cursor untouched when the span never closes.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineElement> {
    let inner_start = cur.i + 1;
    let close = find_byte(cur.s.as_bytes(), inner_start, CodeSpan::TICK)?;
    let text = cur.s[inner_start..close].to_string();
    cur.i = close + 1;
    Some(InlineElement::new(text, InlineStyle::Code))
}

/// Outcome of an emphasis attempt: a styled element, or an empty span that
/// is consumed but emits nothing.
enum EmphasisScan {
    Styled(InlineElement),
    Empty,
}

/// Attempts bold-italic, bold, then italic at the current position.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<EmphasisScan> {
    let marker = cur.peek().filter(|b| Emphasis::is_marker(*b))?;

    if let Some(el) = try_parse_run(cur, marker, 3, InlineStyle::BoldItalic) {
        return Some(EmphasisScan::Styled(el));
    }
    if let Some(el) = try_parse_run(cur, marker, 2, InlineStyle::Bold) {
        return Some(EmphasisScan::Styled(el));
    }
    try_parse_italic(cur, marker)
}

/// Opens on `len` identical markers and closes at the next `len` identical
/// markers. Returns `None` with the cursor untouched when there is no
/// opener or no closer.
fn try_parse_run(
    cur: &mut Cursor<'_>,
    marker: u8,
    len: usize,
    style: InlineStyle,
) -> Option<InlineElement> {
    let run = [marker; 3];
    let delim = &run[..len];
    if !cur.starts_with(delim) {
        return None;
    }
    let inner_start = cur.i + len;
    let close = find_bytes(&cur.s.as_bytes()[inner_start..], delim)? + inner_start;
    let text = cur.s[inner_start..close].to_string();
    cur.i = close + len;
    Some(InlineElement::new(text, style))
}

/// Attempts italic at the current position.
///
/// A marker immediately followed by whitespace or a second identical marker
/// is punctuation or part of a longer run, not an italic opener. The closer
/// scan skips `\`-escaped markers. An empty span is consumed and discarded.
fn try_parse_italic(cur: &mut Cursor<'_>, marker: u8) -> Option<EmphasisScan> {
    let next = cur.s[cur.i + 1..].chars().next()?;
    if next.is_whitespace() || next == marker as char {
        return None;
    }

    let inner_start = cur.i + 1;
    let close = find_unescaped(cur.s.as_bytes(), inner_start, marker)?;
    let text = cur.s[inner_start..close].to_string();
    cur.i = close + 1;
    if text.is_empty() {
        return Some(EmphasisScan::Empty);
    }
    Some(EmphasisScan::Styled(InlineElement::new(
        text,
        InlineStyle::Italic,
    )))
}

/// Attempts `![alt](url)` at the current position.
///
/// All-or-nothing: if either group never closes the cursor is restored and
/// the `!` falls through as plain text, so scanning resumes one character
/// past it.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineElement> {
    if cur.peek() != Some(Image::BANG) || cur.peek_at(1) != Some(Link::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(2);
    let Some((alt, url)) = scan_bracket_pair(cur) else {
        *cur = saved;
        return None;
    };
    Some(InlineElement::new(
        alt.clone(),
        InlineStyle::Image { alt, url },
    ))
}

/// Attempts `[text](url)` at the current position; same all-or-nothing
/// closing requirement as images.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineElement> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump();
    let Some((text, url)) = scan_bracket_pair(cur) else {
        *cur = saved;
        return None;
    };
    Some(InlineElement::new(text, InlineStyle::Link { url }))
}

/// Reads `text](url)` from just past an opening bracket. Returns the
/// bracket and paren payloads, or `None` (cursor position unspecified)
/// when either group never closes or the `(` does not follow the `]`.
fn scan_bracket_pair(cur: &mut Cursor<'_>) -> Option<(String, String)> {
    let bytes = cur.s.as_bytes();
    let label_start = cur.i;
    let label_close = find_byte(bytes, label_start, Link::CLOSE)?;
    if bytes.get(label_close + 1) != Some(&Link::URL_OPEN) {
        return None;
    }
    let url_start = label_close + 2;
    let url_close = find_byte(bytes, url_start, Link::URL_CLOSE)?;
    let label = cur.s[label_start..label_close].to_string();
    let url = cur.s[url_start..url_close].to_string();
    cur.i = url_close + 1;
    Some((label, url))
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..].iter().position(|b| *b == needle).map(|p| from + p)
}

fn find_bytes(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}

/// Finds the next `marker` at or after `from` that is not preceded by a
/// backslash.
fn find_unescaped(bytes: &[u8], from: usize, marker: u8) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == marker && bytes[j - 1] != Emphasis::ESCAPE {
            return Some(j);
        }
        j += 1;
    }
    None
}
