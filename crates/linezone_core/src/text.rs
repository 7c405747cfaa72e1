//! Shared character, offset and escape helpers.

use std::ops::Range;

/// Return `true` for characters that belong to a word (alphanumeric or `_`).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Return `true` when `line` is empty or whitespace-only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Largest char boundary in `text` that is `<= index`.
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut index = index;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Resolve a signed character start and optional length against a text of
/// `char_len` characters.
///
/// A negative `start` counts from the end; both ends clamp to the text.
///
/// # Returns
/// Half-open character range, always within `0..=char_len`.
pub fn resolve_char_range(char_len: usize, start: i64, len: Option<u64>) -> Range<usize> {
    let begin = if start < 0 {
        let back = usize::try_from(start.unsigned_abs()).unwrap_or(usize::MAX);
        char_len.saturating_sub(back)
    } else {
        usize::try_from(start).unwrap_or(usize::MAX).min(char_len)
    };
    let end = match len {
        Some(len) => begin
            .saturating_add(usize::try_from(len).unwrap_or(usize::MAX))
            .min(char_len),
        None => char_len,
    };
    begin..end
}

/// Convert a character range of `text` into a byte range.
pub fn char_range_to_bytes(text: &str, range: Range<usize>) -> Range<usize> {
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map(|(offset, _)| offset)
            .unwrap_or(text.len())
    };
    byte_at(range.start)..byte_at(range.end)
}

/// Expand `\n`, `\r`, `\t`, `\0` and `\\` escapes in a user-supplied terminator.
///
/// Unknown escapes are kept verbatim.
pub fn unescape_terminator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
