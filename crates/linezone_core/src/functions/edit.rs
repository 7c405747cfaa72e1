//! Whole-unit edits: substitution, insertion, character ranges.

use crate::error::OverflowError;
use crate::pattern::Pattern;
use crate::text::{char_range_to_bytes, resolve_char_range};
use crate::zone::ZoneBuffer;

/// Regex replacement over the whole unit.
#[derive(Debug, Clone)]
pub struct Substitute {
    pattern: Pattern,
    replacement: String,
    /// Maximum replacements; `0` replaces every match.
    limit: usize,
}

impl Substitute {
    pub fn new(pattern: Pattern, replacement: String, limit: usize) -> Self {
        Self {
            pattern,
            replacement,
            limit,
        }
    }

    pub(super) fn apply(&self, buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
        let replaced = self
            .pattern
            .regex()
            .replacen(buffer.source(), self.limit, self.replacement.as_str())
            .into_owned();
        buffer.write(&replaced)
    }
}

/// Insert text at a character position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    text: String,
    position: i64,
}

impl Insert {
    pub fn new(text: String, position: i64) -> Self {
        Self { text, position }
    }

    pub(super) fn apply(&self, buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
        let source = buffer.source();
        let at = resolve_char_range(source.chars().count(), self.position, Some(0)).start;
        let offset = char_range_to_bytes(source, at..at).start;
        let mut inserted = String::with_capacity(source.len() + self.text.len());
        inserted.push_str(&source[..offset]);
        inserted.push_str(&self.text);
        inserted.push_str(&source[offset..]);
        buffer.write(&inserted)
    }
}

/// Signed start plus optional length, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    start: i64,
    len: Option<u64>,
}

impl CharRange {
    pub fn new(start: i64, len: Option<u64>) -> Self {
        Self { start, len }
    }

    fn bytes(&self, text: &str) -> std::ops::Range<usize> {
        let chars = resolve_char_range(text.chars().count(), self.start, self.len);
        char_range_to_bytes(text, chars)
    }

    pub(super) fn keep(&self, buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
        let kept = buffer.source()[self.bytes(buffer.source())].to_string();
        buffer.write(&kept)
    }

    pub(super) fn delete(&self, buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
        let source = buffer.source();
        let range = self.bytes(source);
        let mut remaining = String::with_capacity(source.len() - range.len());
        remaining.push_str(&source[..range.start]);
        remaining.push_str(&source[range.end..]);
        buffer.write(&remaining)
    }
}

pub(super) fn append(buffer: &mut ZoneBuffer, text: &str) -> Result<(), OverflowError> {
    buffer.pass_through();
    buffer.push(text)
}

pub(super) fn extract(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let zone = buffer.zone_text().to_string();
    buffer.write(&zone)
}
