//! Bounded source/destination text buffer with an active zone.
//!
//! A function reads the source view, optionally restricted to the zone
//! (`zone_start..zone_stop`, byte offsets on char boundaries), and writes its
//! result into the destination view. [`ZoneBuffer::commit`] swaps the two so
//! the next function in a chain reads what the previous one wrote.

use crate::error::OverflowError;
use crate::text::floor_char_boundary;
use std::ops::Range;

/// One logical piece of text flowing through the pipeline: a line or a
/// packed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub text: String,
    pub selected: bool,
}

impl Unit {
    pub fn new(text: impl Into<String>, selected: bool) -> Self {
        Self {
            text: text.into(),
            selected,
        }
    }
}

/// Reusable pair of text buffers bounded by a byte limit.
#[derive(Debug, Clone)]
pub struct ZoneBuffer {
    source: String,
    dest: String,
    zone: Range<usize>,
    limit: usize,
}

impl ZoneBuffer {
    pub fn new(limit: usize) -> Self {
        Self {
            source: String::new(),
            dest: String::new(),
            zone: 0..0,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Replace the source with `text` and reset the zone to the whole text.
    pub fn load(&mut self, text: &str) -> Result<(), OverflowError> {
        self.check(text.len())?;
        self.source.clear();
        self.source.push_str(text);
        self.dest.clear();
        self.zone = 0..self.source.len();
        Ok(())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text written so far by the running function.
    pub fn dest(&self) -> &str {
        &self.dest
    }

    pub fn zone(&self) -> Range<usize> {
        self.zone.clone()
    }

    /// Restrict the zone to `range`, clamped to the source and snapped down
    /// to char boundaries.
    pub fn set_zone(&mut self, range: Range<usize>) {
        let stop = floor_char_boundary(&self.source, range.end);
        let start = floor_char_boundary(&self.source, range.start.min(stop));
        self.zone = start..stop;
    }

    pub fn reset_zone(&mut self) {
        self.zone = 0..self.source.len();
    }

    pub fn zone_text(&self) -> &str {
        &self.source[self.zone.clone()]
    }

    /// Source text before the zone.
    pub fn head(&self) -> &str {
        &self.source[..self.zone.start]
    }

    /// Source text after the zone.
    pub fn tail(&self) -> &str {
        &self.source[self.zone.end..]
    }

    /// Append to the destination, failing if it would exceed the limit.
    pub fn push(&mut self, text: &str) -> Result<(), OverflowError> {
        self.check(self.dest.len() + text.len())?;
        self.dest.push_str(text);
        Ok(())
    }

    /// Write `head + replacement + tail` to the destination.
    pub fn splice_zone(&mut self, replacement: &str) -> Result<(), OverflowError> {
        let needed = self.source.len() - self.zone.len() + replacement.len();
        self.check(needed)?;
        self.dest.clear();
        self.dest.push_str(&self.source[..self.zone.start]);
        self.dest.push_str(replacement);
        self.dest.push_str(&self.source[self.zone.end..]);
        Ok(())
    }

    /// Replace the whole destination with `text`.
    pub fn write(&mut self, text: &str) -> Result<(), OverflowError> {
        self.check(text.len())?;
        self.dest.clear();
        self.dest.push_str(text);
        Ok(())
    }

    /// Copy the source unchanged into the destination.
    pub fn pass_through(&mut self) {
        self.dest.clear();
        self.dest.push_str(&self.source);
    }

    /// Make the destination the new source; the zone covers it entirely.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.source, &mut self.dest);
        self.dest.clear();
        self.zone = 0..self.source.len();
    }

    /// Take the current source, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.zone = 0..0;
        self.dest.clear();
        std::mem::take(&mut self.source)
    }

    fn check(&self, needed: usize) -> Result<(), OverflowError> {
        if needed > self.limit {
            return Err(OverflowError {
                needed,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(text: &str) -> ZoneBuffer {
        let mut buffer = ZoneBuffer::new(64);
        buffer.load(text).expect("load");
        buffer
    }

    #[test]
    fn load_selects_whole_text() {
        let buffer = loaded("hello world");
        assert_eq!(buffer.zone(), 0..11);
        assert_eq!(buffer.zone_text(), "hello world");
        assert_eq!(buffer.head(), "");
        assert_eq!(buffer.tail(), "");
    }

    #[test]
    fn splice_zone_keeps_head_and_tail() {
        let mut buffer = loaded("hello world");
        buffer.set_zone(6..11);
        assert_eq!(buffer.head(), "hello ");
        buffer.splice_zone("there").expect("splice");
        buffer.commit();
        assert_eq!(buffer.source(), "hello there");
        assert_eq!(buffer.zone(), 0..11);
    }

    #[test]
    fn set_zone_clamps_and_snaps_to_char_boundaries() {
        let mut buffer = loaded("aéb");
        buffer.set_zone(2..99);
        assert_eq!(buffer.zone(), 1..4);
        assert_eq!(buffer.zone_text(), "éb");
        buffer.set_zone(5..3);
        assert_eq!(buffer.zone(), 3..3);
    }

    #[test]
    fn writes_past_limit_overflow() {
        let mut buffer = ZoneBuffer::new(8);
        buffer.load("12345678").expect("exactly at limit");
        let err = buffer.splice_zone("123456789").expect_err("overflow");
        assert_eq!(
            err,
            OverflowError {
                needed: 9,
                limit: 8
            }
        );
        assert!(buffer.load("123456789").is_err());

        let mut buffer = ZoneBuffer::new(4);
        buffer.load("ab").expect("load");
        buffer.push("abc").expect("push");
        assert!(buffer.push("de").is_err());
        assert_eq!(buffer.dest(), "abc");
    }

    #[test]
    fn commit_threads_destination_into_source() {
        let mut buffer = loaded("one");
        buffer.write("two").expect("write");
        buffer.commit();
        assert_eq!(buffer.source(), "two");
        buffer.pass_through();
        buffer.commit();
        assert_eq!(buffer.source(), "two");
        assert_eq!(buffer.take(), "two");
        assert_eq!(buffer.source(), "");
    }
}
