//! Quoting and quote removal of the zone.

use crate::error::OverflowError;
use crate::zone::ZoneBuffer;

const DEFAULT_MARK: char = '"';
const ESCAPE: char = '\\';

/// Wraps the zone in `mark`, escaping embedded marks and backslashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    mark: char,
}

impl Quote {
    pub fn new(mark: Option<char>) -> Self {
        Self {
            mark: mark.unwrap_or(DEFAULT_MARK),
        }
    }

    /// Quoting must not lose data, so the destination size is checked before
    /// anything is written.
    pub(super) fn apply(&self, buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
        let zone = buffer.zone_text();
        let mut quoted = String::with_capacity(zone.len() + 2);
        quoted.push(self.mark);
        for c in zone.chars() {
            if c == self.mark || c == ESCAPE {
                quoted.push(ESCAPE);
            }
            quoted.push(c);
        }
        quoted.push(self.mark);
        buffer.splice_zone(&quoted)
    }
}

/// Strips one level of quoting from the zone; unquoted zones pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unquote {
    mark: Option<char>,
}

impl Unquote {
    /// `None` accepts either `"` or `'`.
    pub fn new(mark: Option<char>) -> Self {
        Self { mark }
    }

    pub(super) fn apply(&self, buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
        match self.strip(buffer.zone_text()) {
            Some(inner) => buffer.splice_zone(&inner),
            None => {
                buffer.pass_through();
                Ok(())
            }
        }
    }

    fn strip(&self, zone: &str) -> Option<String> {
        let first = zone.chars().next()?;
        let accepted = match self.mark {
            Some(mark) => first == mark,
            None => first == '"' || first == '\'',
        };
        if !accepted || zone.len() < 2 * first.len_utf8() || !zone.ends_with(first) {
            return None;
        }
        let inner = &zone[first.len_utf8()..zone.len() - first.len_utf8()];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == ESCAPE {
                out.push(chars.next().unwrap_or(ESCAPE));
            } else {
                out.push(c);
            }
        }
        Some(out)
    }
}
