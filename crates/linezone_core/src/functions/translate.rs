//! Character-set translation of the zone.

use crate::error::OverflowError;
use crate::zone::ZoneBuffer;

/// Maps each character of `from` to the character at the same index of
/// `to`; a shorter `to` repeats its last character, an empty `to` deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translate {
    from: Vec<char>,
    to: Vec<char>,
}

impl Translate {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: expand_set(from),
            to: expand_set(to),
        }
    }

    pub(super) fn apply(&self, buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
        let translated = self.translate(buffer.zone_text());
        buffer.splice_zone(&translated)
    }

    fn translate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.from.iter().position(|candidate| *candidate == c) {
                None => out.push(c),
                Some(_) if self.to.is_empty() => {}
                Some(index) => out.push(self.to[index.min(self.to.len() - 1)]),
            }
        }
        out
    }
}

/// Expand `a-z` style ranges; a `-` at either end is literal.
fn expand_set(raw: &str) -> Vec<char> {
    let chars: Vec<char> = raw.chars().collect();
    let mut set = Vec::with_capacity(chars.len());
    let mut index = 0;
    while index < chars.len() {
        let low = chars[index];
        if index + 2 < chars.len() && chars[index + 1] == '-' && low <= chars[index + 2] {
            set.extend(low..=chars[index + 2]);
            index += 3;
        } else {
            set.push(low);
            index += 1;
        }
    }
    set
}
