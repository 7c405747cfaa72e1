//! Case conversion and trimming of the zone.

use crate::error::OverflowError;
use crate::text::is_word_char;
use crate::zone::ZoneBuffer;

pub(super) fn upper(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let converted = buffer.zone_text().to_uppercase();
    buffer.splice_zone(&converted)
}

pub(super) fn lower(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let converted = buffer.zone_text().to_lowercase();
    buffer.splice_zone(&converted)
}

pub(super) fn trim(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let trimmed = buffer.zone_text().trim().to_string();
    buffer.splice_zone(&trimmed)
}

pub(super) fn camel(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let converted = camel_case(buffer.zone_text());
    buffer.splice_zone(&converted)
}

/// Join the words of `text` in camelCase.
///
/// A word is a maximal run of alphanumerics and `_`; everything else is a
/// separator and is dropped. The first word is lower-cased, later words get
/// an upper-case initial and a lower-case remainder.
pub(crate) fn camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let words = text
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty());
    for (index, word) in words.enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if index == 0 {
            out.extend(first.to_lowercase());
        } else {
            out.extend(first.to_uppercase());
        }
        out.push_str(&chars.as_str().to_lowercase());
    }
    out
}
