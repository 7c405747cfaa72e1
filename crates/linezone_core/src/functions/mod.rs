//! Typed transformation functions.
//!
//! Every implemented catalog entry has one [`Function`] variant carrying its
//! validated arguments. Zone-local variants rewrite only the active zone and
//! copy the rest of the source; whole-unit variants ignore the zone.

mod case;
mod codec;
mod edit;
mod quote;
mod translate;

#[cfg(test)]
mod tests;

pub use edit::{CharRange, Insert, Substitute};
pub use quote::{Quote, Unquote};
pub use translate::Translate;

use crate::error::OverflowError;
use crate::zone::ZoneBuffer;

/// Result of running one function over a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The destination holds the new text; keep going.
    Continue,
    /// Drop the unit; no further functions run.
    Drop,
}

#[derive(Debug, Clone)]
pub enum Function {
    Upper,
    Lower,
    Camel,
    Trim,
    Translate(Translate),
    Quote(Quote),
    Unquote(Unquote),
    Replace(String),
    Extract,
    Substitute(Substitute),
    Insert(Insert),
    Append(String),
    RangeSel(CharRange),
    RangeUnsel(CharRange),
    Remove,
    Base64Encode,
    Base64Decode,
    UrlEncode,
    UrlDecode,
}

impl Function {
    /// Run over the buffer's source (and zone), writing the destination.
    pub fn apply(&self, buffer: &mut ZoneBuffer) -> Result<Outcome, OverflowError> {
        match self {
            Self::Upper => case::upper(buffer),
            Self::Lower => case::lower(buffer),
            Self::Camel => case::camel(buffer),
            Self::Trim => case::trim(buffer),
            Self::Translate(translate) => translate.apply(buffer),
            Self::Quote(quote) => quote.apply(buffer),
            Self::Unquote(unquote) => unquote.apply(buffer),
            Self::Replace(text) => buffer.splice_zone(text),
            Self::Extract => edit::extract(buffer),
            Self::Substitute(substitute) => substitute.apply(buffer),
            Self::Insert(insert) => insert.apply(buffer),
            Self::Append(text) => edit::append(buffer, text),
            Self::RangeSel(range) => range.keep(buffer),
            Self::RangeUnsel(range) => range.delete(buffer),
            Self::Remove => return Ok(Outcome::Drop),
            Self::Base64Encode => codec::base64_encode(buffer),
            Self::Base64Decode => codec::base64_decode(buffer),
            Self::UrlEncode => codec::url_encode(buffer),
            Self::UrlDecode => codec::url_decode(buffer),
        }?;
        Ok(Outcome::Continue)
    }
}
