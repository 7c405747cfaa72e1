//! Static function catalog.
//!
//! Each descriptor declares a function's names, argument-format string and
//! zone policy. [`Catalog::load`] parses every format string once; the parsed
//! [`ArgSchema`] is what configuration consults afterwards.

mod schema;

pub use schema::{ArgKind, ArgSchema, ArgSpec};

use crate::error::ConfigError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionId {
    Upper,
    Lower,
    Camel,
    Trim,
    Translate,
    Quote,
    Unquote,
    Replace,
    Extract,
    Substitute,
    Insert,
    Append,
    RangeSel,
    RangeUnsel,
    Remove,
    Base64Encode,
    Base64Decode,
    UrlEncode,
    UrlDecode,
    Wrap,
}

/// What happens when a function's scoping pattern does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZonePolicy {
    /// The function runs over the whole text.
    Whole,
    /// The unit passes through unchanged.
    Scoped,
    /// As `Scoped`, and a scoping pattern must be configured.
    Required,
}

#[derive(Debug, Serialize)]
pub struct FunctionDescriptor {
    pub id: FunctionId,
    pub short: &'static str,
    pub long: &'static str,
    pub format: &'static str,
    pub zone: ZonePolicy,
    pub implemented: bool,
    pub help: &'static str,
}

pub static DESCRIPTORS: &[FunctionDescriptor] = &[
    FunctionDescriptor {
        id: FunctionId::Upper,
        short: "u",
        long: "upper",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "convert the zone to upper case",
    },
    FunctionDescriptor {
        id: FunctionId::Lower,
        short: "l",
        long: "lower",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "convert the zone to lower case",
    },
    FunctionDescriptor {
        id: FunctionId::Camel,
        short: "c",
        long: "camel",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "camelCase the zone; words are runs of alphanumerics and '_'",
    },
    FunctionDescriptor {
        id: FunctionId::Trim,
        short: "t",
        long: "trim",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "strip leading and trailing whitespace from the zone",
    },
    FunctionDescriptor {
        id: FunctionId::Translate,
        short: "tr",
        long: "translate",
        format: "SS",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "map characters of SET1 to SET2 (ranges like a-z; empty SET2 deletes)",
    },
    FunctionDescriptor {
        id: FunctionId::Quote,
        short: "q",
        long: "quote",
        format: "s",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "wrap the zone in MARK (default '\"'), escaping MARK and '\\'",
    },
    FunctionDescriptor {
        id: FunctionId::Unquote,
        short: "uq",
        long: "unquote",
        format: "s",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "strip one level of quotes (MARK, default '\"' or '\\'') and unescape",
    },
    FunctionDescriptor {
        id: FunctionId::Replace,
        short: "r",
        long: "replace",
        format: "S",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "replace the zone with TEXT",
    },
    FunctionDescriptor {
        id: FunctionId::Extract,
        short: "x",
        long: "extract",
        format: "",
        zone: ZonePolicy::Required,
        implemented: true,
        help: "keep only the zone matched by the scoping pattern",
    },
    FunctionDescriptor {
        id: FunctionId::Substitute,
        short: "s",
        long: "substitute",
        format: "RSp",
        zone: ZonePolicy::Whole,
        implemented: true,
        help: "replace matches of PATTERN with TEXT ($1 expands groups), at most COUNT (0 = all)",
    },
    FunctionDescriptor {
        id: FunctionId::Insert,
        short: "i",
        long: "insert",
        format: "Sn",
        zone: ZonePolicy::Whole,
        implemented: true,
        help: "insert TEXT at character POS (default 0, negative counts from the end)",
    },
    FunctionDescriptor {
        id: FunctionId::Append,
        short: "a",
        long: "append",
        format: "S",
        zone: ZonePolicy::Whole,
        implemented: true,
        help: "append TEXT",
    },
    FunctionDescriptor {
        id: FunctionId::RangeSel,
        short: "rs",
        long: "range_sel",
        format: "Np",
        zone: ZonePolicy::Whole,
        implemented: true,
        help: "keep LEN characters from START (negative START counts from the end)",
    },
    FunctionDescriptor {
        id: FunctionId::RangeUnsel,
        short: "ru",
        long: "range_unsel",
        format: "Np",
        zone: ZonePolicy::Whole,
        implemented: true,
        help: "delete LEN characters from START (negative START counts from the end)",
    },
    FunctionDescriptor {
        id: FunctionId::Remove,
        short: "rm",
        long: "remove",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "drop the unit",
    },
    FunctionDescriptor {
        id: FunctionId::Base64Encode,
        short: "be",
        long: "b64enc",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "base64-encode the zone",
    },
    FunctionDescriptor {
        id: FunctionId::Base64Decode,
        short: "bd",
        long: "b64dec",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "base64-decode the zone",
    },
    FunctionDescriptor {
        id: FunctionId::UrlEncode,
        short: "ue",
        long: "urlenc",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "percent-encode the zone",
    },
    FunctionDescriptor {
        id: FunctionId::UrlDecode,
        short: "ud",
        long: "urldec",
        format: "",
        zone: ZonePolicy::Scoped,
        implemented: true,
        help: "percent-decode the zone",
    },
    FunctionDescriptor {
        id: FunctionId::Wrap,
        short: "w",
        long: "wrap",
        format: "P",
        zone: ZonePolicy::Whole,
        implemented: false,
        help: "wrap the unit at WIDTH columns",
    },
];

/// A descriptor paired with its parsed argument schema.
#[derive(Debug)]
pub struct CatalogEntry {
    pub descriptor: &'static FunctionDescriptor,
    pub schema: ArgSchema,
}

impl CatalogEntry {
    pub fn name(&self) -> &'static str {
        self.descriptor.long
    }
}

/// Parsed function catalog, built once at startup.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse the argument format of every static descriptor.
    pub fn load() -> Result<Self, ConfigError> {
        let entries = DESCRIPTORS
            .iter()
            .map(|descriptor| {
                Ok(CatalogEntry {
                    descriptor,
                    schema: ArgSchema::parse(descriptor.format)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self { entries })
    }

    /// Find a function by long or short name.
    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.descriptor.long == name || entry.descriptor.short == name)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
