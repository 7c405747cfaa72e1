//! Argument-format strings parsed into typed per-argument specs.
//!
//! One character per argument: uppercase is required, lowercase optional.
//! `R` pattern, `N` signed integer, `P` non-negative integer, `S` string.

use crate::constants::MAX_FUNCTION_ARGS;
use crate::error::ConfigError;

/// Value type an argument is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Pattern,
    Signed,
    Unsigned,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub kind: ArgKind,
    pub required: bool,
}

/// Parsed form of a function's argument-format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSchema {
    format: &'static str,
    specs: Vec<ArgSpec>,
}

impl ArgSchema {
    pub fn parse(format: &'static str) -> Result<Self, ConfigError> {
        let mut specs = Vec::with_capacity(format.len());
        for code in format.chars() {
            let kind = match code.to_ascii_uppercase() {
                'R' => ArgKind::Pattern,
                'N' => ArgKind::Signed,
                'P' => ArgKind::Unsigned,
                'S' => ArgKind::Text,
                _ => {
                    return Err(ConfigError::InvalidFormat {
                        format: format.to_string(),
                        found: code,
                    })
                }
            };
            specs.push(ArgSpec {
                kind,
                required: code.is_ascii_uppercase(),
            });
        }
        if specs.len() > MAX_FUNCTION_ARGS {
            return Err(ConfigError::InvalidFormat {
                format: format.to_string(),
                found: format.chars().nth(MAX_FUNCTION_ARGS).unwrap_or_default(),
            });
        }
        Ok(Self { format, specs })
    }

    pub fn format(&self) -> &'static str {
        self.format
    }

    pub fn specs(&self) -> &[ArgSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Number of leading arguments that must be supplied.
    pub fn required_count(&self) -> usize {
        self.specs.iter().filter(|spec| spec.required).count()
    }
}
