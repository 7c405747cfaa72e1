//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_MAX_UNIT_LEN, DEFAULT_TERMINATOR, ENV_MAX_UNIT, ENV_QUIET, ENV_TERMINATOR,
};
use crate::text::unescape_terminator;
use std::env;

/// Runtime defaults for the `lz` front end; command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest line or packed block, in bytes.
    pub max_unit_len: usize,
    /// Terminator written after every unit.
    pub terminator: String,
    /// Suppress error message text (exit status is unaffected).
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_unit_len: DEFAULT_MAX_UNIT_LEN,
            terminator: DEFAULT_TERMINATOR.to_string(),
            quiet: false,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable or zero `LINEZONE_MAX_UNIT` values fall back to the default.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_unit_len: env::var(ENV_MAX_UNIT)
                .ok()
                .and_then(|raw| raw.trim().parse::<usize>().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.max_unit_len),
            terminator: env::var(ENV_TERMINATOR)
                .map(|raw| unescape_terminator(&raw))
                .unwrap_or(defaults.terminator),
            quiet: env_flag_enabled(ENV_QUIET),
        }
    }
}
