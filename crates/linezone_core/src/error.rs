//! Error kinds for configuration, pattern compilation, I/O and unit overflow.
use crate::constants::{EXIT_CONFIG, EXIT_IO, EXIT_OVERFLOW, EXIT_PATTERN};
use thiserror::Error;

/// Rejected selector or function configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{0}' is declared but not implemented")]
    Unimplemented(String),

    #[error("function '{function}' requires argument {position} (format \"{format}\")")]
    MissingArgument {
        function: String,
        position: usize,
        format: String,
    },

    #[error("function '{function}' argument {position} must not be negative (got {value})")]
    NegativeValue {
        function: String,
        position: usize,
        value: i64,
    },

    #[error("function '{function}' argument {position}: '{raw}' is not an integer")]
    InvalidNumber {
        function: String,
        position: usize,
        raw: String,
    },

    #[error("function '{function}' argument {position}: {reason}")]
    InvalidArgument {
        function: String,
        position: usize,
        reason: String,
    },

    #[error("function '{function}' takes at most {max} argument(s), got {given}")]
    TooManyArguments {
        function: String,
        max: usize,
        given: usize,
    },

    #[error("function '{0}' requires a scoping pattern")]
    PatternRequired(String),

    #[error("too many functions: at most {max} allowed, got {given}")]
    TooManyFunctions { max: usize, given: usize },

    #[error("too many selector boundaries: '{token}' exceeds the limit of {max}")]
    TooManySelectors { token: String, max: usize },

    #[error("invalid argument format \"{format}\": unexpected '{found}'")]
    InvalidFormat { format: String, found: char },
}

/// A pattern that failed to compile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid pattern '{pattern}'{}: {message}", offset_suffix(.offset))]
pub struct PatternError {
    pub pattern: String,
    /// Character offset reported by the engine, when it reports one.
    pub offset: Option<usize>,
    pub message: String,
}

fn offset_suffix(offset: &Option<usize>) -> String {
    offset
        .map(|offset| format!(" at offset {}", offset))
        .unwrap_or_default()
}

/// A unit would grow past the configured size limit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unit of {needed} bytes exceeds the {limit}-byte limit")]
pub struct OverflowError {
    pub needed: usize,
    pub limit: usize,
}

/// Top-level error type; every variant is fatal.
#[derive(Error, Debug)]
pub enum LineZoneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Overflow(#[from] OverflowError),
}

impl LineZoneError {
    /// Wrap an I/O failure with a short description of what was attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Short name of the error kind, used in the one-line report.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Pattern(_) => "pattern",
            Self::Io { .. } => "io",
            Self::Overflow(_) => "overflow",
        }
    }

    /// Kind-specific process exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::Pattern(_) => EXIT_PATTERN,
            Self::Io { .. } => EXIT_IO,
            Self::Overflow(_) => EXIT_OVERFLOW,
        }
    }
}
