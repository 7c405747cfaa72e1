//! Shared constants used across linezone crates.

/// Default upper bound, in bytes, for a line or packed block.
pub const DEFAULT_MAX_UNIT_LEN: usize = 64 * 1024;

/// Default terminator appended to every written unit.
pub const DEFAULT_TERMINATOR: &str = "\n";

/// Maximum number of arguments a function token may carry.
pub const MAX_FUNCTION_ARGS: usize = 3;

/// Maximum number of function tokens in one chain.
pub const MAX_FUNCTIONS: usize = 16;

/// Maximum number of boundary tokens (start, stop) in a selector.
pub const MAX_SELECTOR_BOUNDARIES: usize = 2;

/// Pattern compiled for an empty scoping-pattern slot.
pub const WHOLE_UNIT_PATTERN: &str = r"(?s)\A.*\z";

/// Separator placed between lines of a packed block.
pub const PACK_SEPARATOR: char = '\n';

/// Environment variable overriding the unit size limit.
pub const ENV_MAX_UNIT: &str = "LINEZONE_MAX_UNIT";
/// Environment variable overriding the output terminator.
pub const ENV_TERMINATOR: &str = "LINEZONE_TERMINATOR";
/// Environment flag enabling quiet error reporting.
pub const ENV_QUIET: &str = "LINEZONE_QUIET";

/// Exit status for configuration errors.
pub const EXIT_CONFIG: i32 = 2;
/// Exit status for pattern compilation errors.
pub const EXIT_PATTERN: i32 = 3;
/// Exit status for source or sink I/O errors.
pub const EXIT_IO: i32 = 4;
/// Exit status for unit overflow.
pub const EXIT_OVERFLOW: i32 = 5;
