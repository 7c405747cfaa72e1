//! Core library for linezone (selection, zones, function catalog, pipeline).

/// Argument coercion and configured function instances.
pub mod args;
/// Static function catalog and parsed argument schemas.
pub mod catalog;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants and limits.
pub mod constants;
/// Environment overrides for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod env;
/// Error kinds and exit status mapping.
pub mod error;
/// Typed transformation functions and their implementations.
pub mod functions;
/// Line sources and unit sinks.
pub mod io;
/// Compiled pattern adapter and cache.
pub mod pattern;
/// Selector plus function chain driver.
pub mod pipeline;
/// Selection state machine and block packing.
pub mod selector;
/// Character and offset helpers.
pub mod text;
/// Bounded source/destination buffer with an active zone.
pub mod zone;

pub use args::{FunctionInstance, FunctionToken};
pub use catalog::{Catalog, FunctionDescriptor, FunctionId, ZonePolicy};
pub use config::Config;
pub use constants::*;
pub use error::{ConfigError, LineZoneError, OverflowError, PatternError};
pub use io::{LineSource, ReaderSource, UnitSink, WriteSink};
pub use pattern::{Pattern, PatternCache};
pub use pipeline::{Pipeline, PipelineConfig, PipelineOptions};
pub use selector::{Boundary, Selector, SelectorSpec, SelectorState};
pub use zone::{Unit, ZoneBuffer};
