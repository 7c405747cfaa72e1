//! Root crate facade for linezone: line selection and zone-based text
//! transformation.

pub use linezone_core::{
    args, catalog, config, constants, error, functions, io, pattern, pipeline, selector, text,
    zone, Catalog, Config, ConfigError, FunctionInstance, FunctionToken, LineSource,
    LineZoneError, OverflowError, Pattern, PatternCache, PatternError, Pipeline, PipelineConfig,
    PipelineOptions, ReaderSource, SelectorSpec, Unit, UnitSink, WriteSink, ZoneBuffer,
};
