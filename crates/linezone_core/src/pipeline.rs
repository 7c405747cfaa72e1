//! Selector plus function chain driver.
//!
//! A [`Pipeline`] is built once from a [`PipelineConfig`]; all configuration
//! errors surface from [`Pipeline::new`] before any input is read. It then
//! consumes sources line by line, hands ready units to the function chain and
//! writes results to a [`UnitSink`].

use crate::args::{FunctionInstance, FunctionToken};
use crate::catalog::Catalog;
use crate::constants::{DEFAULT_MAX_UNIT_LEN, MAX_FUNCTIONS};
use crate::error::{ConfigError, LineZoneError, OverflowError};
use crate::functions::Outcome;
use crate::io::{LineSource, ReaderSource, UnitSink};
use crate::pattern::PatternCache;
use crate::selector::{Selector, SelectorSpec};
use crate::zone::{Unit, ZoneBuffer};

/// Per-run switches shared by the selector and the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub invert: bool,
    pub pack: bool,
    pub skip_blank: bool,
    /// Drop unselected units instead of passing them through.
    pub only_selected: bool,
    pub max_unit_len: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            invert: false,
            pack: false,
            skip_blank: false,
            only_selected: false,
            max_unit_len: DEFAULT_MAX_UNIT_LEN,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub selector_tokens: Vec<String>,
    pub functions: Vec<FunctionToken>,
    pub options: PipelineOptions,
}

#[derive(Debug)]
pub struct Pipeline {
    patterns: PatternCache,
    selector: Selector,
    chain: Vec<FunctionInstance>,
    buffer: ZoneBuffer,
    options: PipelineOptions,
}

impl Pipeline {
    /// Validate and compile the selector and function chain.
    ///
    /// # Errors
    /// Any [`ConfigError`] or [`crate::PatternError`] in the configuration.
    pub fn new(config: &PipelineConfig, catalog: &Catalog) -> Result<Self, LineZoneError> {
        let options = config.options;
        if config.functions.len() > MAX_FUNCTIONS {
            return Err(ConfigError::TooManyFunctions {
                max: MAX_FUNCTIONS,
                given: config.functions.len(),
            }
            .into());
        }

        let mut patterns = PatternCache::new();
        let spec = SelectorSpec::from_tokens(&config.selector_tokens, &mut patterns)?
            .with_options(options.invert, options.pack, options.skip_blank);
        let chain = config
            .functions
            .iter()
            .map(|token| FunctionInstance::configure(token, catalog, &mut patterns))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            functions = chain.len(),
            patterns = patterns.len(),
            max_unit_len = options.max_unit_len,
            "pipeline ready"
        );
        Ok(Self {
            patterns,
            selector: Selector::new(spec, options.max_unit_len),
            chain,
            buffer: ZoneBuffer::new(options.max_unit_len),
            options,
        })
    }

    pub fn chain(&self) -> &[FunctionInstance] {
        &self.chain
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn patterns(&self) -> &PatternCache {
        &self.patterns
    }

    /// Start a new source: selector state and any pending block are reset.
    pub fn begin_source(&mut self, name: &str) {
        tracing::debug!(source = name, "begin source");
        self.selector.reset();
    }

    /// Feed one line of the current source.
    pub fn process_line<S>(&mut self, line: &str, sink: &mut S) -> Result<(), LineZoneError>
    where
        S: UnitSink + ?Sized,
    {
        if line.len() > self.options.max_unit_len {
            return Err(OverflowError {
                needed: line.len(),
                limit: self.options.max_unit_len,
            }
            .into());
        }
        let advance = self.selector.advance(Some(line))?;
        for unit in advance.into_units() {
            self.emit(unit, sink)?;
        }
        Ok(())
    }

    /// Close the current source, flushing a pending packed block.
    pub fn end_source<S>(&mut self, sink: &mut S) -> Result<(), LineZoneError>
    where
        S: UnitSink + ?Sized,
    {
        let advance = self.selector.advance(None)?;
        for unit in advance.into_units() {
            self.emit(unit, sink)?;
        }
        Ok(())
    }

    /// Run one whole source through the pipeline. The sink is not finished.
    ///
    /// # Returns
    /// Number of lines read.
    pub fn run_source<L, S>(&mut self, source: &mut L, sink: &mut S) -> Result<u64, LineZoneError>
    where
        L: LineSource + ?Sized,
        S: UnitSink + ?Sized,
    {
        self.begin_source(source.name());
        let mut lines = 0u64;
        while let Some(line) = source.next_line()? {
            lines += 1;
            self.process_line(&line, sink)?;
        }
        self.end_source(sink)?;
        tracing::debug!(source = source.name(), lines, "end source");
        Ok(lines)
    }

    /// Run `text` as a single source and collect the written units.
    pub fn run_str(&mut self, text: &str) -> Result<Vec<String>, LineZoneError> {
        let mut source = ReaderSource::new("<string>", text.as_bytes());
        let mut out = Vec::new();
        self.run_source(&mut source, &mut out)?;
        Ok(out)
    }

    /// Run the function chain over one unit of text.
    ///
    /// # Returns
    /// The final text, or `None` when a function dropped the unit.
    pub fn transform(&mut self, text: &str) -> Result<Option<String>, OverflowError> {
        self.buffer.load(text)?;
        for instance in &self.chain {
            match instance.apply(&mut self.buffer)? {
                Outcome::Continue => self.buffer.commit(),
                Outcome::Drop => {
                    tracing::trace!(function = instance.descriptor().long, "unit dropped");
                    return Ok(None);
                }
            }
        }
        Ok(Some(self.buffer.take()))
    }

    fn emit<S>(&mut self, unit: Unit, sink: &mut S) -> Result<(), LineZoneError>
    where
        S: UnitSink + ?Sized,
    {
        if !unit.selected {
            if self.options.only_selected {
                return Ok(());
            }
            return sink.write_unit(&unit.text);
        }
        match self.transform(&unit.text)? {
            Some(text) => sink.write_unit(&text),
            None => Ok(()),
        }
    }
}
