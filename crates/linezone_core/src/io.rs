//! Line sources and unit sinks.

use crate::error::LineZoneError;
use std::io::{BufRead, Write};

/// Something that yields lines with their terminators stripped.
pub trait LineSource {
    /// Display name used in log and error context.
    fn name(&self) -> &str;

    /// Next line, or `None` at end of source.
    fn next_line(&mut self) -> Result<Option<String>, LineZoneError>;
}

/// Line source over any buffered reader.
///
/// Both `\n` and `\r\n` terminators are stripped. Invalid UTF-8 is replaced
/// rather than rejected so binary noise does not abort a run.
pub struct ReaderSource<R> {
    name: String,
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_line(&mut self) -> Result<Option<String>, LineZoneError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|err| LineZoneError::io(format!("failed to read {}", self.name), err))?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// Destination for finished units.
pub trait UnitSink {
    fn write_unit(&mut self, text: &str) -> Result<(), LineZoneError>;

    /// Flush and release whatever the sink holds. Called once, also after
    /// a failed run.
    fn finish(&mut self) -> Result<(), LineZoneError> {
        Ok(())
    }
}

/// Writes each unit followed by a terminator.
pub struct WriteSink<W: Write> {
    writer: W,
    terminator: String,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W, terminator: impl Into<String>) -> Self {
        Self {
            writer,
            terminator: terminator.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UnitSink for WriteSink<W> {
    fn write_unit(&mut self, text: &str) -> Result<(), LineZoneError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.write_all(self.terminator.as_bytes()))
            .map_err(|err| LineZoneError::io("failed to write output", err))
    }

    fn finish(&mut self) -> Result<(), LineZoneError> {
        self.writer
            .flush()
            .map_err(|err| LineZoneError::io("failed to flush output", err))
    }
}

/// Collects units in memory.
impl UnitSink for Vec<String> {
    fn write_unit(&mut self, text: &str) -> Result<(), LineZoneError> {
        self.push(text.to_string());
        Ok(())
    }
}
