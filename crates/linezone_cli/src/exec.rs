//! Execute mode: every output unit is run as a shell command.

use linezone_core::{LineZoneError, UnitSink};
use std::io::Write;
use std::process::{Command, Stdio};

const SHELL: &str = "sh";

/// Runs each unit through `sh -c` and relays the command's stdout.
pub(crate) struct ExecSink<W: Write> {
    out: W,
}

impl<W: Write> ExecSink<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UnitSink for ExecSink<W> {
    fn write_unit(&mut self, text: &str) -> Result<(), LineZoneError> {
        tracing::debug!(command = text, "executing unit");
        let output = Command::new(SHELL)
            .arg("-c")
            .arg(text)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| LineZoneError::io(format!("failed to run {} -c", SHELL), err))?;
        self.out
            .write_all(&output.stdout)
            .map_err(|err| LineZoneError::io("failed to write command output", err))?;
        if !output.status.success() {
            tracing::warn!(command = text, status = %output.status, "command exited unsuccessfully");
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), LineZoneError> {
        self.out
            .flush()
            .map_err(|err| LineZoneError::io("failed to flush output", err))
    }
}
