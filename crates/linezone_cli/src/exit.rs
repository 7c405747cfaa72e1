//! Error reporting and exit status for the `lz` entrypoint.

use linezone_core::LineZoneError;

/// One-line report printed to stderr.
pub(crate) fn report(err: &LineZoneError) -> String {
    format!("lz: {} error: {}", err.kind(), err)
}

/// The stderr text for `err`, or `None` in quiet mode.
pub(crate) fn message(quiet: bool, err: &LineZoneError) -> Option<String> {
    (!quiet).then(|| report(err))
}

/// Run a fallible entrypoint and exit with the error kind's status on failure.
///
/// `quiet` suppresses the message; the status is unaffected.
pub(crate) fn run_or_exit(quiet: bool, run: impl FnOnce() -> Result<(), LineZoneError>) {
    if let Err(err) = run() {
        tracing::debug!(kind = err.kind(), code = err.exit_code(), "run failed");
        if let Some(text) = message(quiet, &err) {
            eprintln!("{}", text);
        }
        std::process::exit(err.exit_code());
    }
}
