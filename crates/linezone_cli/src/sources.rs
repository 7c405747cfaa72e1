//! Input enumeration: files in argument order, or stdin.

use linezone_core::{LineSource, LineZoneError, Pipeline, ReaderSource, UnitSink};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

const STDIN_NAME: &str = "-";

/// Open one input; `-` is stdin.
pub(crate) fn open_source(path: &Path) -> Result<Box<dyn LineSource>, LineZoneError> {
    if path == Path::new(STDIN_NAME) {
        return Ok(Box::new(ReaderSource::new("<stdin>", io::stdin().lock())));
    }
    let file = File::open(path)
        .map_err(|err| LineZoneError::io(format!("failed to open {}", path.display()), err))?;
    Ok(Box::new(ReaderSource::new(
        path.display().to_string(),
        BufReader::new(file),
    )))
}

/// Run every input through the pipeline, then finish the sink.
///
/// The sink is finished even when a source fails; the first error wins.
pub(crate) fn run_all<S>(
    pipeline: &mut Pipeline,
    files: &[PathBuf],
    sink: &mut S,
) -> Result<(), LineZoneError>
where
    S: UnitSink + ?Sized,
{
    let result = run_sources(pipeline, files, sink);
    let finished = sink.finish();
    result.and(finished)
}

fn run_sources<S>(pipeline: &mut Pipeline, files: &[PathBuf], sink: &mut S) -> Result<(), LineZoneError>
where
    S: UnitSink + ?Sized,
{
    if files.is_empty() {
        let mut source = open_source(Path::new(STDIN_NAME))?;
        pipeline.run_source(source.as_mut(), sink)?;
        return Ok(());
    }
    for path in files {
        let mut source = open_source(path)?;
        pipeline.run_source(source.as_mut(), sink)?;
    }
    Ok(())
}
