//! `lz`: select lines and transform zones of them.

mod exec;
mod exit;
mod sources;
mod tokens;

#[cfg(test)]
mod tests;

use clap::Parser;
use exec::ExecSink;
use linezone_core::catalog::DESCRIPTORS;
use linezone_core::text::unescape_terminator;
use linezone_core::{
    Catalog, Config, LineZoneError, Pipeline, PipelineConfig, PipelineOptions, WriteSink,
};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "lz", about = "Select lines and transform text zones", version)]
struct Cli {
    /// Selector token: start boundary, stop boundary or `+N` shift (repeatable)
    #[arg(short = 's', long = "select", value_name = "TOKEN", allow_hyphen_values = true)]
    select: Vec<String>,

    /// Function token NAME[<d>PATTERN[<d>ARG...]] (repeatable, applied in order)
    #[arg(short = 'f', long = "func", value_name = "SPEC", allow_hyphen_values = true)]
    func: Vec<String>,

    /// Invert the selection
    #[arg(short = 'v', long)]
    invert: bool,

    /// Pack contiguous selected lines into one unit
    #[arg(short, long)]
    pack: bool,

    /// Drop blank lines
    #[arg(short = 'b', long)]
    skip_blank: bool,

    /// Write only selected units
    #[arg(short, long)]
    only_selected: bool,

    /// Run each output unit as a shell command
    #[arg(short = 'x', long)]
    execute: bool,

    /// Output terminator (escapes \n \r \t \0 \\ are expanded)
    #[arg(short, long, value_name = "STR")]
    terminator: Option<String>,

    /// Largest line or packed block in bytes [env: LINEZONE_MAX_UNIT]
    #[arg(long, value_name = "BYTES", value_parser = parse_positive_usize)]
    max_unit: Option<usize>,

    /// Suppress error messages [env: LINEZONE_QUIET]
    #[arg(short, long)]
    quiet: bool,

    /// List the function catalog and exit
    #[arg(long)]
    list: bool,

    /// Print the catalog listing as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Input files; `-` or none reads stdin
    files: Vec<PathBuf>,
}

impl Cli {
    fn pipeline_config(&self, config: &Config) -> Result<PipelineConfig, LineZoneError> {
        let functions = self
            .func
            .iter()
            .map(|raw| tokens::split_function_token(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PipelineConfig {
            selector_tokens: self.select.clone(),
            functions,
            options: PipelineOptions {
                invert: self.invert,
                pack: self.pack,
                skip_blank: self.skip_blank,
                only_selected: self.only_selected,
                max_unit_len: self.max_unit.unwrap_or(config.max_unit_len),
            },
        })
    }

    /// `-q` or `LINEZONE_QUIET`.
    fn quiet(&self, config: &Config) -> bool {
        self.quiet || config.quiet
    }

    fn terminator(&self, config: &Config) -> String {
        self.terminator
            .as_deref()
            .map(unescape_terminator)
            .unwrap_or_else(|| config.terminator.clone())
    }
}

/// Parses a strictly positive `usize` (`> 0`).
fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid integer value '{}'", raw))?;
    if parsed == 0 {
        Err("value must be greater than zero".to_string())
    } else {
        Ok(parsed)
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linezone=warn,lz=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Print the catalog, one function per line or as JSON.
fn write_catalog<W: Write>(out: &mut W, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, DESCRIPTORS)?;
        return writeln!(out);
    }
    for descriptor in DESCRIPTORS {
        let format = if descriptor.format.is_empty() {
            "-"
        } else {
            descriptor.format
        };
        let status = if descriptor.implemented {
            ""
        } else {
            " (not implemented)"
        };
        writeln!(
            out,
            "{:<12} {:<3} {:<4} {}{}",
            descriptor.long, descriptor.short, format, descriptor.help, status
        )?;
    }
    Ok(())
}

fn run(cli: Cli, config: &Config) -> Result<(), LineZoneError> {
    let catalog = Catalog::load()?;
    let stdout = io::stdout();

    if cli.list {
        let mut out = stdout.lock();
        return write_catalog(&mut out, cli.json)
            .map_err(|err| LineZoneError::io("failed to write catalog", err));
    }

    // Every configuration error surfaces here, before any input is read.
    let mut pipeline = Pipeline::new(&cli.pipeline_config(config)?, &catalog)?;

    if cli.execute {
        let mut sink = ExecSink::new(stdout.lock());
        sources::run_all(&mut pipeline, &cli.files, &mut sink)
    } else {
        let mut sink = WriteSink::new(BufWriter::new(stdout.lock()), cli.terminator(config));
        sources::run_all(&mut pipeline, &cli.files, &mut sink)
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::from_env();
    let quiet = cli.quiet(&config);
    exit::run_or_exit(quiet, || run(cli, &config));
}
