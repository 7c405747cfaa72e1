//! Unit tests for the `lz` CLI entrypoint module.

use super::exit::{message, report};
use super::sources::run_all;
use super::tokens::split_function_token;
use super::{write_catalog, Cli};
use clap::Parser;
use linezone_core::catalog::DESCRIPTORS;
use linezone_core::env::{env_lock, EnvGuard};
use linezone_core::{
    Catalog, Config, ConfigError, FunctionToken, LineZoneError, Pipeline, UnitSink, WriteSink,
    ENV_MAX_UNIT, ENV_QUIET, ENV_TERMINATOR, EXIT_CONFIG, EXIT_IO,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("lz").chain(args.iter().copied())).expect("parse")
}

fn pipeline_for(cli: &Cli) -> Result<Pipeline, LineZoneError> {
    let catalog = Catalog::load()?;
    Pipeline::new(&cli.pipeline_config(&Config::default())?, &catalog)
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write input");
    path
}

/// Parse `args`, run the named files and collect the output units.
fn run_files(args: &[&str], files: &[PathBuf]) -> Result<Vec<String>, LineZoneError> {
    let cli = parse(args);
    let mut pipeline = pipeline_for(&cli)?;
    let mut out = Vec::new();
    run_all(&mut pipeline, files, &mut out)?;
    Ok(out)
}

#[test]
fn clap_parses_repeatable_tokens_and_flags() {
    let cli = parse(&["-s", "^B", "-s", "^E", "-f", "upper", "-f", "trim", "-p", "-o", "a.txt", "-"]);
    assert_eq!(cli.select, vec!["^B", "^E"]);
    assert_eq!(cli.func, vec!["upper", "trim"]);
    assert!(cli.pack);
    assert!(cli.only_selected);
    assert!(!cli.invert);
    assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("-")]);
}

#[test]
fn clap_accepts_hyphenated_token_values() {
    let cli = parse(&["-s", "-3", "-s", "+2"]);
    assert_eq!(cli.select, vec!["-3", "+2"]);
}

#[test]
fn clap_rejects_json_without_list_and_zero_max_unit() {
    assert!(Cli::try_parse_from(["lz", "--json"]).is_err());
    assert!(Cli::try_parse_from(["lz", "--max-unit", "0"]).is_err());
    assert!(Cli::try_parse_from(["lz", "--list", "--json"]).is_ok());
}

#[test]
fn split_token_with_pattern_slot_and_args() {
    assert_eq!(
        split_function_token("s,,/to/,/via/").expect("split"),
        FunctionToken::new("s")
            .with_pattern("")
            .with_args(["/to/", "/via/"])
    );
    assert_eq!(
        split_function_token("upper/[a-z]+/").expect("split"),
        FunctionToken::new("upper").with_pattern("[a-z]+")
    );
    assert_eq!(
        split_function_token("trim").expect("split"),
        FunctionToken::new("trim")
    );
}

#[test]
fn split_token_honors_escaped_delimiter() {
    assert_eq!(
        split_function_token(r"r/a\/b/x\y").expect("split"),
        FunctionToken::new("r")
            .with_pattern("a/b")
            .with_args([r"x\y"])
    );
}

#[test]
fn split_token_keeps_empty_middle_fields() {
    assert_eq!(
        split_function_token("rs::-3").expect("split"),
        FunctionToken::new("rs").with_pattern("").with_args(["-3"])
    );
    assert_eq!(
        split_function_token("i|||").expect("split"),
        FunctionToken::new("i").with_pattern("").with_args([""])
    );
}

#[test]
fn split_token_without_name_is_rejected() {
    assert_eq!(
        split_function_token("/x/"),
        Err(ConfigError::UnknownFunction("/x/".to_string()))
    );
}

#[test]
fn end_to_end_substitute_and_range() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_file(&dir, "in.txt", "path/to/file\n0123456789\n");
    let out = run_files(&["-f", "s,,/to/,/via/", "-f", "rs::-3"], &[input]).expect("run");
    assert_eq!(out, vec!["ile", "789"]);
}

#[test]
fn selector_state_restarts_for_each_file() {
    let dir = TempDir::new().expect("tempdir");
    let first = write_file(&dir, "a.txt", "foo\nbar\nbaz\n");
    let second = write_file(&dir, "b.txt", "baz\nbar\n");
    let out = run_files(&["-s", "bar", "-f", "upper", "-o"], &[first, second]).expect("run");
    assert_eq!(out, vec!["BAR", "BAZ", "BAR"]);
}

#[test]
fn packed_blocks_cross_lines() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_file(&dir, "in.txt", "x\nB\n1\nE\ny\n");
    let out = run_files(&["-s", "^B", "-s", "^E", "-p", "-f", "s,,\n, "], &[input]).expect("run");
    assert_eq!(out, vec!["x", "B 1", "E", "y"]);
}

#[test]
fn unimplemented_function_fails_before_reading_input() {
    let cli = parse(&["-f", "wrap::10", "/does/not/exist"]);
    let err = pipeline_for(&cli).expect_err("unimplemented");
    assert_eq!(err.exit_code(), EXIT_CONFIG);
    assert_eq!(
        report(&err),
        "lz: config error: function 'wrap' is declared but not implemented"
    );
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("missing.txt");
    let err = run_files(&[], &[missing]).expect_err("missing");
    assert_eq!(err.exit_code(), EXIT_IO);
    assert!(report(&err).starts_with("lz: io error: failed to open"));
}

#[test]
fn sink_is_finished_even_when_a_source_fails() {
    struct Recording {
        units: Vec<String>,
        finished: bool,
    }

    impl UnitSink for Recording {
        fn write_unit(&mut self, text: &str) -> Result<(), LineZoneError> {
            self.units.push(text.to_string());
            Ok(())
        }

        fn finish(&mut self) -> Result<(), LineZoneError> {
            self.finished = true;
            Ok(())
        }
    }

    let dir = TempDir::new().expect("tempdir");
    let good = write_file(&dir, "good.txt", "a\n");
    let missing = dir.path().join("missing.txt");
    let cli = parse(&[]);
    let mut pipeline = pipeline_for(&cli).expect("pipeline");
    let mut sink = Recording {
        units: Vec::new(),
        finished: false,
    };
    assert!(run_all(&mut pipeline, &[good, missing], &mut sink).is_err());
    assert_eq!(sink.units, vec!["a"]);
    assert!(sink.finished);
}

#[test]
fn terminator_flag_overrides_config() {
    let cli = parse(&["-t", r"\r\n"]);
    assert_eq!(cli.terminator(&Config::default()), "\r\n");
    let cli = parse(&[]);
    assert_eq!(cli.terminator(&Config::default()), "\n");

    let mut sink = WriteSink::new(Vec::new(), cli.terminator(&Config::default()));
    sink.write_unit("one").expect("write");
    sink.finish().expect("finish");
    assert_eq!(sink.into_inner(), b"one\n");
}

#[test]
fn max_unit_flag_overrides_environment() {
    let _lock = env_lock().lock().expect("env lock");
    let _max = EnvGuard::set(ENV_MAX_UNIT, "8");
    let _term = EnvGuard::remove(ENV_TERMINATOR);
    let config = Config::from_env();
    assert_eq!(config.max_unit_len, 8);

    let from_env = parse(&[]).pipeline_config(&config).expect("config");
    assert_eq!(from_env.options.max_unit_len, 8);
    let from_flag = parse(&["--max-unit", "32"])
        .pipeline_config(&config)
        .expect("config");
    assert_eq!(from_flag.options.max_unit_len, 32);
}

#[test]
fn quiet_mode_suppresses_the_message_but_keeps_the_status() {
    let cli = parse(&["-f", "wrap::10"]);
    let err = pipeline_for(&cli).expect_err("unimplemented");

    assert_eq!(message(false, &err), Some(report(&err)));
    assert_eq!(message(true, &err), None);
    assert_eq!(err.exit_code(), EXIT_CONFIG);
}

#[test]
fn quiet_flag_merges_with_environment() {
    let _lock = env_lock().lock().expect("env lock");
    {
        let _quiet = EnvGuard::remove(ENV_QUIET);
        let config = Config::from_env();
        assert!(!parse(&[]).quiet(&config));
        assert!(parse(&["-q"]).quiet(&config));
    }
    {
        let _quiet = EnvGuard::set(ENV_QUIET, "1");
        let config = Config::from_env();
        assert!(parse(&[]).quiet(&config));
    }
    let _quiet = EnvGuard::set(ENV_QUIET, "off");
    assert!(!parse(&[]).quiet(&Config::from_env()));
}

#[test]
fn catalog_listing_text_and_json() {
    let mut text = Vec::new();
    write_catalog(&mut text, false).expect("list");
    let text = String::from_utf8(text).expect("utf8");
    assert_eq!(text.lines().count(), DESCRIPTORS.len());
    assert!(text.lines().any(|line| line.starts_with("substitute")));
    assert!(text.contains("(not implemented)"));

    let mut json = Vec::new();
    write_catalog(&mut json, true).expect("list");
    let value: serde_json::Value = serde_json::from_slice(&json).expect("json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), DESCRIPTORS.len());
    assert_eq!(items[0]["long"], "upper");
    assert_eq!(items[0]["zone"], "scoped");
}

#[cfg(unix)]
#[test]
fn exec_sink_relays_command_stdout() {
    use super::exec::ExecSink;

    let mut sink = ExecSink::new(Vec::new());
    sink.write_unit("echo hello").expect("exec");
    sink.write_unit("printf 'a b'; exit 3").expect("non-zero status is not fatal");
    sink.finish().expect("finish");
    assert_eq!(sink.into_inner(), b"hello\na b");
}
