// crates/decaton-jsonschema/src/bin/validate.rs
// ============================================================================
// Module: Schema Validation CLI
// Description: Validates a properties document against every generated schema.
// Purpose: Catch configuration documents that any bundled draft would reject.
// Dependencies: clap, decaton-jsonschema, serde_json, tracing-subscriber
// ============================================================================

//! ## Overview
//! Prints one line per schema file and exits non-zero when any schema rejects
//! the target document or cannot be loaded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use decaton_jsonschema::SchemaCheck;
use decaton_jsonschema::SchemaError;
use decaton_jsonschema::validate_against_all;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Validation CLI arguments.
#[derive(Debug, Parser)]
#[command(
    name = "decaton-jsonschema-validate",
    about = "Validate a Decaton properties document against all generated schemas."
)]
struct Cli {
    /// JSON document to validate.
    #[arg(value_name = "TARGET")]
    target: PathBuf,
    /// Directory holding the generated schemas.
    #[arg(long, value_name = "DIR", default_value = "dist")]
    schemas: PathBuf,
}

// ============================================================================
// SECTION: CLI Execution
// ============================================================================

/// CLI entrypoint.
fn main() -> ExitCode {
    init_logging();
    match run(&Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => report_error(&err),
    }
}

/// Validates the target and reports per-schema results; returns overall success.
fn run(cli: &Cli) -> Result<bool, SchemaError> {
    let bytes = std::fs::read(&cli.target)
        .map_err(|err| SchemaError::Io(format!("{}: {err}", cli.target.display())))?;
    let instance: Value = serde_json::from_slice(&bytes)
        .map_err(|err| SchemaError::Serialization(format!("{}: {err}", cli.target.display())))?;
    let checks = validate_against_all(&cli.schemas, &instance)?;
    for check in &checks {
        write_check(check).map_err(|err| SchemaError::Io(err.to_string()))?;
    }
    Ok(checks.iter().all(SchemaCheck::is_ok))
}

/// Writes one check result: successes to stdout, failures to stderr.
fn write_check(check: &SchemaCheck) -> std::io::Result<()> {
    if check.is_ok() {
        let mut stdout = std::io::stdout();
        return writeln!(stdout, "ok      {}", check.file_name);
    }
    let mut stderr = std::io::stderr();
    writeln!(stderr, "FAILED  {}", check.file_name)?;
    for error in &check.errors {
        writeln!(stderr, "        {error}")?;
    }
    Ok(())
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Reports CLI errors to stderr and returns a failure exit code.
fn report_error(err: &SchemaError) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "{err}");
    ExitCode::FAILURE
}
