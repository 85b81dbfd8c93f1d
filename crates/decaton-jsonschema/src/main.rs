// crates/decaton-jsonschema/src/main.rs
// ============================================================================
// Module: Schema Generator CLI
// Description: CLI entrypoint for generating processor-properties schemas.
// Purpose: Write the schema set to a directory, or verify an existing one.
// Dependencies: clap, decaton-jsonschema, tracing-subscriber
// ============================================================================

//! ## Overview
//! Writes one schema per (draft, policy) combination into the output
//! directory, creating it when absent. With `--check` the directory is
//! verified against a fresh build instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use decaton_jsonschema::SchemaBuilder;
use decaton_jsonschema::SchemaError;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Schema generator CLI arguments.
#[derive(Debug, Parser)]
#[command(
    name = "decaton-jsonschema",
    about = "Generate JSON schemas for Decaton processor properties."
)]
struct Cli {
    /// Output directory for generated schemas.
    #[arg(value_name = "OUT_DIR")]
    out_dir: PathBuf,
    /// Verify the directory matches the generated schemas instead of writing.
    #[arg(long)]
    check: bool,
}

// ============================================================================
// SECTION: CLI Execution
// ============================================================================

/// CLI entrypoint.
fn main() -> ExitCode {
    init_logging();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

/// Executes the CLI command.
fn run(cli: Cli) -> Result<(), SchemaError> {
    let builder = SchemaBuilder::processor_properties()?;
    if cli.check {
        builder.verify_output(&cli.out_dir)?;
        tracing::info!(dir = %cli.out_dir.display(), "schemas are up to date");
    } else {
        let bundle = builder.write_to(&cli.out_dir)?;
        tracing::info!(count = bundle.artifacts.len(), "schema generation complete");
    }
    Ok(())
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `info` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Reports CLI errors to stderr and returns a failure exit code.
fn report_error(err: &SchemaError) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "{err}");
    ExitCode::FAILURE
}
