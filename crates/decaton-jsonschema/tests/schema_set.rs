// crates/decaton-jsonschema/tests/schema_set.rs
// ============================================================================
// Module: Schema Set Validation Tests
// Description: Tests for validating documents against a schema directory.
// Purpose: Ensure per-file reporting and failure on unusable directories.
// Dependencies: decaton-jsonschema, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Exercises [`decaton_jsonschema::validate_against_all`] over freshly written
//! schema directories, including broken and missing schema files.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::error::Error;
use std::fs;

use decaton_jsonschema::SchemaBuilder;
use decaton_jsonschema::SchemaError;
use decaton_jsonschema::validate_against_all;
use decaton_processor_properties::DeclaredType;
use decaton_processor_properties::PropertyEntry;
use decaton_processor_properties::PropertyRegistry;
use decaton_processor_properties::ValueType;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Ensures every schema in a generated directory accepts the golden example.
#[test]
fn generated_directory_accepts_example() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    SchemaBuilder::processor_properties()?.write_to(temp.path())?;
    let example: Value =
        serde_json::from_str(include_str!("fixtures/decaton-processor-properties-example.json"))?;
    let checks = validate_against_all(temp.path(), &example)?;
    assert_eq!(checks.len(), 8);
    assert!(checks.iter().all(|check| check.is_ok()), "{checks:?}");
    let mut names: Vec<&str> = checks.iter().map(|check| check.file_name.as_str()).collect();
    let reported = names.clone();
    names.sort_unstable();
    assert_eq!(names, reported, "checks are reported in file name order");
    Ok(())
}

/// Ensures a single-property registry reports missing required properties.
#[test]
fn missing_required_property_is_reported() -> Result<(), Box<dyn Error>> {
    let registry = PropertyRegistry::new(vec![PropertyEntry::new(
        "x",
        DeclaredType::definition_of(ValueType::Integer),
        None,
        None,
    )])?;
    let temp = tempfile::tempdir()?;
    SchemaBuilder::new(registry).write_to(temp.path())?;
    let checks = validate_against_all(temp.path(), &json!({}))?;
    assert_eq!(checks.len(), 8);
    assert!(checks.iter().all(|check| !check.is_ok()));
    let accepted = validate_against_all(temp.path(), &json!({ "x": 3 }))?;
    assert!(accepted.iter().all(|check| check.is_ok()), "{accepted:?}");
    Ok(())
}

/// Ensures an invalid schema file is reported without hiding other results.
#[test]
fn invalid_schema_is_reported_per_file() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    SchemaBuilder::processor_properties()?.write_to(temp.path())?;
    let broken = json!({ "$schema": "http://json-schema.org/draft-07/schema#", "type": 5 });
    fs::write(
        temp.path().join("decaton-processor-properties-schema-broken.json"),
        serde_json::to_vec(&broken)?,
    )?;
    let checks = validate_against_all(temp.path(), &json!({}))?;
    assert_eq!(checks.len(), 9);
    let failed: Vec<&str> = checks
        .iter()
        .filter(|check| !check.is_ok())
        .map(|check| check.file_name.as_str())
        .collect();
    assert_eq!(failed, vec!["decaton-processor-properties-schema-broken.json"]);
    Ok(())
}

/// Ensures a directory without schemas is an error rather than a pass.
#[test]
fn empty_directory_is_an_error() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    fs::write(temp.path().join("notes.json"), b"{}")?;
    let result = validate_against_all(temp.path(), &json!({}));
    assert!(matches!(result, Err(SchemaError::Validation(_))));
    Ok(())
}

/// Ensures a schema file that is not JSON aborts validation.
#[test]
fn non_json_schema_is_an_error() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    fs::write(temp.path().join("decaton-processor-properties-schema-draft_7.json"), b"{")?;
    let result = validate_against_all(temp.path(), &json!({}));
    assert!(matches!(result, Err(SchemaError::Serialization(_))));
    Ok(())
}
