// crates/decaton-jsonschema/src/validate.rs
// ============================================================================
// Module: Schema Set Validation
// Description: Validates a document against every generated schema in a directory.
// Purpose: Check configuration documents against all bundled drafts at once.
// Dependencies: cap-std, jsonschema, serde_json
// ============================================================================

//! ## Overview
//! Every `decaton-processor-properties-schema-*.json` file in the directory is
//! checked against its own draft's meta-schema, compiled with the draft named
//! by its `$schema`, and run against the instance. A schema that fails to
//! compile is reported like a failed validation so one broken file does not
//! hide the results of the others.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;

use crate::SchemaError;
use crate::builder::collect_schema_files;
use crate::builder::open_output_dir;

// ============================================================================
// SECTION: Results
// ============================================================================

/// Outcome of validating one document against one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCheck {
    /// Schema file name.
    pub file_name: String,
    /// Validation or compilation messages; empty on success.
    pub errors: Vec<String>,
}

impl SchemaCheck {
    /// Returns true when the document passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Compiles a schema after checking it against its meta-schema.
///
/// # Errors
///
/// Returns [`SchemaError::Validation`] when the schema is not a valid schema
/// of its declared draft or fails to compile.
pub fn compile_schema(schema: &Value) -> Result<Validator, SchemaError> {
    jsonschema::meta::validate(schema)
        .map_err(|err| SchemaError::Validation(format!("invalid schema: {err}")))?;
    jsonschema::validator_for(schema)
        .map_err(|err| SchemaError::Validation(format!("schema compilation failed: {err}")))
}

/// Returns every validation error message for an instance.
#[must_use]
pub fn validation_errors(validator: &Validator, instance: &Value) -> Vec<String> {
    validator.iter_errors(instance).map(|err| err.to_string()).collect()
}

/// Validates an instance against every generated schema in a directory.
///
/// # Errors
///
/// Returns [`SchemaError`] when the directory cannot be read, holds no
/// schemas, or a schema file is not JSON.
pub fn validate_against_all(
    schema_dir: &Path,
    instance: &Value,
) -> Result<Vec<SchemaCheck>, SchemaError> {
    let dir = open_output_dir(schema_dir, false)?;
    let file_names = collect_schema_files(&dir)?;
    if file_names.is_empty() {
        return Err(SchemaError::Validation(format!(
            "no schemas found in {}",
            schema_dir.display()
        )));
    }
    let mut checks = Vec::with_capacity(file_names.len());
    for file_name in file_names {
        let bytes = dir.read(&file_name).map_err(|err| SchemaError::Io(err.to_string()))?;
        let schema: Value = serde_json::from_slice(&bytes)
            .map_err(|err| SchemaError::Serialization(format!("{file_name}: {err}")))?;
        let errors = match compile_schema(&schema) {
            Ok(validator) => validation_errors(&validator, instance),
            Err(err) => vec![err.to_string()],
        };
        checks.push(SchemaCheck {
            file_name,
            errors,
        });
    }
    Ok(checks)
}
