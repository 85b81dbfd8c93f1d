// crates/decaton-jsonschema/src/lib.rs
// ============================================================================
// Module: Decaton JSON Schema Library
// Description: JSON Schema generation for Decaton processor properties.
// Purpose: Turn the property registry into one schema per draft and policy.
// Dependencies: decaton-processor-properties, jsonschema, schemars, thiserror
// ============================================================================

//! ## Overview
//! Generation is a fixed pipeline: [`resolver`] maps every registry entry to
//! its value type, [`assembler`] turns the resolved types into a root schema
//! for one draft and additional-properties policy using a
//! [`fragment::FragmentGenerator`], and [`builder`] serializes all eight
//! combinations and writes them to disk. [`validate`] checks documents
//! against a directory of generated schemas.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assembler;
pub mod builder;
pub mod draft;
pub mod fragment;
pub mod resolver;
pub mod types;
pub mod validate;

// ============================================================================
// SECTION: Errors
// ============================================================================

use std::path::PathBuf;

use decaton_processor_properties::PropertyError;
use thiserror::Error;

/// Errors raised when generating, writing or validating schemas.
///
/// # Invariants
/// - Variants carry human-readable context for diagnostics.
/// - [`SchemaError::OutputPath`] always includes the offending path.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The property registry is malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A property's value type could not be recovered.
    #[error("unresolved value type for property {0}")]
    UnresolvedType(String),
    /// A property is declared with a type shape schema generation does not support.
    #[error("unsupported declared type {declared} for property {property}")]
    UnsupportedType {
        /// Property name.
        property: String,
        /// Declared type rendering.
        declared: String,
    },
    /// Schema generation failed.
    #[error("schema generation error: {0}")]
    Generation(String),
    /// Serialization failure while rendering schemas.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// IO failure while reading or writing schemas.
    #[error("io error: {0}")]
    Io(String),
    /// Output path invalid or inaccessible.
    #[error("invalid output path: {0}")]
    OutputPath(PathBuf),
    /// On-disk schemas do not match the generated bundle.
    #[error("schema verification failed: {0}")]
    Verification(String),
    /// Validation could not be carried out.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<PropertyError> for SchemaError {
    fn from(err: PropertyError) -> Self {
        Self::Configuration(err.to_string())
    }
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assembler::SchemaAssembler;
pub use builder::SchemaBuilder;
pub use draft::AdditionalProperties;
pub use draft::SchemaDraft;
pub use fragment::FragmentGenerator;
pub use fragment::SchemarsFragments;
pub use resolver::ResolvedTypeMap;
pub use resolver::resolve_types;
pub use types::SchemaArtifact;
pub use types::SchemaBundle;
pub use validate::SchemaCheck;
pub use validate::validate_against_all;
