// crates/decaton-jsonschema/src/fragment.rs
// ============================================================================
// Module: Fragment Generation
// Description: Type-to-schema generation seam and its schemars implementation.
// Purpose: Turn a resolved value type into a draft-specific schema fragment.
// Dependencies: decaton-processor-properties, schemars, serde_json
// ============================================================================

//! ## Overview
//! [`FragmentGenerator`] is the boundary between schema assembly and the
//! library that knows how to describe a type. [`SchemarsFragments`] drives
//! `schemars` with the settings of the target draft and returns plain JSON
//! fragments: subschemas are inlined, and neither the version indicator nor
//! the generated title is kept.

// ============================================================================
// SECTION: Imports
// ============================================================================

use decaton_processor_properties::EnumType;
use decaton_processor_properties::ValueType;
use schemars::JsonSchema;
use schemars::Schema;
use schemars::generate::SchemaSettings;
use schemars::json_schema;
use serde_json::Value;

use crate::SchemaError;
use crate::draft::SchemaDraft;

// ============================================================================
// SECTION: Generator Seam
// ============================================================================

/// Produces the schema fragment describing one value type.
pub trait FragmentGenerator {
    /// Returns the fragment for `value_type` under `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the type cannot be described.
    fn fragment(&self, value_type: &ValueType, draft: SchemaDraft) -> Result<Value, SchemaError>;
}

impl<G: FragmentGenerator + ?Sized> FragmentGenerator for &G {
    fn fragment(&self, value_type: &ValueType, draft: SchemaDraft) -> Result<Value, SchemaError> {
        (**self).fragment(value_type, draft)
    }
}

// ============================================================================
// SECTION: Schemars Generator
// ============================================================================

/// Keys stripped from generated root schemas.
const STRIPPED_KEYS: [&str; 2] = ["$schema", "title"];

/// [`FragmentGenerator`] backed by `schemars`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemarsFragments;

impl SchemarsFragments {
    /// Returns the generator settings for a draft.
    ///
    /// Draft 6 shares the draft 7 settings; the value keywords emitted for
    /// property types are common to both.
    fn settings(draft: SchemaDraft) -> SchemaSettings {
        let settings = match draft {
            SchemaDraft::Draft6 | SchemaDraft::Draft7 => SchemaSettings::draft07(),
            SchemaDraft::Draft201909 => SchemaSettings::draft2019_09(),
            SchemaDraft::Draft202012 => SchemaSettings::draft2020_12(),
        };
        settings.with(|settings| {
            settings.meta_schema = None;
            settings.inline_subschemas = true;
        })
    }

    /// Generates the root schema of `T` under `draft`.
    fn root_for<T: JsonSchema>(draft: SchemaDraft) -> Schema {
        Self::settings(draft).into_generator().into_root_schema_for::<T>()
    }

    /// Generates the schema for a list type.
    fn list_schema(&self, element: &ValueType, draft: SchemaDraft) -> Result<Schema, SchemaError> {
        match element {
            ValueType::Boolean => Ok(Self::root_for::<Vec<bool>>(draft)),
            ValueType::Integer => Ok(Self::root_for::<Vec<i32>>(draft)),
            ValueType::Long => Ok(Self::root_for::<Vec<i64>>(draft)),
            ValueType::String => Ok(Self::root_for::<Vec<String>>(draft)),
            ValueType::List(_) | ValueType::Enum(_) => {
                let items = self.fragment(element, draft)?;
                Ok(json_schema!({
                    "type": "array",
                    "items": items,
                }))
            }
        }
    }

    /// Builds the schema for a string enumeration.
    fn enum_schema(enum_type: &EnumType) -> Result<Schema, SchemaError> {
        if enum_type.variants.is_empty() {
            return Err(SchemaError::Generation(format!(
                "enum {} declares no variants",
                enum_type.name
            )));
        }
        Ok(json_schema!({
            "type": "string",
            "enum": enum_type.variants,
        }))
    }
}

impl FragmentGenerator for SchemarsFragments {
    fn fragment(&self, value_type: &ValueType, draft: SchemaDraft) -> Result<Value, SchemaError> {
        let schema = match value_type {
            ValueType::Boolean => Self::root_for::<bool>(draft),
            ValueType::Integer => Self::root_for::<i32>(draft),
            ValueType::Long => Self::root_for::<i64>(draft),
            ValueType::String => Self::root_for::<String>(draft),
            ValueType::List(element) => self.list_schema(element, draft)?,
            ValueType::Enum(enum_type) => Self::enum_schema(enum_type)?,
        };
        let mut fragment = Value::from(schema);
        let Some(object) = fragment.as_object_mut() else {
            return Err(SchemaError::Generation(format!(
                "fragment for {value_type} is not an object"
            )));
        };
        for key in STRIPPED_KEYS {
            object.remove(key);
        }
        Ok(fragment)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
