// crates/decaton-jsonschema/src/assembler.rs
// ============================================================================
// Module: Schema Assembler
// Description: Builds the root schema document for one draft and policy.
// Purpose: Combine per-property fragments with required/default bookkeeping.
// Dependencies: decaton-processor-properties, serde_json
// ============================================================================

//! ## Overview
//! The root document is an object schema whose `properties` hold one fragment
//! per registry entry. A property with a default gets the default attached to
//! its fragment; a property without one is listed in `required` instead, so
//! every property lands in exactly one of the two. A string-typed `$schema`
//! property is always present so instances can name their schema even when
//! additional properties are disallowed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use decaton_processor_properties::PropertyRegistry;
pub use decaton_processor_properties::SCHEMA_PROPERTY;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::SchemaError;
use crate::draft::AdditionalProperties;
use crate::draft::SchemaDraft;
use crate::fragment::FragmentGenerator;
use crate::resolver::ResolvedTypeMap;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Title of every generated document.
pub const SCHEMA_TITLE: &str = "Decaton ProcessorProperties";

/// Fragment key holding a property default.
const DEFAULT_KEY: &str = "default";

// ============================================================================
// SECTION: Assembler
// ============================================================================

/// Assembles schema documents from resolved property types.
///
/// # Invariants
/// - Property order in `required` follows registry order.
#[derive(Debug, Clone, Default)]
pub struct SchemaAssembler<G> {
    /// Type-to-fragment generator.
    generator: G,
}

impl<G: FragmentGenerator> SchemaAssembler<G> {
    /// Creates an assembler around a fragment generator.
    #[must_use]
    pub const fn new(generator: G) -> Self {
        Self {
            generator,
        }
    }

    /// Assembles the document for one draft and policy.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when a property has no resolved type or its
    /// fragment cannot be generated.
    pub fn assemble(
        &self,
        registry: &PropertyRegistry,
        resolved: &ResolvedTypeMap,
        draft: SchemaDraft,
        policy: AdditionalProperties,
    ) -> Result<Value, SchemaError> {
        let mut required = Vec::new();
        let mut properties = Map::new();
        properties.insert(SCHEMA_PROPERTY.to_string(), json!({ "type": "string" }));

        for entry in registry.entries() {
            let value_type = resolved
                .get(entry.name())
                .ok_or_else(|| SchemaError::UnresolvedType(entry.name().to_string()))?;
            let mut fragment = self.generator.fragment(value_type, draft)?;
            let Some(object) = fragment.as_object_mut() else {
                return Err(SchemaError::Generation(format!(
                    "fragment for {} is not an object",
                    entry.name()
                )));
            };
            if let Some(default) = entry.default_value() {
                object.insert(DEFAULT_KEY.to_string(), default.clone());
            } else {
                object.remove(DEFAULT_KEY);
                required.push(Value::String(entry.name().to_string()));
            }
            properties.insert(entry.name().to_string(), fragment);
        }

        let mut root = Map::new();
        root.insert(String::from("$schema"), Value::String(draft.identifier().to_string()));
        root.insert(String::from("title"), Value::String(SCHEMA_TITLE.to_string()));
        root.insert(String::from("type"), Value::String(String::from("object")));
        root.insert(String::from("additionalProperties"), Value::Bool(policy.allows()));
        root.insert(String::from("required"), Value::Array(required));
        root.insert(String::from("properties"), Value::Object(properties));
        Ok(Value::Object(root))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
