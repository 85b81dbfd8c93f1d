// crates/decaton-jsonschema/src/assembler/tests.rs
// ============================================================================
// Module: Schema Assembler Unit Tests
// Description: Assembler coverage using a stub fragment generator.
// Purpose: Pin the required/default bookkeeping independent of schemars.
// Dependencies: decaton-jsonschema, decaton-processor-properties, serde_json
// ============================================================================

//! ## Overview
//! The stub generator returns a fixed fragment per value type, so these tests
//! only observe the assembler's own document layout.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only helpers use panic-based assertions for clarity."
)]

use decaton_processor_properties::DeclaredType;
use decaton_processor_properties::PropertyDefinition;
use decaton_processor_properties::PropertyEntry;
use decaton_processor_properties::PropertyRegistry;
use decaton_processor_properties::ValueType;
use serde_json::Value;
use serde_json::json;

use super::SchemaAssembler;
use crate::SchemaError;
use crate::draft::AdditionalProperties;
use crate::draft::SchemaDraft;
use crate::fragment::FragmentGenerator;
use crate::resolver::ResolvedTypeMap;
use crate::resolver::resolve_types;

// ============================================================================
// SECTION: Stubs
// ============================================================================

/// Emits `{"type": <json type>}` and, for strings, a generator-side default.
struct StubFragments;

impl FragmentGenerator for StubFragments {
    fn fragment(&self, value_type: &ValueType, _draft: SchemaDraft) -> Result<Value, SchemaError> {
        Ok(match value_type {
            ValueType::Boolean => json!({ "type": "boolean" }),
            ValueType::Integer | ValueType::Long => json!({ "type": "integer" }),
            ValueType::String => json!({ "type": "string", "default": "from-generator" }),
            ValueType::List(_) => json!({ "type": "array" }),
            ValueType::Enum(_) => json!(true),
        })
    }
}

fn any_int(_: &i32) -> bool {
    true
}

fn registry_of(entries: Vec<PropertyEntry>) -> Result<PropertyRegistry, SchemaError> {
    Ok(PropertyRegistry::new(entries)?)
}

fn assemble(
    registry: &PropertyRegistry,
    draft: SchemaDraft,
    policy: AdditionalProperties,
) -> Result<Value, SchemaError> {
    let resolved = resolve_types(registry)?;
    SchemaAssembler::new(StubFragments).assemble(registry, &resolved, draft, policy)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn required_property_without_default() -> Result<(), SchemaError> {
    let definition: PropertyDefinition<i32> = PropertyDefinition::define_required("x", any_int);
    let registry = registry_of(vec![definition.entry()?])?;
    let document = assemble(&registry, SchemaDraft::Draft7, AdditionalProperties::Disallowed)?;
    assert_eq!(document.get("required"), Some(&json!(["x"])));
    assert_eq!(document.pointer("/properties/x/type"), Some(&json!("integer")));
    assert_eq!(document.get("additionalProperties"), Some(&json!(false)));
    assert_eq!(document.get("$schema"), Some(&json!("http://json-schema.org/draft-07/schema#")));
    Ok(())
}

#[test]
fn default_replaces_required_entry() -> Result<(), SchemaError> {
    let definition = PropertyDefinition::define("y", String::from("hello"), |_| true);
    let registry = registry_of(vec![definition.entry()?])?;
    let document = assemble(&registry, SchemaDraft::Draft202012, AdditionalProperties::Allowed)?;
    assert_eq!(document.get("required"), Some(&json!([])));
    assert_eq!(document.pointer("/properties/y/default"), Some(&json!("hello")));
    assert_eq!(document.get("additionalProperties"), Some(&json!(true)));
    Ok(())
}

#[test]
fn required_property_drops_generator_default() -> Result<(), SchemaError> {
    let definition: PropertyDefinition<String> =
        PropertyDefinition::define_required("name", |_| true);
    let registry = registry_of(vec![definition.entry()?])?;
    let document = assemble(&registry, SchemaDraft::Draft6, AdditionalProperties::Disallowed)?;
    assert_eq!(document.get("required"), Some(&json!(["name"])));
    assert!(document.pointer("/properties/name/default").is_none());
    Ok(())
}

#[test]
fn required_follows_registry_order() -> Result<(), SchemaError> {
    let registry = registry_of(vec![
        PropertyEntry::new("b", DeclaredType::definition_of(ValueType::Long), None, None),
        PropertyEntry::new(
            "a",
            DeclaredType::definition_of(ValueType::Boolean),
            None,
            Some(json!(true)),
        ),
        PropertyEntry::new("c", DeclaredType::definition_of(ValueType::Integer), None, None),
    ])?;
    let document = assemble(&registry, SchemaDraft::Draft201909, AdditionalProperties::Allowed)?;
    assert_eq!(document.get("required"), Some(&json!(["b", "c"])));
    assert_eq!(document.pointer("/properties/a/default"), Some(&json!(true)));
    Ok(())
}

#[test]
fn empty_registry_yields_only_schema_property() -> Result<(), SchemaError> {
    let registry = PropertyRegistry::default();
    for draft in SchemaDraft::ALL {
        for policy in AdditionalProperties::ALL {
            let document = assemble(&registry, draft, policy)?;
            assert_eq!(document.get("required"), Some(&json!([])));
            assert_eq!(document.get("properties"), Some(&json!({ "$schema": { "type": "string" } })));
            assert_eq!(document.get("title"), Some(&json!("Decaton ProcessorProperties")));
            assert_eq!(document.get("type"), Some(&json!("object")));
            assert_eq!(document.get("$schema"), Some(&json!(draft.identifier())));
        }
    }
    Ok(())
}

#[test]
fn non_object_fragment_is_rejected() -> Result<(), SchemaError> {
    let enum_type = decaton_processor_properties::EnumType {
        name: "Mode",
        variants: &["A"],
    };
    let registry = registry_of(vec![PropertyEntry::new(
        "mode",
        DeclaredType::definition_of(ValueType::Enum(enum_type)),
        None,
        None,
    )])?;
    let result = assemble(&registry, SchemaDraft::Draft7, AdditionalProperties::Disallowed);
    assert!(matches!(result, Err(SchemaError::Generation(_))));
    Ok(())
}

#[test]
fn missing_resolved_type_is_rejected() -> Result<(), SchemaError> {
    let registry = registry_of(vec![PropertyEntry::new(
        "orphan",
        DeclaredType::definition_of(ValueType::Long),
        None,
        None,
    )])?;
    let result = SchemaAssembler::new(StubFragments).assemble(
        &registry,
        &ResolvedTypeMap::default(),
        SchemaDraft::Draft7,
        AdditionalProperties::Disallowed,
    );
    assert!(matches!(result, Err(SchemaError::UnresolvedType(name)) if name == "orphan"));
    Ok(())
}
