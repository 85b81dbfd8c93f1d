// crates/decaton-jsonschema/src/resolver.rs
// ============================================================================
// Module: Property-Type Resolver
// Description: Recovers the value type of every registry entry.
// Purpose: Produce a complete name-to-type map before any schema is assembled.
// Dependencies: decaton-processor-properties
// ============================================================================

//! ## Overview
//! A single-argument declared type (`PropertyDefinition<T>`) resolves to `T`.
//! A declared type without arguments resolves to the entry's runtime type.
//! Anything else fails the whole run: a schema that silently drops a property
//! under-validates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use decaton_processor_properties::PropertyEntry;
use decaton_processor_properties::PropertyRegistry;
use decaton_processor_properties::ValueType;

use crate::SchemaError;

// ============================================================================
// SECTION: Resolved Types
// ============================================================================

/// Mapping from property name to resolved value type.
///
/// # Invariants
/// - When produced by [`resolve_types`], holds exactly one entry per registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTypeMap {
    /// Resolved types keyed by property name.
    types: BTreeMap<String, ValueType>,
}

impl ResolvedTypeMap {
    /// Returns the resolved type of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ValueType> {
        self.types.get(name)
    }

    /// Returns the number of resolved properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true when no property was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the value type of every entry in the registry.
///
/// # Errors
///
/// Returns [`SchemaError`] when any entry cannot be resolved or a name repeats.
pub fn resolve_types(registry: &PropertyRegistry) -> Result<ResolvedTypeMap, SchemaError> {
    let mut types = BTreeMap::new();
    for entry in registry.entries() {
        let value_type = resolve_entry(entry)?;
        if types.insert(entry.name().to_string(), value_type).is_some() {
            return Err(SchemaError::Configuration(format!(
                "duplicate property name: {}",
                entry.name()
            )));
        }
    }
    Ok(ResolvedTypeMap {
        types,
    })
}

/// Resolves the value type of a single entry.
///
/// # Errors
///
/// Returns [`SchemaError::UnsupportedType`] for multi-argument declared types
/// and [`SchemaError::UnresolvedType`] when the runtime type is erased.
pub fn resolve_entry(entry: &PropertyEntry) -> Result<ValueType, SchemaError> {
    match entry.declared().arguments() {
        [value_type] => Ok(value_type.clone()),
        [] => entry
            .runtime_type()
            .cloned()
            .ok_or_else(|| SchemaError::UnresolvedType(entry.name().to_string())),
        _ => Err(SchemaError::UnsupportedType {
            property: entry.name().to_string(),
            declared: entry.declared().to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
