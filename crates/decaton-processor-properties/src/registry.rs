// crates/decaton-processor-properties/src/registry.rs
// ============================================================================
// Module: Property Registry
// Description: Ordered, validated collection of property entries.
// Purpose: Give schema generation a deterministic, duplicate-free input.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`PropertyRegistry`] owns the erased entries in declaration order. The
//! order is preserved into generated documents so output diffs stay stable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde_json::Map;
use serde_json::Value;

use crate::PropertyError;
use crate::definition::PropertyEntry;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Property name instances use to declare their schema; never a registry entry.
pub const SCHEMA_PROPERTY: &str = "$schema";

/// Ordered collection of property entries.
///
/// # Invariants
/// - Entry names are non-empty, unique and never [`SCHEMA_PROPERTY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRegistry {
    /// Entries in declaration order.
    entries: Vec<PropertyEntry>,
}

impl PropertyRegistry {
    /// Builds a registry, rejecting empty, reserved and duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when a name is empty, reserved or repeated.
    pub fn new(entries: Vec<PropertyEntry>) -> Result<Self, PropertyError> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if entry.name().is_empty() {
                return Err(PropertyError::EmptyName);
            }
            if entry.name() == SCHEMA_PROPERTY {
                return Err(PropertyError::ReservedName(entry.name().to_string()));
            }
            if !seen.insert(entry.name()) {
                return Err(PropertyError::DuplicateName(entry.name().to_string()));
            }
        }
        Ok(Self {
            entries,
        })
    }

    /// Returns the entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[PropertyEntry] {
        &self.entries
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a configuration document holding every default value.
    ///
    /// Required properties have no default and are left out.
    #[must_use]
    pub fn defaults_document(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .filter_map(|entry| {
                entry.default_value().map(|value| (entry.name().to_string(), value.clone()))
            })
            .collect()
    }
}
