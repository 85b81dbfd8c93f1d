// crates/decaton-jsonschema/src/types.rs
// ============================================================================
// Module: Schema Artifact Types
// Description: Shared data models for generated schema artifacts.
// Purpose: Carry rendered documents between building and writing.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A [`SchemaBundle`] holds one [`SchemaArtifact`] per (draft, policy)
//! combination, in output order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::draft::AdditionalProperties;
use crate::draft::SchemaDraft;

// ============================================================================
// SECTION: Artifacts
// ============================================================================

/// One generated schema document with its serialized bytes.
///
/// # Invariants
/// - When produced by [`crate::SchemaBuilder`], `bytes` is the canonical
///   pretty serialization of `document`, and `file_name` is derived from
///   `draft` and `policy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaArtifact {
    /// Output file name, relative to the output directory.
    pub file_name: String,
    /// Target draft.
    pub draft: SchemaDraft,
    /// Additional-properties policy.
    pub policy: AdditionalProperties,
    /// Assembled schema document.
    pub document: Value,
    /// Serialized file content.
    pub bytes: Vec<u8>,
}

/// Every generated schema for one registry.
///
/// # Invariants
/// - When produced by [`crate::SchemaBuilder`], artifacts are ordered by draft
///   and then by policy, and file names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaBundle {
    /// Generated artifacts.
    pub artifacts: Vec<SchemaArtifact>,
}

impl SchemaBundle {
    /// Returns the artifact for a combination.
    #[must_use]
    pub fn get(&self, draft: SchemaDraft, policy: AdditionalProperties) -> Option<&SchemaArtifact> {
        self.artifacts.iter().find(|artifact| artifact.draft == draft && artifact.policy == policy)
    }

    /// Returns the artifact file names in output order.
    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|artifact| artifact.file_name.as_str()).collect()
    }
}
