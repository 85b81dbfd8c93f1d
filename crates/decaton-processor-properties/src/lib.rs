// crates/decaton-processor-properties/src/lib.rs
// ============================================================================
// Module: Decaton Processor Properties Library
// Description: Typed processor-property definitions and the static catalog.
// Purpose: Provide the single source of truth consumed by schema generation.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Processor properties are named, typed configuration entries with an
//! optional default value. Each one is declared as a
//! [`PropertyDefinition<T>`] constant; the catalog in [`properties`] erases
//! them into [`PropertyEntry`] records collected by a [`PropertyRegistry`],
//! which is what the schema generator walks.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod definition;
pub mod properties;
pub mod registry;
pub mod value_type;

// ============================================================================
// SECTION: Errors
// ============================================================================

use thiserror::Error;

/// Errors raised while building property entries or registries.
///
/// # Invariants
/// - Every variant names the offending property.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// A property was defined with an empty name.
    #[error("property name must not be empty")]
    EmptyName,
    /// A property uses a name reserved by generated documents.
    #[error("property name is reserved: {0}")]
    ReservedName(String),
    /// Two properties share the same name.
    #[error("duplicate property name: {0}")]
    DuplicateName(String),
    /// A default value failed the property's own validator.
    #[error("default value of {0} is rejected by its validator")]
    InvalidDefault(String),
    /// A default value could not be encoded as JSON.
    #[error("failed to serialize default value of {name}: {message}")]
    Serialization {
        /// Property name.
        name: String,
        /// Encoder message.
        message: String,
    },
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use definition::PropertyDefinition;
pub use definition::PropertyEntry;
pub use properties::SubPartitionRuntime;
pub use properties::processor_properties;
pub use registry::PropertyRegistry;
pub use registry::SCHEMA_PROPERTY;
pub use value_type::DeclaredType;
pub use value_type::EnumType;
pub use value_type::PropertyType;
pub use value_type::ValueType;
