// crates/decaton-processor-properties/src/definition.rs
// ============================================================================
// Module: Property Definitions
// Description: Typed property definitions and their erased entries.
// Purpose: Declare properties as constants and erase them for generation.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A [`PropertyDefinition<T>`] is a `const`-constructible record holding the
//! property name, its optional default and a value validator.
//! [`PropertyDefinition::entry`] erases it into a [`PropertyEntry`], encoding
//! the default with `serde_json` so it matches the encoding of instance
//! documents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::PropertyError;
use crate::value_type::DeclaredType;
use crate::value_type::PropertyType;
use crate::value_type::ValueType;

// ============================================================================
// SECTION: Typed Definitions
// ============================================================================

/// Predicate deciding whether a value is acceptable for a property.
pub type ValueValidator<T> = fn(&T) -> bool;

/// Typed processor-property definition.
///
/// # Invariants
/// - `name` is a stable identifier, unique within a registry.
/// - When present, `default_value` satisfies `validator` (checked by [`Self::entry`]).
#[derive(Debug, Clone)]
pub struct PropertyDefinition<T: 'static> {
    /// Property name.
    name: &'static str,
    /// Default value; `None` marks the property as required.
    default_value: Option<T>,
    /// Value validator.
    validator: ValueValidator<T>,
}

impl<T> PropertyDefinition<T> {
    /// Defines a property with a default value.
    #[must_use]
    pub const fn define(name: &'static str, default_value: T, validator: ValueValidator<T>) -> Self {
        Self {
            name,
            default_value: Some(default_value),
            validator,
        }
    }

    /// Defines a property without a default value.
    #[must_use]
    pub const fn define_required(name: &'static str, validator: ValueValidator<T>) -> Self {
        Self {
            name,
            default_value: None,
            validator,
        }
    }

    /// Returns the property name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the default value, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&T> {
        self.default_value.as_ref()
    }

    /// Returns true when the validator accepts the value.
    #[must_use]
    pub fn is_valid_value(&self, value: &T) -> bool {
        (self.validator)(value)
    }
}

impl<T: PropertyType> PropertyDefinition<T> {
    /// Erases the definition into a registry entry.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when the name is empty, the default fails the
    /// validator, or the default cannot be encoded.
    pub fn entry(&self) -> Result<PropertyEntry, PropertyError> {
        if self.name.is_empty() {
            return Err(PropertyError::EmptyName);
        }
        let default_value = match &self.default_value {
            Some(value) => {
                if !self.is_valid_value(value) {
                    return Err(PropertyError::InvalidDefault(self.name.to_string()));
                }
                let encoded =
                    serde_json::to_value(value).map_err(|err| PropertyError::Serialization {
                        name: self.name.to_string(),
                        message: err.to_string(),
                    })?;
                Some(encoded)
            }
            None => None,
        };
        let value_type = T::value_type();
        Ok(PropertyEntry {
            name: self.name.to_string(),
            declared: DeclaredType::definition_of(value_type.clone()),
            runtime_type: Some(value_type),
            default_value,
        })
    }
}

// ============================================================================
// SECTION: Erased Entries
// ============================================================================

/// Type-erased property record consumed by schema generation.
///
/// # Invariants
/// - `default_value`, when present, is the JSON encoding of the typed default.
/// - `runtime_type` is `None` only when the value type has been erased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Property name.
    name: String,
    /// Static declared type.
    declared: DeclaredType,
    /// Runtime value type, when known.
    runtime_type: Option<ValueType>,
    /// JSON-encoded default value.
    default_value: Option<Value>,
}

impl PropertyEntry {
    /// Builds an entry directly from its parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        declared: DeclaredType,
        runtime_type: Option<ValueType>,
        default_value: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            declared,
            runtime_type,
            default_value,
        }
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn declared(&self) -> &DeclaredType {
        &self.declared
    }

    /// Returns the runtime value type, if known.
    #[must_use]
    pub const fn runtime_type(&self) -> Option<&ValueType> {
        self.runtime_type.as_ref()
    }

    /// Returns the encoded default value, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Returns true when the property has no default.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.default_value.is_none()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
