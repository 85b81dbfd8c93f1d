// crates/decaton-processor-properties/src/value_type.rs
// ============================================================================
// Module: Value Types
// Description: Descriptors for property value types and declared types.
// Purpose: Carry the type information schema generation needs without reflection.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`ValueType`] describes the concrete shape of a property value. Rust types
//! that can back a property implement [`PropertyType`] to report their
//! descriptor. [`DeclaredType`] records the static type a property is declared
//! with, which is a container (`PropertyDefinition<T>`) for every typed
//! definition.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

// ============================================================================
// SECTION: Value Types
// ============================================================================

/// Concrete value type of a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// JSON boolean.
    Boolean,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// UTF-8 string.
    String,
    /// Homogeneous list of the element type.
    List(Box<ValueType>),
    /// String enumeration with a fixed set of variants.
    Enum(EnumType),
}

impl ValueType {
    /// Builds a list descriptor for the element type.
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("Boolean"),
            Self::Integer => f.write_str("Integer"),
            Self::Long => f.write_str("Long"),
            Self::String => f.write_str("String"),
            Self::List(element) => write!(f, "List<{element}>"),
            Self::Enum(enum_type) => f.write_str(enum_type.name),
        }
    }
}

/// Enumeration descriptor.
///
/// # Invariants
/// - `variants` are the serialized variant names, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumType {
    /// Type name used for diagnostics.
    pub name: &'static str,
    /// Serialized variant names.
    pub variants: &'static [&'static str],
}

// ============================================================================
// SECTION: Declared Types
// ============================================================================

/// Raw type name typed definitions are declared with.
pub const DEFINITION_TYPE_NAME: &str = "PropertyDefinition";

/// Static type a property is declared with: a raw type plus type arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    /// Raw type name.
    raw: String,
    /// Type arguments in declaration order.
    arguments: Vec<ValueType>,
}

impl DeclaredType {
    /// Declares a non-parametrized type.
    #[must_use]
    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            arguments: Vec::new(),
        }
    }

    /// Declares a parametrized type.
    #[must_use]
    pub fn parametrized(raw: impl Into<String>, arguments: Vec<ValueType>) -> Self {
        Self {
            raw: raw.into(),
            arguments,
        }
    }

    /// Declares `PropertyDefinition<value>`.
    #[must_use]
    pub fn definition_of(value: ValueType) -> Self {
        Self::parametrized(DEFINITION_TYPE_NAME, vec![value])
    }

    /// Returns the type arguments.
    #[must_use]
    pub fn arguments(&self) -> &[ValueType] {
        &self.arguments
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)?;
        if self.arguments.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(">")
    }
}

// ============================================================================
// SECTION: Property Types
// ============================================================================

/// Rust types usable as property values.
pub trait PropertyType: Serialize {
    /// Returns the descriptor for this type.
    fn value_type() -> ValueType;
}

impl PropertyType for bool {
    fn value_type() -> ValueType {
        ValueType::Boolean
    }
}

impl PropertyType for i32 {
    fn value_type() -> ValueType {
        ValueType::Integer
    }
}

impl PropertyType for i64 {
    fn value_type() -> ValueType {
        ValueType::Long
    }
}

impl PropertyType for String {
    fn value_type() -> ValueType {
        ValueType::String
    }
}

impl<T: PropertyType> PropertyType for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::list(T::value_type())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
