// crates/decaton-jsonschema/src/draft.rs
// ============================================================================
// Module: Schema Drafts
// Description: Target JSON Schema drafts and additional-properties policies.
// Purpose: Name every (draft, policy) combination and its output file.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Output files are named
//! `decaton-processor-properties-schema-<draft token>[-allow-additional-properties].json`.

// ============================================================================
// SECTION: Drafts
// ============================================================================

/// Prefix shared by every generated schema file name.
pub const SCHEMA_FILE_PREFIX: &str = "decaton-processor-properties-schema-";

/// File extension of generated schemas.
pub const SCHEMA_FILE_EXTENSION: &str = ".json";

/// Supported JSON Schema drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaDraft {
    /// Draft 6.
    Draft6,
    /// Draft 7.
    Draft7,
    /// Draft 2019-09.
    Draft201909,
    /// Draft 2020-12.
    Draft202012,
}

impl SchemaDraft {
    /// Every supported draft, in output order.
    pub const ALL: [Self; 4] = [Self::Draft6, Self::Draft7, Self::Draft201909, Self::Draft202012];

    /// Returns the canonical meta-schema identifier.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Draft6 => "http://json-schema.org/draft-06/schema#",
            Self::Draft7 => "http://json-schema.org/draft-07/schema#",
            Self::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
            Self::Draft202012 => "https://json-schema.org/draft/2020-12/schema",
        }
    }

    /// Returns the lower-case token used in file names.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Draft6 => "draft_6",
            Self::Draft7 => "draft_7",
            Self::Draft201909 => "draft_2019_09",
            Self::Draft202012 => "draft_2020_12",
        }
    }
}

// ============================================================================
// SECTION: Policies
// ============================================================================

/// Whether instances may carry keys not listed in `properties`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdditionalProperties {
    /// Unknown keys are rejected.
    Disallowed,
    /// Unknown keys are accepted.
    Allowed,
}

impl AdditionalProperties {
    /// Every policy, in output order.
    pub const ALL: [Self; 2] = [Self::Disallowed, Self::Allowed];

    /// Returns the `additionalProperties` flag value.
    #[must_use]
    pub const fn allows(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the file name suffix for this policy.
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Disallowed => "",
            Self::Allowed => "-allow-additional-properties",
        }
    }
}

/// Returns the output file name for a combination.
#[must_use]
pub fn schema_file_name(draft: SchemaDraft, policy: AdditionalProperties) -> String {
    format!("{SCHEMA_FILE_PREFIX}{}{}{SCHEMA_FILE_EXTENSION}", draft.token(), policy.file_suffix())
}

/// Returns true when a file name belongs to the generated schema set.
#[must_use]
pub fn is_schema_file_name(name: &str) -> bool {
    name.starts_with(SCHEMA_FILE_PREFIX) && name.ends_with(SCHEMA_FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::AdditionalProperties;
    use super::SchemaDraft;
    use super::is_schema_file_name;
    use super::schema_file_name;

    #[test]
    fn file_names_follow_draft_tokens() {
        assert_eq!(
            schema_file_name(SchemaDraft::Draft202012, AdditionalProperties::Disallowed),
            "decaton-processor-properties-schema-draft_2020_12.json"
        );
        assert_eq!(
            schema_file_name(SchemaDraft::Draft6, AdditionalProperties::Allowed),
            "decaton-processor-properties-schema-draft_6-allow-additional-properties.json"
        );
    }

    #[test]
    fn schema_file_names_are_recognized() {
        assert!(is_schema_file_name("decaton-processor-properties-schema-draft_4.json"));
        assert!(!is_schema_file_name("decaton-processor-properties-example.json"));
    }
}
