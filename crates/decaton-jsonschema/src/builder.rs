// crates/decaton-jsonschema/src/builder.rs
// ============================================================================
// Module: Schema Builder
// Description: Generator for the processor-properties schema set.
// Purpose: Assemble deterministic schema outputs and write them to disk.
// Dependencies: cap-std, decaton-processor-properties, serde_jcs, serde_json, tracing
// ============================================================================

//! ## Overview
//! The schema builder resolves the registry once, assembles one document per
//! (draft, policy) combination and serializes each with canonical key ordering
//! so repeated runs are byte-identical. Files are written through a temporary
//! sibling and renamed into place: an interrupted run leaves complete files or
//! none under each expected name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use cap_std::fs::OpenOptions;
use decaton_processor_properties::PropertyRegistry;
use decaton_processor_properties::processor_properties;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::SchemaError;
use crate::assembler::SchemaAssembler;
use crate::draft::AdditionalProperties;
use crate::draft::SchemaDraft;
use crate::draft::is_schema_file_name;
use crate::draft::schema_file_name;
use crate::fragment::FragmentGenerator;
use crate::fragment::SchemarsFragments;
use crate::resolver::resolve_types;
use crate::types::SchemaArtifact;
use crate::types::SchemaBundle;

// ============================================================================
// SECTION: Schema Builder
// ============================================================================

/// Builder for the processor-properties schema set.
///
/// # Invariants
/// - [`SchemaBuilder::build`] emits every (draft, policy) combination exactly once.
#[derive(Debug, Clone)]
pub struct SchemaBuilder<G = SchemarsFragments> {
    /// Registry the schemas describe.
    registry: PropertyRegistry,
    /// Document assembler.
    assembler: SchemaAssembler<G>,
}

impl SchemaBuilder {
    /// Creates a builder for a registry using the `schemars` generator.
    #[must_use]
    pub const fn new(registry: PropertyRegistry) -> Self {
        Self::with_generator(registry, SchemarsFragments)
    }

    /// Creates a builder for the Decaton processor-properties catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Configuration`] when the catalog is malformed.
    pub fn processor_properties() -> Result<Self, SchemaError> {
        Ok(Self::new(processor_properties()?))
    }
}

impl<G: FragmentGenerator> SchemaBuilder<G> {
    /// Creates a builder with a custom fragment generator.
    #[must_use]
    pub const fn with_generator(registry: PropertyRegistry, generator: G) -> Self {
        Self {
            registry,
            assembler: SchemaAssembler::new(generator),
        }
    }

    /// Returns the registry the schemas describe.
    #[must_use]
    pub const fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// Builds the schema bundle without writing to disk.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when type resolution or generation fails.
    pub fn build(&self) -> Result<SchemaBundle, SchemaError> {
        let resolved = resolve_types(&self.registry)?;
        let mut artifacts =
            Vec::with_capacity(SchemaDraft::ALL.len() * AdditionalProperties::ALL.len());
        for draft in SchemaDraft::ALL {
            for policy in AdditionalProperties::ALL {
                let document = self.assembler.assemble(&self.registry, &resolved, draft, policy)?;
                let bytes = serialize_json_pretty(&document)?;
                let file_name = schema_file_name(draft, policy);
                debug!(file = %file_name, bytes = bytes.len(), "assembled schema");
                artifacts.push(SchemaArtifact {
                    file_name,
                    draft,
                    policy,
                    document,
                    bytes,
                });
            }
        }
        ensure_unique_names(&artifacts)?;
        Ok(SchemaBundle {
            artifacts,
        })
    }

    /// Writes the schema bundle to the output directory, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when generation or writing fails.
    pub fn write_to(&self, output_dir: &Path) -> Result<SchemaBundle, SchemaError> {
        let bundle = self.build()?;
        let output = open_output_dir(output_dir, true)?;
        for artifact in &bundle.artifacts {
            write_file_atomic(&output, output_dir, &artifact.file_name, &artifact.bytes)?;
            info!(path = %output_dir.join(&artifact.file_name).display(), "wrote schema");
        }
        Ok(bundle)
    }

    /// Verifies the on-disk schemas match the generated bundle.
    ///
    /// Files outside the schema naming scheme are ignored; a schema-named file
    /// the bundle does not produce is reported as stale.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when verification fails.
    pub fn verify_output(&self, output_dir: &Path) -> Result<(), SchemaError> {
        let bundle = self.build()?;
        let output = open_output_dir(output_dir, false)?;
        for artifact in &bundle.artifacts {
            let actual = match output.read(&artifact.file_name) {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Err(SchemaError::Verification(format!(
                        "missing schema: {}",
                        artifact.file_name
                    )));
                }
                Err(err) => return Err(SchemaError::Io(err.to_string())),
            };
            if actual != artifact.bytes {
                return Err(SchemaError::Verification(format!(
                    "schema mismatch: {}",
                    artifact.file_name
                )));
            }
        }
        let expected: BTreeSet<&str> = bundle.file_names().into_iter().collect();
        for name in collect_schema_files(&output)? {
            if !expected.contains(name.as_str()) {
                return Err(SchemaError::Verification(format!("unexpected schema: {name}")));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Serialization
// ============================================================================

/// Serializes a value into pretty JSON bytes with canonical key ordering.
pub(crate) fn serialize_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, SchemaError> {
    let canonical =
        serde_jcs::to_vec(value).map_err(|err| SchemaError::Serialization(err.to_string()))?;
    let canonical_value: serde_json::Value = serde_json::from_slice(&canonical)
        .map_err(|err| SchemaError::Serialization(err.to_string()))?;
    let mut bytes = serde_json::to_vec_pretty(&canonical_value)
        .map_err(|err| SchemaError::Serialization(err.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Ensures artifact file names are unique.
fn ensure_unique_names(artifacts: &[SchemaArtifact]) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for artifact in artifacts {
        if !seen.insert(&artifact.file_name) {
            return Err(SchemaError::Generation(format!(
                "duplicate schema file name: {}",
                artifact.file_name
            )));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Filesystem Helpers
// ============================================================================

/// Opens the output directory as a capability handle.
///
/// # Errors
///
/// Returns [`SchemaError`] when the path is empty, not a directory, or inaccessible.
pub(crate) fn open_output_dir(output_dir: &Path, create_missing: bool) -> Result<Dir, SchemaError> {
    if output_dir.as_os_str().is_empty() {
        return Err(SchemaError::OutputPath(output_dir.to_path_buf()));
    }
    if create_missing {
        Dir::create_ambient_dir_all(output_dir, ambient_authority())
            .map_err(|err| map_open_error(&err, output_dir))?;
    }
    Dir::open_ambient_dir(output_dir, ambient_authority())
        .map_err(|err| map_open_error(&err, output_dir))
}

/// Maps low-level open errors into path errors.
fn map_open_error(err: &std::io::Error, path: &Path) -> SchemaError {
    if matches!(
        err.kind(),
        ErrorKind::NotFound
            | ErrorKind::InvalidInput
            | ErrorKind::PermissionDenied
            | ErrorKind::NotADirectory
            | ErrorKind::AlreadyExists
    ) {
        return SchemaError::OutputPath(path.to_path_buf());
    }
    SchemaError::Io(err.to_string())
}

/// Writes file bytes using a temporary sibling and atomic rename.
///
/// `output_dir` is the ambient path `dir` was opened from, used in errors.
fn write_file_atomic(
    dir: &Dir,
    output_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<(), SchemaError> {
    for attempt in 0 .. 64_u32 {
        let temp_name = temp_file_name(file_name, attempt);
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        match dir.open_with(&temp_name, &options) {
            Ok(mut temp_file) => {
                let written = temp_file
                    .write_all(bytes)
                    .and_then(|()| temp_file.sync_all())
                    .and_then(|()| dir.rename(&temp_name, dir, file_name));
                if let Err(err) = written {
                    let _ = dir.remove_file(&temp_name);
                    return Err(SchemaError::Io(err.to_string()));
                }
                return Ok(());
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
            Err(err) => return Err(map_open_error(&err, &output_dir.join(file_name))),
        }
    }
    Err(SchemaError::Generation(format!("unable to allocate temporary file for {file_name}")))
}

/// Builds a deterministic temporary file name for atomic writes.
fn temp_file_name(file_name: &str, attempt: u32) -> PathBuf {
    let mut temp = OsString::from(".tmp-");
    temp.push(file_name);
    temp.push(format!(".{}.{}", std::process::id(), attempt));
    PathBuf::from(temp)
}

/// Collects the schema-named regular files in the output directory.
pub(crate) fn collect_schema_files(dir: &Dir) -> Result<BTreeSet<String>, SchemaError> {
    let mut files = BTreeSet::new();
    let entries = dir.entries().map_err(|err| SchemaError::Io(err.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|err| SchemaError::Io(err.to_string()))?;
        let file_type = entry.file_type().map_err(|err| SchemaError::Io(err.to_string()))?;
        if !file_type.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_schema_file_name(&name) {
            files.insert(name);
        }
    }
    Ok(files)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
