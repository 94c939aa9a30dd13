//! Export and import of the whole instance map as one JSON document.
//!
//! The exported file is exactly the persisted form: an object of
//! `id -> { type, fields }`. Import checks every entry before anything is
//! merged, so a bad file never leaves a partial result behind.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ldform_core::{InstanceMap, SchemaInstance};
use ldform_schema::{SchemaError, SchemaRegistry};
use serde_json::Value;

use crate::error::{ImportError, StoreError};

/// `schema-export-YYYY-MM-DD.json`
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("schema-export-{}.json", date.format("%Y-%m-%d"))
}

/// Pretty-print the map with two-space indentation.
///
/// # Errors
///
/// Returns `StoreError::Serialize` if serialization fails.
pub fn export_json(instances: &InstanceMap) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(instances)?)
}

/// Write the export file into `dir` and return its path.
///
/// # Errors
///
/// Returns `StoreError::Export` when the file cannot be written.
pub fn write_export(
    dir: &Path,
    instances: &InstanceMap,
    date: NaiveDate,
) -> Result<PathBuf, StoreError> {
    let path = dir.join(export_filename(date));
    let text = export_json(instances)?;
    std::fs::write(&path, text).map_err(|source| StoreError::Export {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = instances.len(), "exported schemas");
    Ok(path)
}

/// Parse an import document.
///
/// # Errors
///
/// `InvalidJson` for malformed text, `NotAnObject` when the top level is
/// not an object, `InvalidInstance` for the first entry that is not a
/// `{ type, fields }` instance.
pub fn parse_import(text: &str, registry: &SchemaRegistry) -> Result<InstanceMap, ImportError> {
    let document: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;
    let Value::Object(entries) = document else {
        return Err(ImportError::NotAnObject {
            found: json_kind(&document),
        });
    };

    let mut instances = InstanceMap::with_capacity(entries.len());
    for (id, entry) in entries {
        if let Err(error) = registry.validate("schema_instance", &entry) {
            let errors = match error {
                SchemaError::ValidationFailed { errors, .. } => errors,
                other => vec![other.to_string()],
            };
            return Err(ImportError::InvalidInstance { id, errors });
        }
        let instance: SchemaInstance =
            serde_json::from_value(entry).map_err(|e| ImportError::InvalidInstance {
                id: id.clone(),
                errors: vec![e.to_string()],
            })?;
        instances.insert(id, instance);
    }
    Ok(instances)
}

/// Read and parse an import file.
///
/// # Errors
///
/// `Unreadable` when the file cannot be read, otherwise as [`parse_import`].
pub fn read_import(path: &Path, registry: &SchemaRegistry) -> Result<InstanceMap, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_import(&text, registry)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
