//! Central schema registry for ldform types.
//!
//! The `SchemaRegistry` builds JSON Schemas from ldform-core types at
//! construction time using [`schemars::schema_for!`] and validates values with
//! `jsonschema` validators compiled once per schema.

use std::collections::HashMap;

use jsonschema::Validator;
use ldform_core::{
    FieldDescriptor, FieldOptions, InstanceMap, SchemaInstance, SchemaTypeGroup, SchemaTypeMenu,
    WriteBack,
};
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

struct Entry {
    schema: Value,
    validator: Validator,
}

/// Central store of all JSON Schemas ldform reads or writes.
pub struct SchemaRegistry {
    entries: HashMap<&'static str, Entry>,
}

/// Generate, compile, and insert a schema. Panics if the generated schema
/// does not serialize or compile, which would be a bug in a derive.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {{
        let schema = serde_json::to_value(schema_for!($ty)).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        $map.insert($name, Entry { schema, validator });
    }};
}

impl SchemaRegistry {
    /// Build a registry of the model, exchange, and menu schemas.
    ///
    /// # Panics
    ///
    /// Panics if a `schemars`-generated schema fails to serialize or compile.
    /// Neither happens for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        // --- Model ---
        register!(entries, "field_descriptor", FieldDescriptor);
        register!(entries, "field_options", FieldOptions);
        register!(entries, "schema_instance", SchemaInstance);
        register!(entries, "write_back", WriteBack);

        // --- Persisted and exchanged documents ---
        register!(entries, "instance_map", InstanceMap);
        register!(entries, "schema_type_group", SchemaTypeGroup);
        register!(entries, "schema_type_menu", SchemaTypeMenu);

        Self { entries }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).map(|entry| &entry.schema)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = entry
            .validator
            .iter_errors(instance)
            .map(|e| format!("{}: {e}", display_path(&e.instance_path.to_string())))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// Whether a value matches a named schema. Unknown names never match.
    #[must_use]
    pub fn is_valid(&self, name: &str, instance: &Value) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.validator.is_valid(instance))
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn display_path(pointer: &str) -> &str {
    if pointer.is_empty() { "/" } else { pointer }
}
