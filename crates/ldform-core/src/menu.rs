//! The grouped schema-type menu offered when adding a schema.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One labeled section of the menu: `type name -> display label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaTypeGroup {
    pub label: String,
    pub options: IndexMap<String, String>,
}

/// The whole menu, in display order.
pub type SchemaTypeMenu = Vec<SchemaTypeGroup>;

impl SchemaTypeGroup {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            options: IndexMap::new(),
        }
    }

    /// Add a type whose display label is its name.
    #[must_use]
    pub fn with(self, type_name: &str) -> Self {
        self.with_label(type_name, type_name)
    }

    /// Add a type with an explicit display label.
    #[must_use]
    pub fn with_label(mut self, type_name: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.insert(type_name.into(), label.into());
        self
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.options.contains_key(type_name)
    }
}
