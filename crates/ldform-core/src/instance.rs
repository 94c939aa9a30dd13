//! Schema instances: one user-authored structured-data object each.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::path;

/// Reserved field holding the human-facing display name.
pub const LABEL_KEY: &str = "_label";

/// Instance-relative path of the label field.
pub const LABEL_PATH: &str = "fields._label";

/// All schema instances, keyed by id, in creation order.
pub type InstanceMap = IndexMap<String, SchemaInstance>;

/// A typed, sparse field-value tree.
///
/// `fields` is expected to be an object; absent keys mean "use the
/// descriptor default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaInstance {
    /// Schema.org type name, also the key into the descriptor catalog.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "empty_object")]
    #[schemars(with = "Map<String, Value>")]
    pub fields: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl SchemaInstance {
    /// A fresh instance with only its label set.
    #[must_use]
    pub fn new(type_name: impl Into<String>, label: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(LABEL_KEY.to_string(), Value::String(label.into()));
        Self {
            type_name: type_name.into(),
            fields: Value::Object(fields),
        }
    }

    /// Display label: `fields._label`, falling back to the type name.
    #[must_use]
    pub fn label(&self) -> String {
        match path::get(&self.fields, LABEL_KEY) {
            Some(Value::String(label)) => label.clone(),
            Some(Value::Null) | None => self.type_name.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Read an instance-relative path: `type`, `fields`, or `fields.<path>`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<Value> {
        match path.split_once('.') {
            None if path == "type" => Some(Value::String(self.type_name.clone())),
            None if path == "fields" => Some(self.fields.clone()),
            Some(("fields", rest)) => path::get(&self.fields, rest).cloned(),
            _ => None,
        }
    }

    /// Write an instance-relative path.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` when the path does not start with
    /// `type` or `fields`, or when `type` is given a non-string value.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), CoreError> {
        match path.split_once('.') {
            None if path == "type" => match value {
                Value::String(type_name) => {
                    self.type_name = type_name;
                    Ok(())
                }
                other => Err(invalid(path, &format!("type must be a string, got {other}"))),
            },
            None if path == "fields" => {
                self.fields = value;
                Ok(())
            }
            Some(("fields", rest)) => {
                if path::set(&mut self.fields, rest, value) {
                    Ok(())
                } else {
                    Err(invalid(path, "array index is too far past the end of the list"))
                }
            }
            _ => Err(invalid(path, "instance paths start with `type` or `fields`")),
        }
    }

    /// Mutable access to the value at an instance-relative `fields.<path>`.
    pub fn field_mut(&mut self, path: &str) -> Option<&mut Value> {
        match path.split_once('.') {
            None if path == "fields" => Some(&mut self.fields),
            Some(("fields", rest)) => path::get_mut(&mut self.fields, rest),
            _ => None,
        }
    }
}

fn invalid(path: &str, reason: &str) -> CoreError {
    CoreError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn new_seeds_label_only() {
        let instance = SchemaInstance::new("WebSite", "Home");
        assert_eq!(instance.fields, json!({ "_label": "Home" }));
        assert_eq!(instance.label(), "Home");
    }

    #[test]
    fn label_falls_back_to_type() {
        let instance = SchemaInstance {
            type_name: "Article".into(),
            fields: json!({}),
        };
        assert_eq!(instance.label(), "Article");
    }

    #[test]
    fn paths_address_type_and_fields() {
        let mut instance = SchemaInstance::new("WebSite", "Home");
        instance.set("fields.name", json!("Acme")).unwrap();
        instance.set("type", json!("WebPage")).unwrap();

        assert_eq!(instance.get("fields.name"), Some(json!("Acme")));
        assert_eq!(instance.get("type"), Some(json!("WebPage")));
        assert_eq!(instance.type_name, "WebPage");
        assert_eq!(instance.get("fields.url"), None);
    }

    #[test]
    fn rejects_paths_outside_the_instance() {
        let mut instance = SchemaInstance::new("WebSite", "Home");
        assert!(matches!(
            instance.set("name", json!("Acme")),
            Err(CoreError::InvalidPath { .. })
        ));
        assert!(instance.set("type", json!(3)).is_err());
        assert!(instance.set("type.name", json!("x")).is_err());
    }

    #[test]
    fn rejects_far_out_of_range_array_index() {
        let mut instance = SchemaInstance::new("Organization", "Acme");
        instance.set("fields.image", json!(["a.png"])).unwrap();
        assert!(matches!(
            instance.set("fields.image.18446744073709551615", json!("x")),
            Err(CoreError::InvalidPath { .. })
        ));
        assert_eq!(instance.get("fields.image"), Some(json!(["a.png"])));
    }

    #[test]
    fn missing_fields_deserialize_as_empty_object() {
        let instance: SchemaInstance = serde_json::from_value(json!({ "type": "Thing" })).unwrap();
        assert_eq!(instance.fields, json!({}));
    }
}
