//! Write-back addresses handed from resolved form controls to the store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::instance::{LABEL_PATH, SchemaInstance};

/// A value to store at `path` before a write, unless something is already there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Seed {
    pub path: String,
    pub value: Value,
}

/// Where a control writes its value, relative to the instance
/// (`fields.author.name`, `fields.image.0`).
///
/// Controls may display values that only exist as descriptor defaults: the
/// entries of a cloneable field shown from its default list, or a group's
/// hidden `@type`. `materialize` lists those, outermost first, so the first
/// edit makes them concrete in the tree before the write lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WriteBack {
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materialize: Vec<Seed>,
}

impl WriteBack {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            materialize: Vec::new(),
        }
    }

    /// Address of a child of this location, inheriting its seeds.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self {
            path: format!("{}.{segment}", self.path),
            materialize: self.materialize.clone(),
        }
    }

    /// Add a seed for this address's own location.
    #[must_use]
    pub fn seeded(mut self, value: Value) -> Self {
        self.materialize.push(Seed {
            path: self.path.clone(),
            value,
        });
        self
    }

    /// Apply seeds, then write `value`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` when the address is not inside the
    /// instance.
    pub fn apply(&self, instance: &mut SchemaInstance, value: Value) -> Result<(), CoreError> {
        self.materialize(instance)?;
        instance.set(&self.path, value)
    }

    /// Store each seed whose location is empty, without writing a value.
    ///
    /// A stored scalar where the seed is a container also counts as empty;
    /// writing through it would otherwise replace it with an object.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` when a seed is not inside the instance.
    pub fn materialize(&self, instance: &mut SchemaInstance) -> Result<(), CoreError> {
        for seed in &self.materialize {
            let fits = instance
                .get(&seed.path)
                .is_some_and(|stored| same_container(&stored, &seed.value));
            if !fits {
                instance.set(&seed.path, seed.value.clone())?;
            }
        }
        Ok(())
    }

    /// Whether writing here can change the instance's display label.
    #[must_use]
    pub fn touches_label(&self) -> bool {
        touches_label(&self.path)
    }
}

/// Entries of a repeatable value: an array as-is, a non-empty scalar as a
/// single entry, and nothing for `null`, `""` or `false`.
#[must_use]
pub fn coerce_entries(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null | Value::Bool(false) => Vec::new(),
        Value::String(text) if text.is_empty() => Vec::new(),
        other => vec![other],
    }
}

fn same_container(stored: &Value, seed: &Value) -> bool {
    match seed {
        Value::Array(_) => stored.is_array(),
        Value::Object(_) => stored.is_object(),
        _ => !stored.is_null(),
    }
}

/// Whether a write at this instance-relative path can change the label.
#[must_use]
pub fn touches_label(path: &str) -> bool {
    matches!(path, LABEL_PATH | "fields" | "type")
        || path
            .strip_prefix(LABEL_PATH)
            .is_some_and(|rest| rest.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn plain_write() {
        let mut instance = SchemaInstance::new("WebSite", "Home");
        WriteBack::new("fields.name")
            .apply(&mut instance, json!("Acme"))
            .unwrap();
        assert_eq!(instance.fields, json!({ "_label": "Home", "name": "Acme" }));
    }

    #[test]
    fn seeds_materialize_before_write() {
        let mut instance = SchemaInstance::new("Article", "Post");
        let address = WriteBack::new("fields.author")
            .seeded(json!({ "@type": "Person" }))
            .child("name");
        address.apply(&mut instance, json!("Ada")).unwrap();
        assert_eq!(
            instance.fields["author"],
            json!({ "@type": "Person", "name": "Ada" })
        );
    }

    #[test]
    fn seeds_do_not_overwrite_stored_values() {
        let mut instance = SchemaInstance::new("Article", "Post");
        instance
            .set("fields.image", json!(["a.png", "b.png"]))
            .unwrap();
        let address = WriteBack::new("fields.image")
            .seeded(json!(["{{ post.thumbnail }}"]))
            .child("1");
        address.apply(&mut instance, json!("c.png")).unwrap();
        assert_eq!(instance.fields["image"], json!(["a.png", "c.png"]));
    }

    #[test]
    fn scalar_in_place_of_array_is_replaced_by_seed() {
        let mut instance = SchemaInstance::new("Article", "Post");
        instance.set("fields.image", json!("a.png")).unwrap();
        let address = WriteBack::new("fields.image")
            .seeded(json!(["a.png"]))
            .child("0");
        address.apply(&mut instance, json!("b.png")).unwrap();
        assert_eq!(instance.fields["image"], json!(["b.png"]));
    }

    #[test]
    fn entries_wrap_truthy_scalars() {
        assert_eq!(coerce_entries(json!(["a", "b"])), vec![json!("a"), json!("b")]);
        assert_eq!(coerce_entries(json!("a")), vec![json!("a")]);
        assert_eq!(coerce_entries(json!({ "name": "x" })), vec![json!({ "name": "x" })]);
        assert!(coerce_entries(json!("")).is_empty());
        assert!(coerce_entries(Value::Null).is_empty());
        assert!(coerce_entries(json!(false)).is_empty());
    }

    #[test]
    fn label_paths() {
        assert!(touches_label("fields._label"));
        assert!(touches_label("fields"));
        assert!(touches_label("type"));
        assert!(!touches_label("fields.name"));
        assert!(!touches_label("fields._labels"));
        assert!(WriteBack::new("fields._label.x").touches_label());
    }

    #[test]
    fn cloneable_default_materializes_on_first_edit() {
        let mut instance = SchemaInstance::new("Article", "Post");
        let address = WriteBack::new("fields.image")
            .seeded(json!(["{{ post.thumbnail }}"]))
            .child("0");
        address.apply(&mut instance, json!("cover.png")).unwrap();
        assert_eq!(instance.fields["image"], json!(["cover.png"]));
    }
}
