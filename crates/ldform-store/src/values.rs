//! The path-addressed value store.
//!
//! Holds the `id -> SchemaInstance` map and the label index derived from it.
//! Every write goes through here so the two never disagree.

use ldform_core::edit::{coerce_entries, touches_label};
use ldform_core::ids::generate_instance_id;
use ldform_core::{CoreError, InstanceMap, SchemaInstance, WriteBack};
use serde::Serialize;
use serde_json::Value;

use crate::labels::LabelIndex;

/// Outcome of merging an imported map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    /// Ids that already existed and were replaced.
    pub overwritten: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    instances: InstanceMap,
    labels: LabelIndex,
}

impl ValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_instances(instances: InstanceMap) -> Self {
        let labels = LabelIndex::rebuild(&instances);
        Self { instances, labels }
    }

    /// Insert a new instance under a freshly generated id and return the id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IdGeneration` if the OS random source fails.
    pub fn add_instance(&mut self, instance: SchemaInstance) -> Result<String, CoreError> {
        let mut id = generate_instance_id()?;
        while self.instances.contains_key(&id) {
            tracing::debug!(%id, "instance id collision, regenerating");
            id = generate_instance_id()?;
        }
        self.insert(id.clone(), instance);
        Ok(id)
    }

    /// Insert or replace an instance under a caller-chosen id.
    pub fn insert(&mut self, id: String, instance: SchemaInstance) -> Option<SchemaInstance> {
        self.labels.upsert(&id, &instance);
        self.instances.insert(id, instance)
    }

    /// Delete an instance and its label. Deleting a missing id does nothing.
    pub fn remove_instance(&mut self, id: &str) -> Option<SchemaInstance> {
        self.labels.remove(id);
        self.instances.shift_remove(id)
    }

    #[must_use]
    pub fn instance(&self, id: &str) -> Option<&SchemaInstance> {
        self.instances.get(id)
    }

    /// Read an instance-relative path (`type`, `fields.author.name`).
    #[must_use]
    pub fn get(&self, id: &str, path: &str) -> Option<Value> {
        self.instances.get(id)?.get(path)
    }

    #[must_use]
    pub const fn instances(&self) -> &InstanceMap {
        &self.instances
    }

    #[must_use]
    pub const fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Write `value` at an instance-relative path. Returns `false` when the
    /// id is unknown.
    ///
    /// Writing `fields._label` (or anything containing it) refreshes the
    /// label index in the same call.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` for paths outside `type`/`fields`
    /// and for array indices far past the end of a stored list.
    pub fn update(&mut self, id: &str, path: &str, value: Value) -> Result<bool, CoreError> {
        let Some(instance) = self.instances.get_mut(id) else {
            return Ok(false);
        };
        instance.set(path, value)?;
        if touches_label(path) {
            self.labels.upsert(id, instance);
        }
        Ok(true)
    }

    /// Write through a form control's address, materializing its seeds first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` for addresses outside the instance.
    pub fn write(&mut self, id: &str, address: &WriteBack, value: Value) -> Result<bool, CoreError> {
        let Some(instance) = self.instances.get_mut(id) else {
            return Ok(false);
        };
        address.apply(instance, value)?;
        if address.touches_label() {
            self.labels.upsert(id, instance);
        }
        Ok(true)
    }

    /// Append an entry to the cloneable array at `address` and return its
    /// index. `None` when the id is unknown.
    ///
    /// A scalar stored where the array belongs is wrapped into a one-element
    /// array first; an empty scalar is discarded.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` for addresses outside the instance.
    pub fn add_entry(
        &mut self,
        id: &str,
        address: &WriteBack,
        seed: Value,
    ) -> Result<Option<usize>, CoreError> {
        let Some(instance) = self.instances.get_mut(id) else {
            return Ok(None);
        };
        let Some(items) = entries(instance, address)? else {
            return Ok(None);
        };
        items.push(seed);
        Ok(Some(items.len() - 1))
    }

    /// Remove one entry of the cloneable array at `address`.
    ///
    /// Returns the removed value, or `None` when the id is unknown or the
    /// index is out of range. Nothing is materialized unless an entry is
    /// actually removed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPath` for addresses outside the instance.
    pub fn remove_entry(
        &mut self,
        id: &str,
        address: &WriteBack,
        index: usize,
    ) -> Result<Option<Value>, CoreError> {
        let Some(instance) = self.instances.get_mut(id) else {
            return Ok(None);
        };
        let mut staged = instance.clone();
        let removed = entries(&mut staged, address)?
            .filter(|items| index < items.len())
            .map(|items| items.remove(index));
        if removed.is_some() {
            *instance = staged;
        }
        Ok(removed)
    }

    /// Merge an imported map. Existing ids are replaced by the imported
    /// instance; labels of every imported id are recomputed.
    pub fn import_instances(&mut self, imported: InstanceMap) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for (id, instance) in imported {
            if self.insert(id.clone(), instance).is_some() {
                tracing::info!(%id, "import replaced an existing schema");
                summary.overwritten.push(id);
            }
            summary.imported += 1;
        }
        summary
    }

    /// Swap the whole map and rebuild the label index.
    pub fn replace_all(&mut self, instances: InstanceMap) {
        self.labels = LabelIndex::rebuild(&instances);
        self.instances = instances;
    }
}

/// The cloneable array at `address`, materializing seeds and wrapping a
/// stored scalar first.
fn entries<'a>(
    instance: &'a mut SchemaInstance,
    address: &WriteBack,
) -> Result<Option<&'a mut Vec<Value>>, CoreError> {
    address.materialize(instance)?;

    let current = instance.get(&address.path).unwrap_or(Value::Null);
    if !current.is_array() {
        instance.set(&address.path, Value::Array(coerce_entries(current)))?;
    }

    Ok(instance
        .field_mut(&address.path)
        .and_then(Value::as_array_mut))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn store_with(type_name: &str, label: &str) -> (ValueStore, String) {
        let mut store = ValueStore::new();
        let id = store
            .add_instance(SchemaInstance::new(type_name, label))
            .unwrap();
        (store, id)
    }

    #[test]
    fn add_instance_indexes_label() {
        let (store, id) = store_with("WebSite", "Home");
        assert_eq!(store.labels().get(&id), Some("Home"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_label_refreshes_index() {
        let (mut store, id) = store_with("WebSite", "Home");
        assert!(store.update(&id, "fields._label", json!("Landing")).unwrap());
        assert_eq!(store.labels().get(&id), Some("Landing"));
        assert_eq!(store.instance(&id).unwrap().label(), "Landing");
    }

    #[test]
    fn update_unknown_id_is_false() {
        let mut store = ValueStore::new();
        assert!(!store.update("sch-missing", "fields.name", json!("x")).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn update_creates_intermediates() {
        let (mut store, id) = store_with("Organization", "Acme");
        store
            .update(&id, "fields.address.streetAddress", json!("1 Main St"))
            .unwrap();
        assert_eq!(
            store.get(&id, "fields.address"),
            Some(json!({ "streetAddress": "1 Main St" }))
        );
    }

    #[test]
    fn replacing_fields_recomputes_label() {
        let (mut store, id) = store_with("WebSite", "Home");
        store.update(&id, "fields", json!({ "name": "x" })).unwrap();
        assert_eq!(store.labels().get(&id), Some("WebSite"));
    }

    #[test]
    fn remove_drops_label() {
        let (mut store, id) = store_with("WebSite", "Home");
        assert!(store.remove_instance(&id).is_some());
        assert!(store.labels().get(&id).is_none());
        assert!(store.remove_instance(&id).is_none());
        assert!(store.labels().is_empty());
    }

    #[test]
    fn add_entry_materializes_default_entries() {
        let (mut store, id) = store_with("Article", "Post");
        let address = WriteBack::new("fields.image").seeded(json!(["{{ post.thumbnail }}"]));
        let index = store.add_entry(&id, &address, json!("")).unwrap();
        assert_eq!(index, Some(1));
        assert_eq!(
            store.get(&id, "fields.image"),
            Some(json!(["{{ post.thumbnail }}", ""]))
        );
    }

    #[test]
    fn add_entry_wraps_scalar() {
        let (mut store, id) = store_with("Article", "Post");
        store.update(&id, "fields.image", json!("a.png")).unwrap();
        let index = store
            .add_entry(&id, &WriteBack::new("fields.image"), json!("b.png"))
            .unwrap();
        assert_eq!(index, Some(1));
        assert_eq!(store.get(&id, "fields.image"), Some(json!(["a.png", "b.png"])));
    }

    #[test]
    fn add_entry_discards_empty_scalar() {
        let (mut store, id) = store_with("Article", "Post");
        store.update(&id, "fields.image", json!("")).unwrap();
        let index = store
            .add_entry(&id, &WriteBack::new("fields.image"), json!("b.png"))
            .unwrap();
        assert_eq!(index, Some(0));
    }

    #[test]
    fn remove_entry_shifts_down() {
        let (mut store, id) = store_with("Article", "Post");
        store
            .update(&id, "fields.image", json!(["a.png", "b.png", "c.png"]))
            .unwrap();
        let address = WriteBack::new("fields.image");
        assert_eq!(
            store.remove_entry(&id, &address, 1).unwrap(),
            Some(json!("b.png"))
        );
        assert_eq!(store.remove_entry(&id, &address, 5).unwrap(), None);
        assert_eq!(store.get(&id, "fields.image"), Some(json!(["a.png", "c.png"])));
    }

    #[test]
    fn out_of_range_remove_leaves_instance_untouched() {
        let (mut store, id) = store_with("Article", "Post");
        store.update(&id, "fields.image", json!("a.png")).unwrap();
        let before = store.instance(&id).cloned();

        let seeded = WriteBack::new("fields.author")
            .seeded(json!({ "@type": "Person" }))
            .child("sameAs");
        assert_eq!(store.remove_entry(&id, &seeded, 3).unwrap(), None);
        let image = WriteBack::new("fields.image");
        assert_eq!(store.remove_entry(&id, &image, 1).unwrap(), None);

        assert_eq!(store.instance(&id).cloned(), before);
        assert_eq!(store.remove_entry(&id, &image, 0).unwrap(), Some(json!("a.png")));
        assert_eq!(store.get(&id, "fields.image"), Some(json!([])));
    }

    #[test]
    fn entry_actions_on_unknown_id() {
        let mut store = ValueStore::new();
        let address = WriteBack::new("fields.image");
        assert_eq!(store.add_entry("nope", &address, json!("")).unwrap(), None);
        assert_eq!(store.remove_entry("nope", &address, 0).unwrap(), None);
    }

    #[test]
    fn import_overwrites_and_reports() {
        let (mut store, id) = store_with("WebSite", "Home");
        let mut imported = InstanceMap::new();
        imported.insert(id.clone(), SchemaInstance::new("WebPage", "About"));
        imported.insert("other".into(), SchemaInstance::new("Thing", "Misc"));

        let summary = store.import_instances(imported);
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.overwritten, vec![id.clone()]);
        assert_eq!(store.labels().get(&id), Some("About"));
        assert_eq!(store.instance(&id).unwrap().type_name, "WebPage");
        assert_eq!(store.labels().get("other"), Some("Misc"));
    }

    #[test]
    fn replace_all_rebuilds_labels() {
        let (mut store, id) = store_with("WebSite", "Home");
        let mut next = InstanceMap::new();
        next.insert("a".into(), SchemaInstance::new("Thing", "A"));
        store.replace_all(next);
        assert!(store.labels().get(&id).is_none());
        assert_eq!(store.labels().get("a"), Some("A"));
        assert_eq!(store.len(), 1);
    }
}
