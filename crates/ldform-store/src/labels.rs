//! Label index: `id -> display label`, derived from the instance map.
//!
//! Pure cache. [`LabelIndex::rebuild`] reproduces it from the instances at
//! any time, and the value store keeps it in lockstep on every mutation that
//! can change a label.

use indexmap::IndexMap;
use ldform_core::{InstanceMap, SchemaInstance};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelIndex(IndexMap<String, String>);

impl LabelIndex {
    #[must_use]
    pub fn rebuild(instances: &InstanceMap) -> Self {
        Self(
            instances
                .iter()
                .map(|(id, instance)| (id.clone(), instance.label()))
                .collect(),
        )
    }

    /// Recompute the label of one instance.
    pub fn upsert(&mut self, id: &str, instance: &SchemaInstance) {
        self.set_label(id, instance.label());
    }

    /// Overwrite a label directly.
    pub fn set_label(&mut self, id: &str, label: String) {
        self.0.insert(id.to_string(), label);
    }

    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.0.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, label)| (id.as_str(), label.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
