//! Top-level form layout: one flat plan, or collapsible sections when the
//! descriptors declare more than one group tag.

use indexmap::IndexMap;
use ldform_core::{FieldDescriptor, MAIN_GROUP};
use serde::Serialize;
use serde_json::Value;

use crate::plan::RenderPlan;
use crate::resolve::resolve;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum FormLayout {
    /// The type has no descriptors ("no fields available").
    Empty,
    Flat { fields: RenderPlan },
    Sectioned { sections: Vec<Section> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    /// `None` for the `main` section, which renders untitled.
    pub title: Option<String>,
    pub collapsible: bool,
    pub fields: RenderPlan,
}

/// Resolve and arrange a whole form.
///
/// Sections appear in the order their group tag first appears among the
/// descriptors; descriptors keep their relative order inside a section.
#[must_use]
pub fn layout(schema_id: &str, descriptors: &[FieldDescriptor], tree: &Value) -> FormLayout {
    if descriptors.is_empty() {
        return FormLayout::Empty;
    }

    let mut groups: IndexMap<&str, Vec<FieldDescriptor>> = IndexMap::new();
    for field in descriptors {
        groups
            .entry(field.group_name())
            .or_default()
            .push(field.clone());
    }

    if groups.len() == 1 {
        return FormLayout::Flat {
            fields: resolve(schema_id, descriptors, tree),
        };
    }

    let sections = groups
        .into_iter()
        .map(|(name, fields)| Section {
            name: name.to_string(),
            title: (name != MAIN_GROUP).then(|| name.to_string()),
            collapsible: true,
            fields: resolve(schema_id, &fields, tree),
        })
        .collect();
    FormLayout::Sectioned { sections }
}

impl FormLayout {
    /// All resolved instructions, section by section.
    pub fn plans(&self) -> impl Iterator<Item = &RenderPlan> {
        let (flat, sections): (Option<&RenderPlan>, &[Section]) = match self {
            Self::Empty => (None, &[]),
            Self::Flat { fields } => (Some(fields), &[]),
            Self::Sectioned { sections } => (None, sections.as_slice()),
        };
        flat.into_iter()
            .chain(sections.iter().map(|section| &section.fields))
    }
}
