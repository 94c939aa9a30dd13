//! Render-plan instruction types.

use ldform_core::{ControlKind, FieldOptions, WriteBack};
use serde::Serialize;
use serde_json::Value;

/// Instructions in display order.
pub type RenderPlan = Vec<RenderNode>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderNode {
    Leaf(Leaf),
    /// A titled container around a group's sub-fields.
    Group { label: String, children: RenderPlan },
    /// A repeatable field: one entry per array element, plus add/remove
    /// actions addressed at `address`.
    Cloneable {
        id: String,
        label: String,
        address: WriteBack,
        entries: Vec<CloneEntry>,
    },
}

/// One editable control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf {
    /// `field-<schemaId>-<path>`, stable across re-renders.
    pub key: String,
    pub id: String,
    pub control: ControlKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Stored value, else the declared default, else `null`.
    pub value: Value,
    /// Classified options of `Select` and `DataList` controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
    /// Target of a `DocsLink` control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    pub write_back: WriteBack,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloneEntry {
    /// `<schemaId>-<fieldId>-<index>`
    pub key: String,
    pub index: usize,
    pub heading: String,
    /// Shown only because the field has no entries yet. Nothing is stored
    /// until the user edits it.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
    pub children: RenderPlan,
}

impl RenderNode {
    /// Leaves of this node in display order, depth first.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = &Leaf> + '_> {
        match self {
            Self::Leaf(leaf) => Box::new(std::iter::once(leaf)),
            Self::Group { children, .. } => Box::new(children.iter().flat_map(Self::leaves)),
            Self::Cloneable { entries, .. } => Box::new(
                entries
                    .iter()
                    .flat_map(|entry| entry.children.iter().flat_map(Self::leaves)),
            ),
        }
    }
}
