//! Field descriptors: the declarative description of one editable property.
//!
//! A descriptor is recursive. A `Group` descriptor owns an ordered list of
//! sub-descriptors describing the nested object it edits, and any descriptor
//! may be `cloneable`, turning its value into an array of homogeneous entries.
//!
//! Descriptors serialize with the key names the stored catalog format uses
//! (`type`, `std`, `fields`, `show`, `hideGroupTitle`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::ControlKind;

/// Group tag applied to top-level descriptors that declare none.
pub const MAIN_GROUP: &str = "main";

/// A descriptor's declared default: a string, or a list of strings for
/// repeatable image-like fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldDefault {
    Text(String),
    List(Vec<String>),
}

impl FieldDefault {
    /// The default as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        }
    }

    /// The default as a single scalar: the text itself, or the first list item.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(items) => items.first().map(String::as_str),
        }
    }
}

/// One editable property of a schema type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Key within the enclosing fields object (`name`, `@type`, `@id`, ...).
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    #[schemars(with = "String")]
    pub control: ControlKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Affects validation only. Never blocks storage or export.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(rename = "std", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,
    /// Raw options in any of the three legal shapes. See [`crate::FieldOptions`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(rename = "fields", default, skip_serializing_if = "Vec::is_empty")]
    pub sub_fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cloneable: bool,
    #[serde(rename = "show", default = "default_visible", skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(rename = "hideGroupTitle", default, skip_serializing_if = "is_false")]
    pub suppress_group_label: bool,
    /// Heading shown above each entry of a cloneable field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_item_heading: Option<String>,
    /// Top-level layout section. Absent means [`MAIN_GROUP`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Target of a `DocsLink` control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Visible height of a `Textarea`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

const fn default_visible() -> bool {
    true
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_true(value: &bool) -> bool {
    *value
}

/// How the resolver and validator treat a descriptor.
///
/// Cloneable takes precedence over Group: a cloneable group is an array of
/// group entries, each resolved against a derived non-cloneable descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldShape<'a> {
    Cloneable,
    Group {
        sub_fields: &'a [FieldDescriptor],
        titled: bool,
    },
    Leaf(ControlKind),
}

impl FieldDescriptor {
    /// A visible, optional descriptor with no metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, control: ControlKind) -> Self {
        Self {
            id: id.into(),
            label: None,
            control,
            tooltip: None,
            placeholder: None,
            description: None,
            required: false,
            default: None,
            options: None,
            sub_fields: Vec::new(),
            cloneable: false,
            visible: true,
            suppress_group_label: false,
            clone_item_heading: None,
            group: None,
            url: None,
            rows: None,
        }
    }

    #[must_use]
    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Text)
    }

    #[must_use]
    pub fn textarea(id: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Textarea)
    }

    #[must_use]
    pub fn select(id: impl Into<String>, options: Value) -> Self {
        Self::new(id, ControlKind::Select).options(options)
    }

    #[must_use]
    pub fn data_list(id: impl Into<String>, options: Value) -> Self {
        Self::new(id, ControlKind::DataList).options(options)
    }

    #[must_use]
    pub fn date(id: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Date)
    }

    #[must_use]
    pub fn image(id: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Image)
    }

    /// A hidden field carrying a fixed default, e.g. a nested `@type`.
    #[must_use]
    pub fn hidden(id: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(id, ControlKind::Hidden).default_text(default)
    }

    #[must_use]
    pub fn group(id: impl Into<String>, sub_fields: Vec<Self>) -> Self {
        Self::new(id, ControlKind::Group).sub_fields(sub_fields)
    }

    /// A documentation link. Its id is conventionally `docs`.
    #[must_use]
    pub fn docs_link(url: impl Into<String>) -> Self {
        Self::new("docs", ControlKind::DocsLink).url(url)
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn default_text(mut self, default: impl Into<String>) -> Self {
        self.default = Some(FieldDefault::Text(default.into()));
        self
    }

    #[must_use]
    pub fn default_list<I, S>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default = Some(FieldDefault::List(
            defaults.into_iter().map(Into::into).collect(),
        ));
        self
    }

    #[must_use]
    pub fn options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn sub_fields(mut self, sub_fields: Vec<Self>) -> Self {
        self.sub_fields = sub_fields;
        self
    }

    #[must_use]
    pub const fn cloneable(mut self) -> Self {
        self.cloneable = true;
        self
    }

    /// Exclude from rendering. The default may still be seeded into the tree.
    #[must_use]
    pub const fn invisible(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub const fn suppress_group_label(mut self) -> Self {
        self.suppress_group_label = true;
        self
    }

    #[must_use]
    pub fn clone_item_heading(mut self, heading: impl Into<String>) -> Self {
        self.clone_item_heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Tagged view of this descriptor for recursive processing.
    #[must_use]
    pub fn shape(&self) -> FieldShape<'_> {
        if self.cloneable {
            FieldShape::Cloneable
        } else if self.control == ControlKind::Group {
            FieldShape::Group {
                sub_fields: &self.sub_fields,
                titled: !self.suppress_group_label,
            }
        } else {
            FieldShape::Leaf(self.control)
        }
    }

    /// Label if declared, otherwise the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.id)
    }

    /// Section this descriptor belongs to in a top-level layout.
    #[must_use]
    pub fn group_name(&self) -> &str {
        self.group.as_deref().unwrap_or(MAIN_GROUP)
    }

    /// The declared default as a JSON value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        self.default.as_ref().map(FieldDefault::to_value)
    }

    /// Descriptor used for each entry of a cloneable field.
    ///
    /// Clears `cloneable` so the entry is not wrapped again, and drops the
    /// label since entries carry their own heading.
    #[must_use]
    pub fn entry_descriptor(&self) -> Self {
        Self {
            cloneable: false,
            label: None,
            ..self.clone()
        }
    }

    /// Seed for one new entry of a cloneable field.
    ///
    /// Groups seed an object holding their hidden defaults. Leaves seed the
    /// scalar default (first item of a list default), or `""`.
    #[must_use]
    pub fn entry_seed(&self) -> Value {
        if self.control == ControlKind::Group {
            return Value::Object(self.hidden_defaults());
        }
        Value::String(
            self.default
                .as_ref()
                .and_then(FieldDefault::first)
                .unwrap_or_default()
                .to_string(),
        )
    }

    /// Defaults of sub-fields that the user never edits directly (hidden
    /// controls and invisible fields), keyed by sub-field id.
    #[must_use]
    pub fn hidden_defaults(&self) -> Map<String, Value> {
        self.sub_fields
            .iter()
            .filter(|field| field.control == ControlKind::Hidden || !field.visible)
            .filter_map(|field| field.default_value().map(|value| (field.id.clone(), value)))
            .collect()
    }
}
