//! Select and data-list options.
//!
//! Stored descriptors carry `options` in one of three shapes:
//!
//! ```text
//! flat map      { "Article": "Article", "NewsArticle": "News Article" }
//! flat list     [ { "value": "Article", "label": "Article" }, ... ]
//! grouped list  [ { "label": "Creative Work", "options": <flat map | flat list> }, ... ]
//! ```
//!
//! [`FieldOptions::classify`] is the single place that tells them apart.
//! Every consumer works with the classified form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One selectable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

impl OptionItem {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A labeled group of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<OptionItem>,
}

/// Classified options, order preserved within and across groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "shape", content = "items", rename_all = "snake_case")]
pub enum FieldOptions {
    FlatMap(Vec<OptionItem>),
    FlatList(Vec<OptionItem>),
    Grouped(Vec<OptionGroup>),
    /// Present but in no recognized shape. Rendered as "no options available".
    Unrecognized,
}

impl FieldOptions {
    /// Classify a raw `options` value.
    ///
    /// An array is discriminated by its first element: `label` + `options`
    /// keys mean grouped, `value` + `label` keys mean a flat list. The rest of
    /// the array must then match that shape. An object is a flat map when
    /// every value is a string. Anything else is [`FieldOptions::Unrecognized`].
    #[must_use]
    pub fn classify(raw: &Value) -> Self {
        match raw {
            Value::Object(map) => flat_map(map).map_or(Self::Unrecognized, Self::FlatMap),
            Value::Array(entries) => match entries.first() {
                Some(first) if is_group(first) => entries
                    .iter()
                    .map(group)
                    .collect::<Option<Vec<_>>>()
                    .map_or(Self::Unrecognized, Self::Grouped),
                Some(first) if item(first).is_some() => flat_list(entries)
                    .map_or(Self::Unrecognized, Self::FlatList),
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    /// Whether there is nothing to choose from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::FlatMap(items) | Self::FlatList(items) => items.is_empty(),
            Self::Grouped(groups) => groups.iter().all(|group| group.options.is_empty()),
            Self::Unrecognized => true,
        }
    }

    /// All items in display order, ignoring group boundaries.
    pub fn items(&self) -> impl Iterator<Item = &OptionItem> {
        let (flat, grouped): (&[OptionItem], &[OptionGroup]) = match self {
            Self::FlatMap(items) | Self::FlatList(items) => (items.as_slice(), &[]),
            Self::Grouped(groups) => (&[], groups.as_slice()),
            Self::Unrecognized => (&[], &[]),
        };
        flat.iter()
            .chain(grouped.iter().flat_map(|group| group.options.iter()))
    }
}

fn is_group(entry: &Value) -> bool {
    entry
        .as_object()
        .is_some_and(|map| map.contains_key("label") && map.contains_key("options"))
}

fn item(entry: &Value) -> Option<OptionItem> {
    let map = entry.as_object()?;
    Some(OptionItem::new(
        map.get("value")?.as_str()?,
        map.get("label")?.as_str()?,
    ))
}

fn flat_list(entries: &[Value]) -> Option<Vec<OptionItem>> {
    entries.iter().map(item).collect()
}

fn flat_map(map: &Map<String, Value>) -> Option<Vec<OptionItem>> {
    map.iter()
        .map(|(value, label)| label.as_str().map(|label| OptionItem::new(value, label)))
        .collect()
}

fn group(entry: &Value) -> Option<OptionGroup> {
    let map = entry.as_object()?;
    let label = map.get("label")?.as_str()?.to_string();
    let options = match map.get("options")? {
        Value::Object(inner) => flat_map(inner)?,
        Value::Array(inner) => flat_list(inner)?,
        _ => return None,
    };
    Some(OptionGroup { label, options })
}
