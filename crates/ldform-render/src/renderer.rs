use ldform_core::{InstanceMap, SchemaInstance};
use serde_json::{Map, Value};

use crate::document::{RenderedDocument, format_document, format_documents};
use crate::error::RenderError;

/// Value of `@context` on every document.
pub const CONTEXT: &str = "https://schema.org";

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Shown in place of a document that failed to render.
pub const PREVIEW_PLACEHOLDER: &str =
    "// Error generating JSON-LD\n// Please check your schema configuration";

/// Instance -> JSON-LD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// Nesting below `fields` beyond which rendering fails.
    pub max_depth: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Renderer {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Render one instance.
    ///
    /// Stored `@type`, `@context` or `@id` fields replace the generated ones
    /// in place. `@id` defaults to `#<id>`.
    ///
    /// # Errors
    ///
    /// `FieldsNotObject` when `fields` is not an object, `TooDeep` when it
    /// nests deeper than `max_depth`.
    pub fn render(&self, id: &str, instance: &SchemaInstance) -> Result<RenderedDocument, RenderError> {
        let Value::Object(fields) = &instance.fields else {
            return Err(RenderError::FieldsNotObject {
                found: json_kind(&instance.fields),
            });
        };

        let mut document = Map::new();
        document.insert("@context".into(), Value::String(CONTEXT.into()));
        document.insert("@type".into(), Value::String(instance.type_name.clone()));

        for (key, value) in fields {
            if is_internal(key) {
                continue;
            }
            if let Some(value) = self.compact(value, key, 1)? {
                document.insert(key.clone(), value);
            }
        }

        if !document.contains_key("@id") {
            document.insert("@id".into(), Value::String(format!("#{id}")));
        }
        Ok(document)
    }

    /// Render every instance in map order.
    ///
    /// # Errors
    ///
    /// The first instance that fails to render.
    pub fn render_all(&self, instances: &InstanceMap) -> Result<Vec<RenderedDocument>, RenderError> {
        instances
            .iter()
            .map(|(id, instance)| self.render(id, instance))
            .collect()
    }

    /// Display text for one instance. Never fails: errors are logged and
    /// replaced by [`PREVIEW_PLACEHOLDER`].
    #[must_use]
    pub fn preview(&self, id: &str, instance: &SchemaInstance) -> String {
        self.render(id, instance)
            .and_then(|document| format_document(&document))
            .unwrap_or_else(|error| {
                tracing::warn!(%error, id, "failed to render schema");
                PREVIEW_PLACEHOLDER.to_string()
            })
    }

    /// Display text for all instances as one array, or the placeholder.
    #[must_use]
    pub fn preview_all(&self, instances: &InstanceMap) -> String {
        self.render_all(instances)
            .and_then(|documents| format_documents(&documents))
            .unwrap_or_else(|error| {
                tracing::warn!(%error, count = instances.len(), "failed to render schemas");
                PREVIEW_PLACEHOLDER.to_string()
            })
    }

    /// Drop internal keys and empty values. `None` when nothing is left.
    fn compact(&self, value: &Value, path: &str, depth: usize) -> Result<Option<Value>, RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::TooDeep {
                path: path.to_string(),
                limit: self.max_depth,
            });
        }

        match value {
            Value::Null => Ok(None),
            Value::String(text) if text.is_empty() => Ok(None),
            Value::Array(items) => {
                let mut kept = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    if let Some(item) = self.compact(item, &format!("{path}.{index}"), depth + 1)? {
                        kept.push(item);
                    }
                }
                Ok((!kept.is_empty()).then_some(Value::Array(kept)))
            }
            Value::Object(map) => {
                let mut kept = Map::new();
                for (key, item) in map {
                    if is_internal(key) {
                        continue;
                    }
                    if let Some(item) = self.compact(item, &format!("{path}.{key}"), depth + 1)? {
                        kept.insert(key.clone(), item);
                    }
                }
                Ok((!kept.is_empty()).then_some(Value::Object(kept)))
            }
            scalar => Ok(Some(scalar.clone())),
        }
    }
}

fn is_internal(key: &str) -> bool {
    key.starts_with('_')
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
