//! Rendered documents and their display text.

use serde_json::{Map, Value};

use crate::error::RenderError;

/// One JSON-LD object. Key order is output order.
pub type RenderedDocument = Map<String, Value>;

/// Pretty-print one document with two-space indentation.
///
/// # Errors
///
/// Returns `RenderError::Format` if serialization fails.
pub fn format_document(document: &RenderedDocument) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Pretty-print several documents as one JSON array.
///
/// # Errors
///
/// Returns `RenderError::Format` if serialization fails.
pub fn format_documents(documents: &[RenderedDocument]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(documents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc(value: Value) -> RenderedDocument {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn formats_with_two_spaces() {
        let text = format_document(&doc(json!({ "@type": "Thing", "name": "x" }))).unwrap();
        assert_eq!(text, "{\n  \"@type\": \"Thing\",\n  \"name\": \"x\"\n}");
    }

    #[test]
    fn formats_many_as_array() {
        let docs = vec![doc(json!({ "a": 1 })), doc(json!({ "b": 2 }))];
        let text = format_documents(&docs).unwrap();
        assert_eq!(text, "[\n  {\n    \"a\": 1\n  },\n  {\n    \"b\": 2\n  }\n]");
        assert_eq!(format_documents(&[]).unwrap(), "[]");
    }
}
