use serde_json::Value;

/// A command-line value: verbatim text, or JSON when `json` is set.
pub fn parse_value(raw: &str, json: bool) -> anyhow::Result<Value> {
    if json {
        serde_json::from_str(raw).map_err(|error| anyhow::anyhow!("invalid JSON value '{raw}': {error}"))
    } else {
        Ok(Value::String(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::parse_value;

    #[test]
    fn text_is_kept_verbatim() {
        let value = parse_value("{{ post.title }}", false).expect("text");
        assert_eq!(value, json!("{{ post.title }}"));
    }

    #[test]
    fn json_flag_parses_structures() {
        assert_eq!(parse_value("1200", true).expect("number"), json!(1200));
        assert_eq!(
            parse_value(r#"{"@type":"Person"}"#, true).expect("object"),
            json!({ "@type": "Person" })
        );
    }

    #[test]
    fn errors_on_invalid_json() {
        let err = parse_value("{nope", true).expect_err("should fail");
        assert!(err.to_string().contains("invalid JSON value '{nope'"));
    }
}
