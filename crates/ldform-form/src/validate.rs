//! Advisory required-field validation.
//!
//! Validation never blocks saving or exporting; callers show the result as a
//! count or badge. Only `required` and visible descriptors are examined.

use ldform_core::{FieldDescriptor, SchemaInstance};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// `name`, `address.streetAddress`, `mainEntity[0].name`
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Check every required field of an instance.
///
/// A field's value is what the form shows: the stored value, or the
/// declared default when nothing is stored.
#[must_use]
pub fn validate(instance: &SchemaInstance, descriptors: &[FieldDescriptor]) -> ValidationReport {
    let mut errors = Vec::new();
    check(descriptors, &instance.fields, "", &mut errors);
    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// `""`, the single message, or `"<n> required fields are missing"`.
#[must_use]
pub fn summary(errors: &[ValidationError]) -> String {
    match errors {
        [] => String::new(),
        [only] => only.message.clone(),
        many => format!("{} required fields are missing", many.len()),
    }
}

fn check(
    descriptors: &[FieldDescriptor],
    tree: &Value,
    prefix: &str,
    errors: &mut Vec<ValidationError>,
) {
    for field in descriptors
        .iter()
        .filter(|field| field.required && field.visible)
    {
        let path = if prefix.is_empty() {
            field.id.clone()
        } else {
            format!("{prefix}.{}", field.id)
        };

        let value = tree
            .get(field.id.as_str())
            .filter(|value| !value.is_null())
            .cloned()
            .or_else(|| field.default_value());

        if value.as_ref().is_none_or(is_empty) {
            errors.push(ValidationError {
                message: format!("{} is required", field.display_name()),
                field: path.clone(),
            });
        }

        if field.sub_fields.is_empty() {
            continue;
        }
        match value {
            Some(Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    if item.is_object() {
                        check(&field.sub_fields, item, &format!("{path}[{index}]"), errors);
                    }
                }
            }
            Some(object @ Value::Object(_)) => check(&field.sub_fields, &object, &path, errors),
            _ => {}
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn instance(fields: Value) -> SchemaInstance {
        SchemaInstance {
            type_name: "Thing".into(),
            fields,
        }
    }

    fn error(field: &str, message: &str) -> ValidationError {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "name": null }))]
    #[case(json!({ "name": "" }))]
    fn empty_required_field(#[case] fields: Value) {
        let descriptors = vec![FieldDescriptor::text("name").label("Name").required()];
        let report = validate(&instance(fields), &descriptors);
        assert!(!report.valid);
        assert_eq!(report.errors, vec![error("name", "Name is required")]);
    }

    #[test]
    fn default_satisfies_required() {
        let descriptors = vec![
            FieldDescriptor::text("name")
                .required()
                .default_text("{{ site.name }}"),
        ];
        assert!(validate(&instance(json!({})), &descriptors).valid);
    }

    #[test]
    fn optional_and_invisible_fields_are_ignored() {
        let descriptors = vec![
            FieldDescriptor::text("name"),
            FieldDescriptor::text("@id").required().invisible(),
        ];
        assert!(validate(&instance(json!({})), &descriptors).valid);
    }

    #[test]
    fn empty_list_counts_as_present() {
        let descriptors = vec![
            FieldDescriptor::text("sameAs")
                .label("Profiles")
                .cloneable()
                .required(),
        ];
        let report = validate(&instance(json!({ "sameAs": [] })), &descriptors);
        assert_eq!(
            report,
            ValidationReport {
                valid: true,
                errors: Vec::new(),
            }
        );
    }

    #[test]
    fn invisible_sub_field_of_required_group_is_ignored() {
        let descriptors = vec![
            FieldDescriptor::group(
                "address",
                vec![
                    FieldDescriptor::text("streetAddress")
                        .label("Street")
                        .required()
                        .invisible(),
                    FieldDescriptor::text("postalCode").required(),
                ],
            )
            .required(),
        ];
        let report = validate(
            &instance(json!({ "address": { "postalCode": "12345" } })),
            &descriptors,
        );
        assert!(report.valid, "{:?}", report.errors);
    }

    #[test]
    fn message_falls_back_to_id() {
        let descriptors = vec![FieldDescriptor::text("headline").required()];
        let report = validate(&instance(json!({})), &descriptors);
        assert_eq!(report.errors[0].message, "headline is required");
    }

    #[test]
    fn nested_group_paths() {
        let descriptors = vec![
            FieldDescriptor::group(
                "address",
                vec![
                    FieldDescriptor::text("streetAddress")
                        .label("Street")
                        .required(),
                    FieldDescriptor::text("postalCode"),
                ],
            )
            .required(),
        ];
        let report = validate(
            &instance(json!({ "address": { "postalCode": "12345" } })),
            &descriptors,
        );
        assert_eq!(
            report.errors,
            vec![error("address.streetAddress", "Street is required")]
        );
    }

    #[test]
    fn empty_object_is_present() {
        let descriptors = vec![
            FieldDescriptor::group("address", vec![FieldDescriptor::text("streetAddress")])
                .label("Address")
                .required(),
        ];
        assert!(validate(&instance(json!({ "address": {} })), &descriptors).valid);
    }

    #[test]
    fn cloneable_entries_are_indexed() {
        let descriptors = vec![
            FieldDescriptor::group(
                "mainEntity",
                vec![FieldDescriptor::text("name").label("Question").required()],
            )
            .label("Questions")
            .cloneable()
            .required(),
        ];
        let fields = json!({
            "mainEntity": [
                { "name": "What?" },
                { "name": "" },
                "stray",
                {}
            ]
        });
        let report = validate(&instance(fields), &descriptors);
        assert_eq!(
            report.errors,
            vec![
                error("mainEntity[1].name", "Question is required"),
                error("mainEntity[3].name", "Question is required"),
            ]
        );
    }

    #[test]
    fn summaries() {
        assert_eq!(summary(&[]), "");
        assert_eq!(summary(&[error("a", "A is required")]), "A is required");
        assert_eq!(
            summary(&[error("a", "A is required"), error("b", "B is required")]),
            "2 required fields are missing"
        );
    }
}
