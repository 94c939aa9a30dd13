use ldform_core::FieldDescriptor;

use super::{Definitions, define};
use crate::common;

pub(super) fn register(defs: &mut Definitions) {
    define(defs, "Thing", thing());
    define(defs, "Person", person());
    define(defs, "CustomJsonLd", custom_json_ld());
}

fn thing() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("Thing"),
        common::id(),
        common::name().required(),
        common::description(),
        common::url(),
        common::image(),
        common::same_as(),
    ]
}

fn person() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("Person"),
        common::id(),
        common::name().required().default_text("{{ author.name }}"),
        FieldDescriptor::text("jobTitle").label("Job title"),
        common::url(),
        FieldDescriptor::image("image").label("Photo"),
        FieldDescriptor::text("email").label("Email"),
        common::organization("worksFor", "Works for"),
        common::same_as(),
    ]
}

/// Free-form entry point: the user names the type and fills common properties.
/// Anything else is written directly by path.
fn custom_json_ld() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("docs/schemas.html"),
        FieldDescriptor::text("@type")
            .label("Type")
            .tooltip("Any schema.org type name.")
            .placeholder("Thing")
            .required(),
        common::id(),
        common::name(),
        common::description(),
        common::url(),
        common::same_as(),
    ]
}
