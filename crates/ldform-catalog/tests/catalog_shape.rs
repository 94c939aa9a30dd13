//! Structural checks over every built-in descriptor table.

use std::collections::HashSet;

use ldform_catalog::Catalog;
use ldform_core::{ControlKind, FieldDescriptor, FieldOptions};
use rstest::rstest;

fn walk<'a>(fields: &'a [FieldDescriptor], out: &mut Vec<&'a FieldDescriptor>) {
    for field in fields {
        out.push(field);
        walk(&field.sub_fields, out);
    }
}

fn all_descriptors(catalog: &Catalog) -> Vec<(String, &FieldDescriptor)> {
    let mut out = Vec::new();
    for type_name in catalog.type_names() {
        let mut fields = Vec::new();
        walk(catalog.field_definitions(type_name), &mut fields);
        out.extend(fields.into_iter().map(|field| (type_name.to_string(), field)));
    }
    out
}

#[test]
fn ids_are_unique_per_level() {
    fn check(type_name: &str, fields: &[FieldDescriptor]) {
        let mut seen = HashSet::new();
        for field in fields {
            assert!(
                seen.insert(field.id.as_str()),
                "{type_name}: duplicate field id {}",
                field.id
            );
            check(type_name, &field.sub_fields);
        }
    }

    let catalog = Catalog::builtin();
    for type_name in catalog.type_names() {
        check(type_name, catalog.field_definitions(type_name));
    }
}

#[test]
fn groups_have_sub_fields_and_leaves_do_not() {
    let catalog = Catalog::builtin();
    for (type_name, field) in all_descriptors(&catalog) {
        if field.control == ControlKind::Group {
            assert!(
                !field.sub_fields.is_empty(),
                "{type_name}.{}: empty group",
                field.id
            );
        } else {
            assert!(
                field.sub_fields.is_empty(),
                "{type_name}.{}: sub-fields on a {} control",
                field.id,
                field.control
            );
        }
    }
}

#[test]
fn every_option_set_is_recognized() {
    let catalog = Catalog::builtin();
    for (type_name, field) in all_descriptors(&catalog) {
        if let Some(raw) = &field.options {
            let options = FieldOptions::classify(raw);
            assert!(
                !options.is_empty(),
                "{type_name}.{}: unusable options {raw}",
                field.id
            );
        }
        if field.control.takes_options() {
            assert!(field.options.is_some(), "{type_name}.{}: no options", field.id);
        }
    }
}

#[test]
fn every_type_links_to_documentation() {
    let catalog = Catalog::builtin();
    for type_name in catalog.type_names() {
        let url = catalog
            .documentation_url(type_name)
            .unwrap_or_else(|| panic!("{type_name}: no documentation link"));
        assert!(url.starts_with("https://"), "{type_name}: {url}");
    }
}

#[test]
fn hidden_fields_carry_defaults() {
    let catalog = Catalog::builtin();
    for (type_name, field) in all_descriptors(&catalog) {
        if field.control == ControlKind::Hidden {
            assert!(
                field.default.is_some(),
                "{type_name}.{}: hidden field without a default",
                field.id
            );
        }
    }
}

#[rstest]
#[case("Article", "image", true)]
#[case("FAQPage", "mainEntity", true)]
#[case("Organization", "address", false)]
#[case("Product", "offers", true)]
#[case("ClaimReview", "itemReviewed", false)]
#[case("Dataset", "distribution", true)]
#[case("ItemList", "itemListElement", true)]
#[case("Occupation", "estimatedSalary", true)]
#[case("Quiz", "hasPart", true)]
fn cloneability(#[case] type_name: &str, #[case] field_id: &str, #[case] cloneable: bool) {
    let catalog = Catalog::builtin();
    let field = catalog
        .field_definitions(type_name)
        .iter()
        .find(|field| field.id == field_id)
        .unwrap_or_else(|| panic!("{type_name}.{field_id} missing"));
    assert_eq!(field.cloneable, cloneable);
}

#[test]
fn menu_lists_each_type_once() {
    let catalog = Catalog::builtin();
    let mut seen = HashSet::new();
    for group in catalog.schema_type_menu() {
        for type_name in group.options.keys() {
            assert!(seen.insert(type_name.clone()), "{type_name} listed twice");
        }
    }
    assert_eq!(seen.len(), catalog.type_names().count());
}
