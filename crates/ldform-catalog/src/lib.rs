//! # ldform-catalog
//!
//! The field-definition catalog: a read-only table mapping schema type names
//! to ordered [`FieldDescriptor`] lists, plus the grouped menu offered when
//! adding a schema.
//!
//! The catalog is built once and passed by reference to everything that
//! needs it. It is never mutated at runtime.
//!
//! ```
//! use ldform_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(!catalog.field_definitions("Article").is_empty());
//! assert!(catalog.field_definitions("NoSuchType").is_empty());
//! ```

pub mod common;
mod error;
mod menu;
pub mod types;

pub use error::CatalogError;
pub use menu::default_menu;

use ldform_core::{ControlKind, FieldDescriptor, SchemaTypeMenu};

use crate::types::Definitions;

/// Descriptor table and schema-type menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Definitions,
    menu: SchemaTypeMenu,
}

impl Catalog {
    /// Build a catalog, checking that every menu type has definitions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingDefinitions` naming each offending type.
    pub fn new(definitions: Definitions, menu: SchemaTypeMenu) -> Result<Self, CatalogError> {
        let missing: Vec<String> = menu
            .iter()
            .flat_map(|group| group.options.keys())
            .filter(|type_name| !definitions.contains_key(type_name.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(Self { definitions, menu })
        } else {
            Err(CatalogError::MissingDefinitions { types: missing })
        }
    }

    /// The built-in schema.org catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            definitions: types::definitions(),
            menu: default_menu(),
        }
    }

    /// Descriptors for a type, in display order. Empty for unknown types.
    #[must_use]
    pub fn field_definitions(&self, type_name: &str) -> &[FieldDescriptor] {
        self.definitions.get(type_name).map_or(&[], Vec::as_slice)
    }

    /// Whether the catalog has an entry for a type.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.definitions.contains_key(type_name)
    }

    /// All type names with definitions, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// The default grouped menu.
    #[must_use]
    pub fn schema_type_menu(&self) -> &SchemaTypeMenu {
        &self.menu
    }

    /// Menu label of a type (`"FAQ Page"` for `FAQPage`).
    #[must_use]
    pub fn display_label(&self, type_name: &str) -> Option<&str> {
        self.menu
            .iter()
            .find_map(|group| group.options.get(type_name))
            .map(String::as_str)
    }

    /// URL of the first documentation link declared for a type.
    #[must_use]
    pub fn documentation_url(&self, type_name: &str) -> Option<&str> {
        self.field_definitions(type_name)
            .iter()
            .filter(|field| field.control == ControlKind::DocsLink)
            .find_map(|field| field.url.as_deref())
    }

    /// Drop entries of a cached menu that this catalog cannot serve.
    ///
    /// Groups left empty are removed. Display labels and order of the
    /// surviving entries are kept as cached.
    #[must_use]
    pub fn reconcile_menu(&self, mut cached: SchemaTypeMenu) -> SchemaTypeMenu {
        for group in &mut cached {
            group.options.retain(|type_name, _| {
                let known = self.contains(type_name);
                if !known {
                    tracing::warn!(
                        group = %group.label,
                        type_name,
                        "dropping cached menu entry with no field definitions"
                    );
                }
                known
            });
        }
        cached.retain(|group| !group.options.is_empty());
        cached
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldform_core::SchemaTypeGroup;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_menu_is_covered_by_definitions() {
        let checked = Catalog::new(types::definitions(), default_menu());
        assert!(checked.is_ok(), "{:?}", checked.err());
    }

    #[test]
    fn new_reports_every_missing_type() {
        let menu = vec![
            SchemaTypeGroup::new("Extra")
                .with("Article")
                .with("MathSolver")
                .with("Quiz")
                .with("Movie"),
        ];
        let err = Catalog::new(types::definitions(), menu).unwrap_err();
        let CatalogError::MissingDefinitions { types } = err;
        assert_eq!(types, vec!["MathSolver".to_string(), "Movie".to_string()]);
    }

    #[test]
    fn unknown_type_has_no_fields() {
        let catalog = Catalog::builtin();
        assert!(catalog.field_definitions("NoSuchType").is_empty());
        assert!(catalog.documentation_url("NoSuchType").is_none());
        assert!(catalog.display_label("NoSuchType").is_none());
    }

    #[test]
    fn display_labels_come_from_menu() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.display_label("FAQPage"), Some("FAQ Page"));
        assert_eq!(catalog.display_label("Article"), Some("Article"));
        assert_eq!(catalog.display_label("ClaimReview"), Some("Fact Check"));
    }

    #[test]
    fn documentation_url_uses_first_docs_link() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.documentation_url("Organization"),
            Some("https://schema.org/Organization")
        );
        assert_eq!(
            catalog.documentation_url("Article"),
            Some("https://developers.google.com/search/docs/appearance/structured-data/article")
        );
    }

    #[test]
    fn reconcile_drops_unknown_types_and_empty_groups() {
        let catalog = Catalog::builtin();
        let cached = vec![
            SchemaTypeGroup::new("Content")
                .with_label("Article", "Blog post")
                .with("MathSolver"),
            SchemaTypeGroup::new("Legacy").with("Movie"),
        ];
        let reconciled = catalog.reconcile_menu(cached);
        assert_eq!(
            reconciled,
            vec![SchemaTypeGroup::new("Content").with_label("Article", "Blog post")]
        );
    }

    #[test]
    fn reconcile_keeps_default_menu_intact() {
        let catalog = Catalog::builtin();
        let menu = catalog.schema_type_menu().clone();
        assert_eq!(catalog.reconcile_menu(menu.clone()), menu);
    }
}
