//! Instances present in a fresh workspace.
//!
//! Values are template placeholders for the host CMS; they are stored and
//! rendered verbatim.

use ldform_core::{InstanceMap, SchemaInstance};
use serde_json::json;

#[must_use]
pub fn default_instances() -> InstanceMap {
    let mut instances = InstanceMap::new();
    instances.insert(
        "website_schema".to_string(),
        SchemaInstance {
            type_name: "WebSite".to_string(),
            fields: json!({
                "_label": "Website Schema",
                "name": "{{ site.name }}",
                "url": "{{ site.url }}",
                "description": "{{ site.description }}",
            }),
        },
    );
    instances.insert(
        "organization_schema".to_string(),
        SchemaInstance {
            type_name: "Organization".to_string(),
            fields: json!({
                "_label": "Organization Schema",
                "name": "{{ site.name }}",
                "url": "{{ site.url }}",
                "logo": "{{ site.logo }}",
            }),
        },
    );
    instances
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldform_catalog::Catalog;

    #[test]
    fn seeds_use_catalog_types() {
        let catalog = Catalog::builtin();
        for (id, instance) in default_instances() {
            assert!(catalog.contains(&instance.type_name), "{id}");
            assert!(instance.label().ends_with("Schema"));
        }
    }
}
