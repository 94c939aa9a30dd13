use ldform_core::{FieldDescriptor, WriteBack};
use ldform_form::{RenderNode, RenderPlan};

/// Descriptor at a dotted field path (`author.sameAs`). Numeric segments
/// address cloneable entries and are skipped.
pub fn find_descriptor<'a>(
    descriptors: &'a [FieldDescriptor],
    field: &str,
) -> Option<&'a FieldDescriptor> {
    let mut current = descriptors;
    let mut found = None;
    for segment in field.split('.') {
        if segment.parse::<usize>().is_ok() {
            continue;
        }
        let descriptor = current.iter().find(|candidate| candidate.id == segment)?;
        current = &descriptor.sub_fields;
        found = Some(descriptor);
    }
    found
}

/// Write-back address of the cloneable control for `field`.
pub fn find_cloneable(plan: &RenderPlan, field: &str) -> Option<WriteBack> {
    let path = format!("fields.{field}");
    find_in(plan, &path)
}

fn find_in(plan: &RenderPlan, path: &str) -> Option<WriteBack> {
    plan.iter().find_map(|node| match node {
        RenderNode::Cloneable {
            address, entries, ..
        } => {
            if address.path == path {
                Some(address.clone())
            } else {
                entries.iter().find_map(|entry| find_in(&entry.children, path))
            }
        }
        RenderNode::Group { children, .. } => find_in(children, path),
        RenderNode::Leaf(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use ldform_catalog::Catalog;
    use ldform_form::resolve;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{find_cloneable, find_descriptor};

    #[test]
    fn descriptors_resolve_through_groups() {
        let catalog = Catalog::builtin();
        let descriptors = catalog.field_definitions("Article");
        let name = find_descriptor(descriptors, "author.name").expect("author.name");
        assert_eq!(name.id, "name");
        assert!(find_descriptor(descriptors, "author.nope").is_none());
        assert!(find_descriptor(descriptors, "").is_none());
    }

    #[test]
    fn cloneables_are_found_by_field_path() {
        let catalog = Catalog::builtin();
        let plan = resolve("a1", catalog.field_definitions("Article"), &json!({}));
        let address = find_cloneable(&plan, "image").expect("image");
        assert_eq!(address.path, "fields.image");
        assert!(find_cloneable(&plan, "headline").is_none());
    }
}
