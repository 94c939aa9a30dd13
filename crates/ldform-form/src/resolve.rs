//! Descriptor list + value tree -> render plan.
//!
//! One pass over the descriptors in declaration order. Invisible descriptors
//! emit nothing; every other descriptor emits according to its
//! [`FieldShape`]:
//!
//! - `Cloneable`: one entry per array element (at least one), each resolved
//!   against the field's non-cloneable entry descriptor
//! - `Group`: the sub-fields against the nested object, titled or inline
//! - `Leaf`: a single control
//!
//! Values are read, never written. Whatever the form shows but the tree does
//! not hold yet (default entries, a group's hidden `@type`) is recorded as a
//! seed on the write-back address so the first edit stores it too.

use ldform_core::edit::coerce_entries;
use ldform_core::{ControlKind, FieldDescriptor, FieldOptions, FieldShape, WriteBack};
use serde_json::{Map, Value};

use crate::plan::{CloneEntry, Leaf, RenderNode, RenderPlan};

/// Root of every write-back address.
const FIELDS_ROOT: &str = "fields";

const DEFAULT_GROUP_TITLE: &str = "Group";
const DEFAULT_ENTRY_HEADING: &str = "Item";

/// Resolve `descriptors` against an instance's `fields` tree.
#[must_use]
pub fn resolve(schema_id: &str, descriptors: &[FieldDescriptor], tree: &Value) -> RenderPlan {
    let mut plan = RenderPlan::new();
    Resolver { schema_id }.fields(descriptors, tree, &WriteBack::new(FIELDS_ROOT), &mut plan);
    plan
}

struct Resolver<'a> {
    schema_id: &'a str,
}

impl Resolver<'_> {
    fn fields(
        &self,
        descriptors: &[FieldDescriptor],
        tree: &Value,
        base: &WriteBack,
        plan: &mut RenderPlan,
    ) {
        for field in descriptors.iter().filter(|field| field.visible) {
            let stored = tree.get(field.id.as_str()).filter(|value| !value.is_null());
            self.field(field, stored, base.child(&field.id), plan);
        }
    }

    fn field(
        &self,
        field: &FieldDescriptor,
        stored: Option<&Value>,
        address: WriteBack,
        plan: &mut RenderPlan,
    ) {
        match field.shape() {
            FieldShape::Cloneable => plan.push(self.cloneable(field, stored, address)),
            FieldShape::Group { sub_fields, titled } => {
                let empty = Value::Object(Map::new());
                let (tree, address) = match stored {
                    Some(object) if object.is_object() => (object, address),
                    _ => (&empty, seed_hidden_defaults(field, address)),
                };
                if titled {
                    let mut children = RenderPlan::new();
                    self.fields(sub_fields, tree, &address, &mut children);
                    plan.push(RenderNode::Group {
                        label: field
                            .label
                            .clone()
                            .filter(|label| !label.is_empty())
                            .unwrap_or_else(|| DEFAULT_GROUP_TITLE.to_string()),
                        children,
                    });
                } else {
                    self.fields(sub_fields, tree, &address, plan);
                }
            }
            FieldShape::Leaf(control) => {
                plan.push(RenderNode::Leaf(self.leaf(field, control, stored, address)));
            }
        }
    }

    fn cloneable(
        &self,
        field: &FieldDescriptor,
        stored: Option<&Value>,
        address: WriteBack,
    ) -> RenderNode {
        let displayed = stored.cloned().or_else(|| field.default_value());
        let mut items = displayed.map(coerce_entries).unwrap_or_default();
        let placeholder = items.is_empty();
        if placeholder {
            items.push(field.entry_seed());
        }

        let address = if stored.is_some_and(Value::is_array) {
            address
        } else {
            address.seeded(Value::Array(items.clone()))
        };

        let entry_descriptor = field.entry_descriptor();
        let heading = field
            .clone_item_heading
            .as_deref()
            .or(field.label.as_deref())
            .filter(|heading| !heading.is_empty())
            .unwrap_or(DEFAULT_ENTRY_HEADING);
        let count = items.len();

        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| CloneEntry {
                key: format!("{}-{}-{index}", self.schema_id, field.id),
                index,
                heading: if count > 1 {
                    format!("{heading} #{}", index + 1)
                } else {
                    heading.to_string()
                },
                placeholder,
                children: self.entry(&entry_descriptor, item, address.child(&index.to_string())),
            })
            .collect();

        RenderNode::Cloneable {
            id: field.id.clone(),
            label: field.display_name().to_string(),
            address,
            entries,
        }
    }

    /// Controls of one cloneable entry. A group entry is its own container,
    /// so its sub-fields are emitted directly.
    fn entry(&self, descriptor: &FieldDescriptor, item: &Value, address: WriteBack) -> RenderPlan {
        let mut plan = RenderPlan::new();
        if descriptor.control == ControlKind::Group {
            let (tree, address) = if item.is_object() {
                (item.clone(), address)
            } else {
                (
                    Value::Object(Map::new()),
                    address.seeded(descriptor.entry_seed()),
                )
            };
            self.fields(&descriptor.sub_fields, &tree, &address, &mut plan);
        } else {
            let stored = Some(item).filter(|value| !value.is_null());
            plan.push(RenderNode::Leaf(self.leaf(
                descriptor,
                descriptor.control,
                stored,
                address,
            )));
        }
        plan
    }

    fn leaf(
        &self,
        field: &FieldDescriptor,
        control: ControlKind,
        stored: Option<&Value>,
        address: WriteBack,
    ) -> Leaf {
        let value = stored
            .cloned()
            .or_else(|| field.default_value())
            .unwrap_or(Value::Null);

        let options = control.takes_options().then(|| {
            let options = field
                .options
                .as_ref()
                .map_or(FieldOptions::Unrecognized, FieldOptions::classify);
            if options.is_empty() {
                tracing::debug!(field = %field.id, "no usable options");
            }
            options
        });

        let path = address
            .path
            .strip_prefix(FIELDS_ROOT)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&address.path);

        Leaf {
            key: format!("field-{}-{path}", self.schema_id),
            id: field.id.clone(),
            control,
            label: field.label.clone().filter(|label| !label.is_empty()),
            tooltip: field.tooltip.clone(),
            placeholder: field.placeholder.clone(),
            description: field.description.clone(),
            required: field.required,
            value,
            options,
            url: field.url.clone(),
            rows: field.rows,
            write_back: address,
        }
    }
}

/// Seed a group's hidden defaults when nothing is stored for it yet.
fn seed_hidden_defaults(field: &FieldDescriptor, address: WriteBack) -> WriteBack {
    let defaults = field.hidden_defaults();
    if defaults.is_empty() {
        address
    } else {
        address.seeded(Value::Object(defaults))
    }
}
