//! Built-in descriptor tables, one module per menu section.

use indexmap::IndexMap;
use ldform_core::FieldDescriptor;

mod business;
mod content;
mod events;
mod media;
mod other;
mod website;

/// `type name -> ordered descriptors`.
pub type Definitions = IndexMap<String, Vec<FieldDescriptor>>;

/// Every built-in type's descriptors.
#[must_use]
pub fn definitions() -> Definitions {
    let mut defs = Definitions::new();
    content::register(&mut defs);
    business::register(&mut defs);
    events::register(&mut defs);
    media::register(&mut defs);
    website::register(&mut defs);
    other::register(&mut defs);
    defs
}

fn define(defs: &mut Definitions, type_name: &str, fields: Vec<FieldDescriptor>) {
    defs.insert(type_name.to_string(), fields);
}
