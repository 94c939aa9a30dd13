use ldform_store::KeyValueStore;
use serde_json::{Value, json};

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::find_descriptor;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output;

pub fn handle<B: KeyValueStore>(
    id: &str,
    field: &str,
    value: Option<&str>,
    ctx: &mut AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = value.map(|raw| parse_value(raw, true)).transpose()?;
    let index = run(id, field, value, ctx)?;
    ctx.save()?;
    output(&json!({ "id": id, "field": field, "index": index }), flags.format)
}

/// Append an entry and return its index. Without a value the entry is
/// seeded from the field's descriptor.
pub fn run<B: KeyValueStore>(
    id: &str,
    field: &str,
    value: Option<Value>,
    ctx: &mut AppContext<B>,
) -> anyhow::Result<usize> {
    let address = super::cloneable_address(ctx, id, field)?;
    let seed = match value {
        Some(value) => value,
        None => {
            let type_name = &ctx.instance(id)?.type_name;
            find_descriptor(ctx.catalog.field_definitions(type_name), field)
                .map(ldform_core::FieldDescriptor::entry_seed)
                .unwrap_or_else(|| Value::String(String::new()))
        }
    };

    let index = ctx
        .workspace
        .store_mut()
        .add_entry(id, &address, seed)?
        .ok_or_else(|| anyhow::anyhow!("no schema with id '{id}'"))?;
    tracing::debug!(id, field, index, "added entry");
    Ok(index)
}
