use ldform_store::KeyValueStore;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle<B: KeyValueStore>(
    id: &str,
    field: &str,
    index: usize,
    ctx: &mut AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let removed = run(id, field, index, ctx)?;
    ctx.save()?;
    output(
        &json!({ "id": id, "field": field, "removed": removed }),
        flags.format,
    )
}

/// Remove the entry at `index`, returning it.
pub fn run<B: KeyValueStore>(
    id: &str,
    field: &str,
    index: usize,
    ctx: &mut AppContext<B>,
) -> anyhow::Result<serde_json::Value> {
    let address = super::cloneable_address(ctx, id, field)?;
    let removed = ctx
        .workspace
        .store_mut()
        .remove_entry(id, &address, index)?
        .ok_or_else(|| anyhow::anyhow!("'{field}' has no entry {index}"))?;
    tracing::debug!(id, field, index, "removed entry");
    Ok(removed)
}
