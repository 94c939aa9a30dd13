use ldform_store::KeyValueStore;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ldf reset`. Also the way out of a degraded workspace.
pub fn handle<B: KeyValueStore>(ctx: &mut AppContext<B>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let was_degraded = ctx.workspace.is_degraded();
    ctx.workspace.reset(&ctx.catalog)?;
    tracing::info!(was_degraded, "workspace reset");
    output(
        &json!({ "schemas": ctx.workspace.store().len(), "was_degraded": was_degraded }),
        flags.format,
    )
}
