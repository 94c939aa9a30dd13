use ldform_store::KeyValueStore;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ldf delete`. Deleting an unknown id changes nothing.
pub fn handle<B: KeyValueStore>(
    args: &IdArgs,
    ctx: &mut AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let removed = ctx.workspace.store_mut().remove_instance(&args.id);
    match &removed {
        Some(instance) => {
            ctx.save()?;
            tracing::info!(id = %args.id, type_name = %instance.type_name, "deleted schema");
        }
        None => tracing::warn!(id = %args.id, "no schema to delete"),
    }
    output(
        &json!({ "id": args.id, "deleted": removed.is_some() }),
        flags.format,
    )
}
