use ldform_core::SchemaInstance;
use ldform_store::KeyValueStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ShowResponse<'a> {
    id: &'a str,
    label: String,
    #[serde(flatten)]
    instance: &'a SchemaInstance,
}

/// Handle `ldf show`.
pub fn handle<B: KeyValueStore>(
    args: &IdArgs,
    ctx: &AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let instance = ctx.instance(&args.id)?;
    output(
        &ShowResponse {
            id: &args.id,
            label: instance.label(),
            instance,
        },
        flags.format,
    )
}
