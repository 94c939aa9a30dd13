use ldform_form::layout;
use ldform_store::KeyValueStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ldf form`.
pub fn handle<B: KeyValueStore>(
    args: &IdArgs,
    ctx: &AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let instance = ctx.instance(&args.id)?;
    let descriptors = ctx.catalog.field_definitions(&instance.type_name);
    output(&layout(&args.id, descriptors, &instance.fields), flags.format)
}
