use ldform_store::KeyValueStore;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ldf get`. Unset paths print `null`.
pub fn handle<B: KeyValueStore>(
    args: &GetArgs,
    ctx: &AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.instance(&args.id)?;
    let value = ctx
        .workspace
        .store()
        .get(&args.id, &args.path)
        .unwrap_or(Value::Null);
    output(&value, flags.format)
}
