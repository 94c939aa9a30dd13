use anyhow::Context;
use ldform_schema::SchemaRegistry;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `ldf schema`. Without a name, lists the registered schemas.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = args.name.as_deref() else {
        return output(&json!({ "schemas": registry.list() }), flags.format);
    };

    let schema = registry.get(name).with_context(|| {
        format!(
            "unknown schema '{name}'; registered: {}",
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
