use ldform_core::SchemaInstance;
use ldform_store::KeyValueStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NewArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct NewResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub label: String,
}

/// Handle `ldf new`.
pub fn handle<B: KeyValueStore>(
    args: &NewArgs,
    ctx: &mut AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = run(&args.type_name, args.label.as_deref(), ctx)?;
    ctx.save()?;
    output(&response, flags.format)
}

pub fn run<B: KeyValueStore>(
    type_name: &str,
    label: Option<&str>,
    ctx: &mut AppContext<B>,
) -> anyhow::Result<NewResponse> {
    if !ctx.catalog.contains(type_name) {
        anyhow::bail!("unknown schema type '{type_name}' (see 'ldf types')");
    }

    let label = match label {
        Some(label) => label.to_string(),
        None => {
            let menu = ctx.workspace.menu(&ctx.catalog);
            menu.iter()
                .find_map(|group| group.options.get(type_name))
                .cloned()
                .unwrap_or_else(|| type_name.to_string())
        }
    };

    let id = ctx
        .workspace
        .store_mut()
        .add_instance(SchemaInstance::new(type_name, label.clone()))?;
    tracing::info!(%id, type_name, "added schema");

    Ok(NewResponse {
        id,
        type_name: type_name.to_string(),
        label,
    })
}
