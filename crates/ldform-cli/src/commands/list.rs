use ldform_store::KeyValueStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SchemaRow<'a> {
    id: &'a str,
    label: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    schemas: Vec<SchemaRow<'a>>,
}

/// Handle `ldf list`.
pub fn handle<B: KeyValueStore>(ctx: &AppContext<B>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = ctx.workspace.store();
    let schemas = store
        .labels()
        .iter()
        .map(|(id, label)| SchemaRow {
            id,
            label,
            type_name: store
                .instance(id)
                .map_or("-", |instance| instance.type_name.as_str()),
        })
        .collect();
    output(&ListResponse { schemas }, flags.format)
}
