use ldform_core::SchemaTypeMenu;
use ldform_store::KeyValueStore;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TypeRow<'a> {
    group: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
    label: &'a str,
}

/// Handle `ldf types`.
pub fn handle<B: KeyValueStore>(ctx: &AppContext<B>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let menu = ctx.workspace.menu(&ctx.catalog);
    if flags.format == OutputFormat::Table {
        return output(&rows(&menu), flags.format);
    }
    output(&menu, flags.format)
}

fn rows(menu: &SchemaTypeMenu) -> Vec<TypeRow<'_>> {
    menu.iter()
        .flat_map(|group| {
            group.options.iter().map(|(type_name, label)| TypeRow {
                group: &group.label,
                type_name,
                label,
            })
        })
        .collect()
}
