use ldform_core::FieldDescriptor;
use ldform_store::KeyValueStore;
use serde::Serialize;

use crate::cli::root_commands::FieldsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FieldsResponse<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<&'a str>,
    fields: &'a [FieldDescriptor],
}

#[derive(Debug, Serialize)]
struct FieldRow<'a> {
    id: &'a str,
    control: &'static str,
    label: &'a str,
    required: bool,
    group: &'a str,
}

/// Handle `ldf fields`. Unknown types have no fields.
pub fn handle<B: KeyValueStore>(
    args: &FieldsArgs,
    ctx: &AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fields = ctx.catalog.field_definitions(&args.type_name);
    if fields.is_empty() {
        tracing::warn!(type_name = %args.type_name, "no field definitions for type");
    }

    if flags.format == OutputFormat::Table {
        let rows: Vec<FieldRow<'_>> = fields
            .iter()
            .map(|field| FieldRow {
                id: &field.id,
                control: field.control.as_str(),
                label: field.display_name(),
                required: field.required,
                group: field.group_name(),
            })
            .collect();
        return output(&rows, flags.format);
    }

    output(
        &FieldsResponse {
            type_name: &args.type_name,
            documentation: ctx.catalog.documentation_url(&args.type_name),
            fields,
        },
        flags.format,
    )
}
