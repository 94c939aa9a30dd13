use ldform_render::{PREVIEW_PLACEHOLDER, RenderError};
use ldform_store::KeyValueStore;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::context::AppContext;
use crate::output::{output, output_text};

/// Handle `ldf render`. A document that fails to render prints the
/// preview placeholder instead and the command still succeeds.
pub fn handle<B: KeyValueStore>(
    args: &RenderArgs,
    ctx: &AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match run(args.id.as_deref(), ctx)? {
        Ok(document) => output(&document, flags.format),
        Err(error) => {
            tracing::warn!(%error, "failed to render JSON-LD");
            output_text(PREVIEW_PLACEHOLDER);
            Ok(())
        }
    }
}

/// One document, or an array of all of them in store order.
///
/// The outer error is a lookup failure; the inner one a render failure.
pub fn run<B: KeyValueStore>(
    id: Option<&str>,
    ctx: &AppContext<B>,
) -> anyhow::Result<Result<Value, RenderError>> {
    let rendered = match id {
        Some(id) => ctx
            .renderer
            .render(id, ctx.instance(id)?)
            .map(Value::Object),
        None => ctx
            .renderer
            .render_all(ctx.workspace.store().instances())
            .map(|documents| Value::Array(documents.into_iter().map(Value::Object).collect())),
    };
    Ok(rendered)
}
