use std::path::Path;

use anyhow::Context;
use ldform_store::transfer::read_import;
use ldform_store::{ImportSummary, KeyValueStore};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ldf import`.
pub fn handle<B: KeyValueStore>(
    args: &ImportArgs,
    ctx: &mut AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let summary = run(&args.file, ctx)?;
    ctx.save()?;
    output(&summary, flags.format)
}

/// Merge an export file. Nothing is merged unless every entry is valid.
pub fn run<B: KeyValueStore>(path: &Path, ctx: &mut AppContext<B>) -> anyhow::Result<ImportSummary> {
    let imported = read_import(path, &ctx.registry)
        .with_context(|| format!("failed to import {}", path.display()))?;
    let summary = ctx.workspace.store_mut().import_instances(imported);
    tracing::info!(
        imported = summary.imported,
        overwritten = summary.overwritten.len(),
        "imported schemas"
    );
    Ok(summary)
}
