use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use ldform_store::KeyValueStore;
use ldform_store::transfer::write_export;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ldf export`.
pub fn handle<B: KeyValueStore>(
    args: &ExportArgs,
    ctx: &AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.export.dir));
    let path = run(&dir, ctx)?;
    output(
        &json!({ "path": path, "count": ctx.workspace.store().len() }),
        flags.format,
    )
}

/// Write today's export file into `dir`.
pub fn run<B: KeyValueStore>(dir: &Path, ctx: &AppContext<B>) -> anyhow::Result<PathBuf> {
    write_export(
        dir,
        ctx.workspace.store().instances(),
        Local::now().date_naive(),
    )
    .with_context(|| format!("failed to export schemas to {}", dir.display()))
}
