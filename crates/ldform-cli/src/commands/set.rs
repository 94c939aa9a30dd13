use ldform_store::KeyValueStore;
use serde_json::{Value, json};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SetArgs;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ldf set`.
pub fn handle<B: KeyValueStore>(
    args: &SetArgs,
    ctx: &mut AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = parse_value(&args.value, args.json)?;
    run(&args.id, &args.path, value.clone(), ctx)?;
    ctx.save()?;
    output(
        &json!({ "id": args.id, "path": args.path, "value": value }),
        flags.format,
    )
}

pub fn run<B: KeyValueStore>(
    id: &str,
    path: &str,
    value: Value,
    ctx: &mut AppContext<B>,
) -> anyhow::Result<()> {
    ctx.instance(id)?;
    ctx.workspace
        .store_mut()
        .update(id, path, value)
        .map_err(|error| anyhow::anyhow!("cannot write '{path}': {error}"))?;
    tracing::debug!(id, path, "updated value");
    Ok(())
}

#[cfg(test)]
mod tests {
    use ldform_config::LdformConfig;
    use ldform_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::run;
    use crate::commands::new;
    use crate::context::AppContext;

    #[test]
    fn label_writes_refresh_the_index() {
        let mut ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        let id = new::run("Article", None, &mut ctx).expect("new").id;

        run(&id, "fields._label", json!("Launch post"), &mut ctx).expect("set");
        assert_eq!(ctx.workspace.store().labels().get(&id), Some("Launch post"));
    }

    #[test]
    fn nested_paths_create_objects() {
        let mut ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        let id = new::run("Article", None, &mut ctx).expect("new").id;

        run(&id, "fields.author.name", json!("Ada"), &mut ctx).expect("set");
        assert_eq!(
            ctx.workspace.store().get(&id, "fields.author"),
            Some(json!({ "name": "Ada" }))
        );
    }

    #[test]
    fn paths_outside_the_instance_fail() {
        let mut ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        let id = new::run("Article", None, &mut ctx).expect("new").id;

        let err = run(&id, "other.thing", json!(1), &mut ctx).expect_err("bad path");
        assert!(err.to_string().contains("cannot write 'other.thing'"));
        assert!(run("sch-missing", "fields.name", json!("x"), &mut ctx).is_err());
    }
}
