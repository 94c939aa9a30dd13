mod add;
mod remove;

use ldform_core::WriteBack;
use ldform_form::resolve;
use ldform_store::KeyValueStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntryCommands;
use crate::commands::shared::lookup::find_cloneable;
use crate::context::AppContext;

/// Handle `ldf entry`.
pub fn handle<B: KeyValueStore>(
    action: &EntryCommands,
    ctx: &mut AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EntryCommands::Add { id, field, value } => add::handle(id, field, value.as_deref(), ctx, flags),
        EntryCommands::Remove { id, field, index } => remove::handle(id, field, *index, ctx, flags),
    }
}

/// Address of a cloneable field as the form currently shows it.
fn cloneable_address<B: KeyValueStore>(
    ctx: &AppContext<B>,
    id: &str,
    field: &str,
) -> anyhow::Result<WriteBack> {
    let instance = ctx.instance(id)?;
    let plan = resolve(
        id,
        ctx.catalog.field_definitions(&instance.type_name),
        &instance.fields,
    );
    find_cloneable(&plan, field).ok_or_else(|| {
        anyhow::anyhow!(
            "'{field}' is not a repeatable field of {} (see 'ldf fields {}')",
            instance.type_name,
            instance.type_name
        )
    })
}

#[cfg(test)]
mod tests {
    use ldform_config::LdformConfig;
    use ldform_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{add, remove};
    use crate::commands::new;
    use crate::context::AppContext;

    fn faq() -> (AppContext<MemoryStore>, String) {
        let mut ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        let id = new::run("FAQPage", None, &mut ctx).expect("new").id;
        (ctx, id)
    }

    #[test]
    fn add_seeds_entries_from_the_descriptor() {
        let (mut ctx, id) = faq();
        let index = add::run(&id, "mainEntity", None, &mut ctx).expect("add");
        assert_eq!(index, 1);
        assert_eq!(
            ctx.workspace.store().get(&id, "fields.mainEntity"),
            Some(json!([{ "@type": "Question" }, { "@type": "Question" }]))
        );
    }

    #[test]
    fn add_takes_an_explicit_value() {
        let (mut ctx, id) = faq();
        let value = json!({ "@type": "Question", "name": "Is it free?" });
        add::run(&id, "mainEntity", Some(value.clone()), &mut ctx).expect("add");
        assert_eq!(ctx.workspace.store().get(&id, "fields.mainEntity.1"), Some(value));
    }

    #[test]
    fn remove_drops_one_entry() {
        let (mut ctx, id) = faq();
        add::run(&id, "mainEntity", Some(json!({ "name": "second" })), &mut ctx).expect("add");
        let removed = remove::run(&id, "mainEntity", 0, &mut ctx).expect("remove");
        assert_eq!(removed, json!({ "@type": "Question" }));
        assert_eq!(
            ctx.workspace.store().get(&id, "fields.mainEntity"),
            Some(json!([{ "name": "second" }]))
        );

        let err = remove::run(&id, "mainEntity", 5, &mut ctx).expect_err("out of range");
        assert!(err.to_string().contains("has no entry 5"));
    }

    #[test]
    fn non_repeatable_fields_are_rejected() {
        let (mut ctx, id) = faq();
        let err = add::run(&id, "name", None, &mut ctx).expect_err("not cloneable");
        assert!(err.to_string().contains("'name' is not a repeatable field of FAQPage"));
    }
}
