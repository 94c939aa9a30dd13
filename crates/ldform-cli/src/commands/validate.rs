use ldform_form::{ValidationReport, summary, validate};
use ldform_store::KeyValueStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub id: String,
    pub summary: String,
    #[serde(flatten)]
    pub report: ValidationReport,
}

/// Handle `ldf validate`. Validation is advisory: a report with errors is
/// still a successful command.
pub fn handle<B: KeyValueStore>(
    args: &IdArgs,
    ctx: &AppContext<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&run(&args.id, ctx)?, flags.format)
}

pub fn run<B: KeyValueStore>(id: &str, ctx: &AppContext<B>) -> anyhow::Result<ValidateResponse> {
    let instance = ctx.instance(id)?;
    let report = validate(instance, ctx.catalog.field_definitions(&instance.type_name));
    Ok(ValidateResponse {
        id: id.to_string(),
        summary: summary(&report.errors),
        report,
    })
}

#[cfg(test)]
mod tests {
    use ldform_config::LdformConfig;
    use ldform_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::run;
    use crate::commands::{new, set};
    use crate::context::AppContext;

    #[test]
    fn fresh_faq_reports_missing_fields() {
        let mut ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        let id = new::run("FAQPage", None, &mut ctx).expect("new").id;

        let response = run(&id, &ctx).expect("validate");
        assert!(!response.report.valid);
        assert_eq!(response.summary, "2 required fields are missing");

        set::run(&id, "fields.name", json!("Help"), &mut ctx).expect("set");
        let response = run(&id, &ctx).expect("validate");
        assert_eq!(response.summary, "Questions is required");
    }

    #[test]
    fn complete_faq_serializes_a_flat_report() {
        let mut ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        let id = new::run("FAQPage", None, &mut ctx).expect("new").id;
        set::run(&id, "fields.name", json!("Help"), &mut ctx).expect("set");
        set::run(
            &id,
            "fields.mainEntity",
            json!([{
                "@type": "Question",
                "name": "Is it free?",
                "acceptedAnswer": { "@type": "Answer", "text": "Yes." }
            }]),
            &mut ctx,
        )
        .expect("set");

        let value = serde_json::to_value(run(&id, &ctx).expect("validate")).expect("json");
        assert_eq!(
            value,
            json!({ "id": id, "summary": "", "valid": true, "errors": [] })
        );
    }
}
