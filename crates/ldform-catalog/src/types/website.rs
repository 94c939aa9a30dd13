use ldform_core::FieldDescriptor;
use serde_json::json;

use super::{Definitions, define};
use crate::common;

pub(super) fn register(defs: &mut Definitions) {
    define(defs, "WebSite", web_site());
    define(defs, "WebPage", web_page());
    define(defs, "SearchAction", search_action());
    define(defs, "BreadcrumbList", breadcrumb_list());
}

fn web_site() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("WebSite"),
        common::id(),
        common::name()
            .required()
            .tooltip("The name of the website."),
        FieldDescriptor::text("alternateName").label("Alternate name"),
        common::url().required().default_text("{{ site.url }}"),
        common::description().tooltip("A description of the website."),
        FieldDescriptor::text("abstract")
            .label("Abstract")
            .tooltip("A short description that summarizes the website."),
        FieldDescriptor::text("author")
            .label("Author")
            .tooltip("The author of the website."),
        common::typed_group(
            "about",
            "About",
            "Thing",
            vec![
                FieldDescriptor::text("name").label("Name").required(),
                common::description(),
                common::url(),
            ],
        )
        .tooltip("The subject matter of the content."),
        common::typed_group(
            "potentialAction",
            "Site search",
            "SearchAction",
            vec![
                FieldDescriptor::text("target")
                    .label("Target")
                    .required()
                    .default_text("{{ site.url }}/search?q={search_term_string}"),
                FieldDescriptor::hidden("query-input", "required name=search_term_string"),
            ],
        )
        .tooltip("Enables a sitelinks search box for the website."),
    ]
}

fn web_page() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("WebPage"),
        common::subtype(
            "WebPage",
            json!({
                "WebPage": "General web page",
                "AboutPage": "About page",
                "CheckoutPage": "Checkout page",
                "CollectionPage": "Collection page",
                "ContactPage": "Contact page",
                "ItemPage": "Item page",
                "MedicalWebPage": "Medical web page",
                "ProfilePage": "Profile page",
                "QAPage": "QA page",
                "RealEstateListing": "Real estate listing",
                "SearchResultsPage": "Search results",
            }),
        ),
        common::name()
            .required()
            .tooltip("The name of the webpage.")
            .default_text("{{ current.title }}"),
        common::description()
            .tooltip("The description of the webpage.")
            .default_text("{{ current.description }}"),
        common::url().required().default_text("{{ current.url }}"),
        FieldDescriptor::text("mainEntity")
            .label("Main entity")
            .tooltip("Indicates the primary entity described in the page."),
        common::in_language(),
        common::date_modified(),
    ]
}

fn search_action() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("SearchAction"),
        FieldDescriptor::text("target")
            .label("Target")
            .tooltip("URL template with a placeholder for the search term.")
            .required()
            .default_text("{{ site.url }}/search?q={search_term_string}"),
        FieldDescriptor::text("query-input")
            .label("Query input")
            .required()
            .default_text("required name=search_term_string"),
    ]
}

fn breadcrumb_list() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("breadcrumb"),
        common::typed_group(
            "itemListElement",
            "Breadcrumbs",
            "ListItem",
            vec![
                FieldDescriptor::text("position").label("Position").required(),
                FieldDescriptor::text("name").label("Name").required(),
                FieldDescriptor::text("item").label("URL"),
            ],
        )
        .required()
        .cloneable()
        .clone_item_heading("Breadcrumb"),
    ]
}
