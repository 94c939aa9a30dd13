//! Descriptor fragments shared by several schema types.
//!
//! Each function returns a fresh descriptor so callers can refine it
//! (`common::name().required().tooltip("...")`).

use ldform_core::FieldDescriptor;
use serde_json::json;

const GOOGLE_DOCS: &str = "https://developers.google.com/search/docs/appearance/structured-data";

/// Invisible link to the search-engine documentation page for a feature.
pub fn google_docs(slug: &str) -> FieldDescriptor {
    FieldDescriptor::docs_link(format!("{GOOGLE_DOCS}/{slug}"))
        .label("Google documentation")
        .invisible()
}

/// Invisible link to the schema.org page of a type.
pub fn schema_docs(type_name: &str) -> FieldDescriptor {
    FieldDescriptor::docs_link(format!("https://schema.org/{type_name}"))
        .label("Schema.org documentation")
        .invisible()
}

/// A group whose first sub-field pins the nested object's `@type`.
pub fn typed_group(
    id: &str,
    label: &str,
    type_name: &str,
    sub_fields: Vec<FieldDescriptor>,
) -> FieldDescriptor {
    let mut fields = Vec::with_capacity(sub_fields.len() + 1);
    fields.push(FieldDescriptor::hidden("@type", type_name));
    fields.extend(sub_fields);
    FieldDescriptor::group(id, fields).label(label)
}

pub fn id() -> FieldDescriptor {
    FieldDescriptor::text("@id")
        .label("ID")
        .tooltip("A unique identifier for the item. Defaults to the schema id.")
        .placeholder("#identifier")
}

/// `@type` chooser for types with common subtypes.
pub fn subtype(default: &str, options: serde_json::Value) -> FieldDescriptor {
    FieldDescriptor::select("@type", options)
        .label("Type")
        .required()
        .default_text(default)
}

pub fn name() -> FieldDescriptor {
    FieldDescriptor::text("name")
        .label("Name")
        .tooltip("The name of the item.")
}

pub fn description() -> FieldDescriptor {
    FieldDescriptor::textarea("description")
        .label("Description")
        .tooltip("A description of the item.")
        .rows(3)
}

pub fn url() -> FieldDescriptor {
    FieldDescriptor::text("url")
        .label("URL")
        .tooltip("URL of the item.")
}

pub fn image() -> FieldDescriptor {
    FieldDescriptor::image("image")
        .label("Image")
        .tooltip("An image of the item.")
        .cloneable()
        .clone_item_heading("Image")
}

pub fn headline() -> FieldDescriptor {
    FieldDescriptor::text("headline")
        .label("Headline")
        .tooltip("Headline of the article.")
        .default_text("{{ post.title }}")
}

pub fn word_count() -> FieldDescriptor {
    FieldDescriptor::text("wordCount")
        .label("Word count")
        .tooltip("The number of words in the text of the article.")
}

pub fn in_language() -> FieldDescriptor {
    FieldDescriptor::text("inLanguage")
        .label("In language")
        .tooltip("The language of the content, as an IETF BCP 47 code.")
        .placeholder("en")
}

pub fn keywords() -> FieldDescriptor {
    FieldDescriptor::text("keywords")
        .label("Keywords")
        .tooltip("Keywords or tags used to describe this content.")
}

pub fn date_published() -> FieldDescriptor {
    FieldDescriptor::date("datePublished")
        .label("Date published")
        .tooltip("Date of first publication.")
        .default_text("{{ post.date }}")
}

pub fn date_modified() -> FieldDescriptor {
    FieldDescriptor::date("dateModified")
        .label("Date modified")
        .tooltip("The date on which the item was most recently modified.")
        .default_text("{{ post.modified }}")
}

pub fn same_as() -> FieldDescriptor {
    FieldDescriptor::text("sameAs")
        .label("Same as")
        .tooltip("URL of a reference page that unambiguously indicates the item's identity.")
        .cloneable()
}

pub fn author() -> FieldDescriptor {
    typed_group(
        "author",
        "Author",
        "Person",
        vec![
            FieldDescriptor::text("name")
                .label("Name")
                .required()
                .default_text("{{ author.name }}"),
            FieldDescriptor::text("url").label("URL"),
        ],
    )
    .tooltip("The author of this content.")
}

pub fn publisher() -> FieldDescriptor {
    typed_group(
        "publisher",
        "Publisher",
        "Organization",
        vec![
            FieldDescriptor::text("name")
                .label("Name")
                .required()
                .default_text("{{ site.name }}"),
            FieldDescriptor::image("logo")
                .label("Logo")
                .default_text("{{ site.logo }}"),
        ],
    )
    .tooltip("The publisher of the content.")
}

pub fn main_entity_of_page() -> FieldDescriptor {
    typed_group(
        "mainEntityOfPage",
        "Main entity of page",
        "WebPage",
        vec![
            FieldDescriptor::text("@id")
                .label("Page URL")
                .required()
                .default_text("{{ post.url }}"),
        ],
    )
    .tooltip("Indicates a page for which this thing is the main entity being described.")
    .suppress_group_label()
}

pub fn about() -> FieldDescriptor {
    typed_group(
        "about",
        "About",
        "Thing",
        vec![FieldDescriptor::text("name").label("Name").required()],
    )
    .tooltip("The subject matter of the content.")
}

pub fn mentions() -> FieldDescriptor {
    typed_group(
        "mentions",
        "Mentions",
        "Thing",
        vec![FieldDescriptor::text("name").label("Name").required()],
    )
    .tooltip("Indicates that the content mentions the topic.")
    .cloneable()
    .clone_item_heading("Mention")
}

pub fn postal_address() -> FieldDescriptor {
    typed_group(
        "address",
        "Address",
        "PostalAddress",
        vec![
            FieldDescriptor::text("streetAddress").label("Street address"),
            FieldDescriptor::text("addressLocality").label("City"),
            FieldDescriptor::text("addressRegion").label("State/Region"),
            FieldDescriptor::text("postalCode").label("Postal code"),
            FieldDescriptor::text("addressCountry").label("Country"),
        ],
    )
    .tooltip("Physical address of the item.")
}

pub fn availability() -> FieldDescriptor {
    FieldDescriptor::data_list(
        "availability",
        json!([
            { "value": "https://schema.org/InStock", "label": "In stock" },
            { "value": "https://schema.org/OutOfStock", "label": "Out of stock" },
            { "value": "https://schema.org/PreOrder", "label": "Pre-order" },
            { "value": "https://schema.org/SoldOut", "label": "Sold out" },
            { "value": "https://schema.org/Discontinued", "label": "Discontinued" },
        ]),
    )
    .label("Availability")
    .default_text("https://schema.org/InStock")
}

/// A cloneable list of offers.
pub fn offers() -> FieldDescriptor {
    typed_group(
        "offers",
        "Offers",
        "Offer",
        vec![
            FieldDescriptor::text("price")
                .label("Price")
                .required()
                .tooltip("The offer price."),
            FieldDescriptor::text("priceCurrency")
                .label("Price currency")
                .required()
                .default_text("USD"),
            FieldDescriptor::text("url").label("URL"),
            availability(),
        ],
    )
    .tooltip("An offer to provide this item.")
    .cloneable()
    .clone_item_heading("Offer")
}

pub fn person(id: &str, label: &str) -> FieldDescriptor {
    typed_group(
        id,
        label,
        "Person",
        vec![
            FieldDescriptor::text("name").label("Name").required(),
            FieldDescriptor::text("url").label("URL"),
        ],
    )
}

pub fn organization(id: &str, label: &str) -> FieldDescriptor {
    typed_group(
        id,
        label,
        "Organization",
        vec![
            FieldDescriptor::text("name").label("Name").required(),
            FieldDescriptor::text("url").label("URL"),
        ],
    )
}

pub fn aggregate_rating() -> FieldDescriptor {
    typed_group(
        "aggregateRating",
        "Aggregate rating",
        "AggregateRating",
        vec![
            FieldDescriptor::text("ratingValue").label("Rating value").required(),
            FieldDescriptor::text("ratingCount").label("Rating count"),
            FieldDescriptor::text("bestRating").label("Best rating").placeholder("5"),
        ],
    )
    .tooltip("The overall rating, based on a collection of reviews or ratings.")
}
