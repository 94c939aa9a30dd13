use ldform_core::FieldDescriptor;
use serde_json::json;

use super::{Definitions, define};
use crate::common;

pub(super) fn register(defs: &mut Definitions) {
    define(defs, "Organization", organization());
    define(defs, "LocalBusiness", local_business());
    define(defs, "Product", product());
    define(defs, "ProductGroup", product_group());
    define(defs, "Service", service());
    define(defs, "Offer", offer());
    define(defs, "JobPosting", job_posting());
    define(defs, "EmployerAggregateRating", employer_aggregate_rating());
    define(defs, "Occupation", occupation());
}

fn organization() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("Organization"),
        common::id(),
        common::name()
            .required()
            .tooltip("The name of the organization."),
        common::description().tooltip("A description of the organization."),
        common::url().tooltip("URL of the organization."),
        FieldDescriptor::image("logo")
            .label("Logo")
            .tooltip("An associated logo.")
            .default_text("{{ site.logo }}"),
        common::same_as(),
        FieldDescriptor::date("foundingDate")
            .label("Founding date")
            .tooltip("The date that this organization was founded."),
        common::typed_group(
            "contactPoint",
            "Contact point",
            "ContactPoint",
            vec![
                FieldDescriptor::text("telephone").label("Telephone"),
                FieldDescriptor::text("contactType")
                    .label("Contact type")
                    .placeholder("customer service"),
                FieldDescriptor::text("email").label("Email"),
            ],
        )
        .tooltip("A contact point for a person or organization.")
        .cloneable()
        .clone_item_heading("Contact point")
        .in_group("Contact"),
        common::postal_address()
            .tooltip("Physical address of the organization.")
            .in_group("Contact"),
        common::person("founder", "Founder")
            .tooltip("A person who founded this organization.")
            .cloneable()
            .clone_item_heading("Founder")
            .in_group("People"),
        common::typed_group(
            "employee",
            "Employees",
            "Person",
            vec![
                FieldDescriptor::text("name").label("Name").required(),
                FieldDescriptor::text("jobTitle").label("Job title"),
            ],
        )
        .tooltip("Someone working for this organization.")
        .cloneable()
        .clone_item_heading("Employee")
        .in_group("People"),
    ]
}

fn local_business() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("local-business"),
        common::subtype(
            "LocalBusiness",
            json!([
                { "label": "General", "options": { "LocalBusiness": "Local business", "Store": "Store" } },
                {
                    "label": "Food & drink",
                    "options": {
                        "Restaurant": "Restaurant",
                        "CafeOrCoffeeShop": "Cafe or coffee shop",
                        "Bakery": "Bakery",
                        "BarOrPub": "Bar or pub"
                    }
                },
                {
                    "label": "Services",
                    "options": {
                        "Dentist": "Dentist",
                        "HairSalon": "Hair salon",
                        "AutoRepair": "Auto repair",
                        "LegalService": "Legal service"
                    }
                }
            ]),
        ),
        common::id(),
        common::name()
            .required()
            .tooltip("The name of the business.")
            .default_text("{{ site.name }}"),
        common::image(),
        common::url(),
        FieldDescriptor::text("telephone").label("Telephone"),
        FieldDescriptor::text("priceRange")
            .label("Price range")
            .placeholder("$$"),
        common::postal_address().required(),
        common::typed_group(
            "geo",
            "Geo coordinates",
            "GeoCoordinates",
            vec![
                FieldDescriptor::text("latitude").label("Latitude").required(),
                FieldDescriptor::text("longitude").label("Longitude").required(),
            ],
        ),
        common::typed_group(
            "openingHoursSpecification",
            "Opening hours",
            "OpeningHoursSpecification",
            vec![
                FieldDescriptor::select(
                    "dayOfWeek",
                    json!({
                        "Monday": "Monday",
                        "Tuesday": "Tuesday",
                        "Wednesday": "Wednesday",
                        "Thursday": "Thursday",
                        "Friday": "Friday",
                        "Saturday": "Saturday",
                        "Sunday": "Sunday",
                    }),
                )
                .label("Day of week"),
                FieldDescriptor::text("opens").label("Opens").placeholder("09:00"),
                FieldDescriptor::text("closes").label("Closes").placeholder("17:00"),
            ],
        )
        .cloneable()
        .clone_item_heading("Opening hours"),
    ]
}

fn product() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("product"),
        common::name().required().tooltip("The name of the product."),
        common::description()
            .required()
            .tooltip("A description of the product."),
        common::image().required().tooltip("An image of the product."),
        common::typed_group(
            "brand",
            "Brand",
            "Brand",
            vec![FieldDescriptor::text("name").label("Name").required()],
        )
        .tooltip("The brand of the product."),
        FieldDescriptor::text("sku")
            .label("SKU")
            .tooltip("The Stock Keeping Unit, a merchant-specific identifier for a product or service.")
            .in_group("Identifiers"),
        FieldDescriptor::text("mpn")
            .label("MPN")
            .tooltip("The Manufacturer Part Number of the product.")
            .in_group("Identifiers"),
        FieldDescriptor::text("gtin")
            .label("GTIN")
            .tooltip("A Global Trade Item Number.")
            .in_group("Identifiers"),
        common::offers().required().in_group("Offers"),
        common::aggregate_rating().in_group("Offers"),
    ]
}

fn product_group() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("product-variants"),
        common::name().required(),
        common::description(),
        FieldDescriptor::text("productGroupID")
            .label("Product group ID")
            .required(),
        FieldDescriptor::data_list(
            "variesBy",
            json!({
                "https://schema.org/color": "Color",
                "https://schema.org/size": "Size",
                "https://schema.org/material": "Material",
                "https://schema.org/pattern": "Pattern",
            }),
        )
        .label("Varies by")
        .cloneable(),
        common::typed_group(
            "hasVariant",
            "Variants",
            "Product",
            vec![
                FieldDescriptor::text("name").label("Name").required(),
                FieldDescriptor::text("sku").label("SKU"),
                FieldDescriptor::text("color").label("Color"),
                FieldDescriptor::text("size").label("Size"),
                FieldDescriptor::image("image").label("Image"),
            ],
        )
        .cloneable()
        .clone_item_heading("Variant"),
    ]
}

fn service() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("Service"),
        common::name().required(),
        common::description(),
        FieldDescriptor::text("serviceType").label("Service type"),
        common::organization("provider", "Provider"),
        FieldDescriptor::text("areaServed").label("Area served"),
        common::offers(),
    ]
}

fn offer() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("Offer"),
        FieldDescriptor::text("price").label("Price").required(),
        FieldDescriptor::text("priceCurrency")
            .label("Price currency")
            .required()
            .default_text("USD"),
        common::availability(),
        common::url(),
        FieldDescriptor::date("priceValidUntil").label("Price valid until"),
        common::typed_group(
            "itemOffered",
            "Item offered",
            "Product",
            vec![FieldDescriptor::text("name").label("Name").required()],
        ),
    ]
}

fn job_posting() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("job-posting"),
        FieldDescriptor::text("title")
            .label("Title")
            .required()
            .tooltip("The title of the job (not the title of the posting)."),
        common::description()
            .required()
            .tooltip("A description of the job."),
        FieldDescriptor::date("datePosted").label("Date posted").required(),
        FieldDescriptor::date("validThrough").label("Valid through"),
        FieldDescriptor::select(
            "employmentType",
            json!([
                { "value": "FULL_TIME", "label": "Full time" },
                { "value": "PART_TIME", "label": "Part time" },
                { "value": "CONTRACTOR", "label": "Contractor" },
                { "value": "TEMPORARY", "label": "Temporary" },
                { "value": "INTERN", "label": "Intern" },
                { "value": "VOLUNTEER", "label": "Volunteer" },
            ]),
        )
        .label("Employment type"),
        common::organization("hiringOrganization", "Hiring organization").required(),
        common::typed_group(
            "jobLocation",
            "Job location",
            "Place",
            vec![common::postal_address().required()],
        ),
        common::typed_group(
            "baseSalary",
            "Base salary",
            "MonetaryAmount",
            vec![
                FieldDescriptor::text("currency").label("Currency").default_text("USD"),
                common::typed_group(
                    "value",
                    "Amount",
                    "QuantitativeValue",
                    vec![
                        FieldDescriptor::text("value").label("Value"),
                        FieldDescriptor::select(
                            "unitText",
                            json!({
                                "HOUR": "Per hour",
                                "DAY": "Per day",
                                "WEEK": "Per week",
                                "MONTH": "Per month",
                                "YEAR": "Per year",
                            }),
                        )
                        .label("Unit"),
                    ],
                )
                .suppress_group_label(),
            ],
        ),
    ]
}

fn rating_scale(id: &str, label: &str, default: &str) -> FieldDescriptor {
    FieldDescriptor::select(
        id,
        json!({ "1": "1", "2": "2", "3": "3", "4": "4", "5": "5" }),
    )
    .label(label)
    .default_text(default)
}

fn employer_aggregate_rating() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("employer-rating"),
        FieldDescriptor::text("itemReviewed")
            .label("Item reviewed")
            .required()
            .tooltip("The organization that is being rated.")
            .default_text("{{ schemas.organization }}"),
        FieldDescriptor::text("ratingCount")
            .label("Rating count")
            .required()
            .tooltip("The total number of ratings of the organization on your site."),
        FieldDescriptor::text("ratingValue")
            .label("Rating value")
            .required()
            .tooltip("A number, fraction or percentage, such as \"4\", \"60%\" or \"6 / 10\"."),
        FieldDescriptor::text("reviewCount")
            .label("Review count")
            .required()
            .tooltip("The number of people who provided a review, with or without a rating."),
        rating_scale("bestRating", "Best rating", "5")
            .tooltip("The highest value allowed in this rating system."),
        rating_scale("worstRating", "Worst rating", "1")
            .tooltip("The lowest value allowed in this rating system."),
    ]
}

fn occupation() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("estimated-salary"),
        common::name()
            .required()
            .tooltip("The title of the occupation, without job codes, salaries or company names."),
        common::description().tooltip("A complete description of the job."),
        common::typed_group(
            "estimatedSalary",
            "Estimated salary",
            "MonetaryAmountDistribution",
            vec![
                common::name()
                    .required()
                    .default_text("base")
                    .tooltip("The type of value, such as \"base\", \"bonus\" or \"commission\"."),
                FieldDescriptor::text("currency")
                    .label("Currency")
                    .tooltip("The ISO 4217 3-letter currency code."),
                FieldDescriptor::text("duration")
                    .label("Duration")
                    .required()
                    .default_text("P1Y")
                    .tooltip("The ISO 8601 period over which the salary is earned."),
                FieldDescriptor::text("maxValue").label("Max value"),
                FieldDescriptor::text("minValue").label("Min value"),
                FieldDescriptor::text("median").label("Median"),
                FieldDescriptor::text("percentile10").label("Percentile 10"),
                FieldDescriptor::text("percentile25").label("Percentile 25"),
                FieldDescriptor::text("percentile75").label("Percentile 75"),
                FieldDescriptor::text("percentile90").label("Percentile 90"),
            ],
        )
        .required()
        .cloneable()
        .clone_item_heading("Salary"),
        FieldDescriptor::text("hiringOrganization")
            .label("Hiring organization")
            .required()
            .tooltip("The organization offering a position of this occupation.")
            .default_text("{{ schemas.organization }}"),
        FieldDescriptor::text("industry").label("Industry"),
        common::typed_group(
            "occupationLocation",
            "Occupation location",
            "City",
            vec![common::name().tooltip("The name of the city.")],
        )
        .tooltip("A city or other location where this occupation is available."),
        FieldDescriptor::text("qualifications").label("Qualifications"),
        FieldDescriptor::text("responsibilities").label("Responsibilities"),
        FieldDescriptor::text("skills")
            .label("Skills")
            .tooltip("A competency desired or required to work in this occupation."),
    ]
}
