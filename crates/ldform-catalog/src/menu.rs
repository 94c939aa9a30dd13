//! The default grouped schema-type menu.

use ldform_core::{SchemaTypeGroup, SchemaTypeMenu};

/// Menu shown when no cached menu exists.
#[must_use]
pub fn default_menu() -> SchemaTypeMenu {
    vec![
        SchemaTypeGroup::new("Content")
            .with("Article")
            .with("Book")
            .with("Recipe")
            .with_label("HowTo", "How-To")
            .with_label("FAQPage", "FAQ Page")
            .with_label("QAPage", "Q&A Page")
            .with("Review")
            .with_label("ClaimReview", "Fact Check"),
        SchemaTypeGroup::new("Business")
            .with("Organization")
            .with_label("LocalBusiness", "Local Business")
            .with("Product")
            .with_label("ProductGroup", "Product Group")
            .with("Service")
            .with("Offer")
            .with_label("JobPosting", "Job Posting")
            .with_label("Occupation", "Estimated Salary")
            .with_label("EmployerAggregateRating", "Employer Rating"),
        SchemaTypeGroup::new("Events & Education")
            .with("Event")
            .with("Course")
            .with("Dataset")
            .with_label("Quiz", "Practice Problems"),
        SchemaTypeGroup::new("Media")
            .with_label("VideoObject", "Video")
            .with_label("ImageObject", "Image")
            .with_label("AudioObject", "Audio")
            .with_label("SoftwareApplication", "Software Application")
            .with_label("ItemList", "Movie List"),
        SchemaTypeGroup::new("Website")
            .with_label("WebSite", "Website")
            .with_label("WebPage", "Web Page")
            .with_label("SearchAction", "Search Action")
            .with_label("BreadcrumbList", "Breadcrumb List"),
        SchemaTypeGroup::new("Other")
            .with("Thing")
            .with("Person")
            .with_label("CustomJsonLd", "Custom JSON-LD"),
    ]
}
