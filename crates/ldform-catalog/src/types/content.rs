use ldform_core::FieldDescriptor;
use serde_json::json;

use super::{Definitions, define};
use crate::common;

pub(super) fn register(defs: &mut Definitions) {
    define(defs, "Article", article());
    define(defs, "Book", book());
    define(defs, "Recipe", recipe());
    define(defs, "HowTo", how_to());
    define(defs, "FAQPage", faq_page());
    define(defs, "QAPage", qa_page());
    define(defs, "Review", review());
    define(defs, "ClaimReview", claim_review());
}

fn article() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("article"),
        common::subtype(
            "Article",
            json!({
                "Article": "Article",
                "BlogPosting": "Blog Posting",
                "NewsArticle": "News Article",
                "ScholarlyArticle": "Scholarly Article",
                "TechArticle": "Tech Article",
            }),
        ),
        common::headline().required(),
        common::description()
            .required()
            .default_text("{{ post.excerpt }}"),
        common::image()
            .required()
            .default_list(["{{ post.thumbnail }}"]),
        common::author().required(),
        common::publisher().required(),
        common::date_published().required(),
        common::date_modified(),
        common::main_entity_of_page(),
        common::word_count(),
        common::in_language(),
        common::keywords(),
        common::about(),
        common::mentions(),
        FieldDescriptor::text("articleSection")
            .label("Article section")
            .tooltip("Articles may belong to one or more sections in a magazine or newspaper."),
        FieldDescriptor::textarea("articleBody")
            .label("Article body")
            .tooltip("The actual body of the article.")
            .default_text("{{ post.content }}")
            .rows(6),
    ]
}

fn book() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("book"),
        common::name().required().tooltip("The title of the book."),
        common::author().required(),
        common::url()
            .required()
            .tooltip("The URL of the page on your site about the book."),
        common::same_as(),
        common::typed_group(
            "workExample",
            "Editions",
            "Book",
            vec![
                FieldDescriptor::text("@id")
                    .label("@id")
                    .required()
                    .default_text("{{ post.url }}"),
                FieldDescriptor::data_list(
                    "bookFormat",
                    json!({
                        "https://schema.org/AudiobookFormat": "Audiobook format",
                        "https://schema.org/EBook": "E-book",
                        "https://schema.org/Hardcover": "Hard cover",
                        "https://schema.org/Paperback": "Paper back",
                    }),
                )
                .label("Book format")
                .required()
                .default_text("https://schema.org/Hardcover"),
                common::in_language().required().default_text("en"),
                FieldDescriptor::text("isbn").label("ISBN").required(),
            ],
        )
        .required()
        .cloneable()
        .clone_item_heading("Edition"),
    ]
}

fn recipe() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("recipe"),
        common::name().required().tooltip("The name of the dish."),
        common::image().required(),
        common::author().required(),
        common::description().required(),
        FieldDescriptor::textarea("recipeIngredient")
            .label("Recipe ingredients")
            .tooltip("A single ingredient used in the recipe, e.g. sugar, flour or garlic.")
            .required()
            .cloneable()
            .clone_item_heading("Ingredient"),
        common::typed_group(
            "recipeInstructions",
            "Recipe instructions",
            "HowToStep",
            vec![
                FieldDescriptor::textarea("text")
                    .label("Instruction")
                    .required(),
            ],
        )
        .required()
        .cloneable()
        .clone_item_heading("Step"),
        FieldDescriptor::text("prepTime")
            .label("Prep time")
            .placeholder("PT15M")
            .in_group("Timing"),
        FieldDescriptor::text("cookTime")
            .label("Cook time")
            .placeholder("PT1H")
            .in_group("Timing"),
        FieldDescriptor::text("totalTime")
            .label("Total time")
            .tooltip("The total time required to perform the instructions, in ISO 8601 duration format.")
            .placeholder("PT1H15M")
            .in_group("Timing"),
        FieldDescriptor::text("recipeYield")
            .label("Recipe yield")
            .in_group("Details"),
        FieldDescriptor::text("recipeCategory")
            .label("Recipe category")
            .in_group("Details"),
        FieldDescriptor::text("recipeCuisine")
            .label("Recipe cuisine")
            .in_group("Details"),
        common::keywords().in_group("Details"),
        common::typed_group(
            "nutrition",
            "Nutrition",
            "NutritionInformation",
            vec![FieldDescriptor::text("calories").label("Calories")],
        )
        .in_group("Details"),
    ]
}

fn how_to() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("HowTo"),
        common::name().required().tooltip("The name of the how-to."),
        common::description(),
        common::image(),
        FieldDescriptor::text("totalTime")
            .label("Total time")
            .placeholder("PT30M"),
        common::typed_group(
            "supply",
            "Supplies",
            "HowToSupply",
            vec![FieldDescriptor::text("name").label("Name").required()],
        )
        .cloneable()
        .clone_item_heading("Supply"),
        common::typed_group(
            "tool",
            "Tools",
            "HowToTool",
            vec![FieldDescriptor::text("name").label("Name").required()],
        )
        .cloneable()
        .clone_item_heading("Tool"),
        common::typed_group(
            "step",
            "Steps",
            "HowToStep",
            vec![
                FieldDescriptor::text("name").label("Name"),
                FieldDescriptor::textarea("text").label("Text").required(),
                FieldDescriptor::image("image").label("Image"),
            ],
        )
        .required()
        .cloneable()
        .clone_item_heading("Step"),
    ]
}

fn faq_page() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("faqpage"),
        common::name().required().tooltip("The name of the FAQ page."),
        common::typed_group(
            "mainEntity",
            "Questions",
            "Question",
            vec![
                FieldDescriptor::text("name")
                    .label("Question")
                    .required()
                    .tooltip("The question being asked."),
                common::typed_group(
                    "acceptedAnswer",
                    "Answer",
                    "Answer",
                    vec![
                        FieldDescriptor::textarea("text")
                            .label("Answer text")
                            .required()
                            .tooltip("The answer to the question."),
                    ],
                )
                .required(),
            ],
        )
        .tooltip("The questions and answers on this FAQ page.")
        .required()
        .cloneable()
        .clone_item_heading("Question"),
    ]
}

fn qa_page() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("qapage"),
        common::typed_group(
            "mainEntity",
            "Question",
            "Question",
            vec![
                FieldDescriptor::text("name")
                    .label("Question")
                    .required()
                    .tooltip("The short form of the question."),
                FieldDescriptor::textarea("text").label("Question text"),
                FieldDescriptor::text("answerCount").label("Answer count").required(),
                common::typed_group(
                    "acceptedAnswer",
                    "Accepted answer",
                    "Answer",
                    vec![
                        FieldDescriptor::textarea("text").label("Answer text").required(),
                        FieldDescriptor::text("upvoteCount").label("Upvotes"),
                        FieldDescriptor::text("url").label("URL"),
                    ],
                ),
                common::typed_group(
                    "suggestedAnswer",
                    "Suggested answers",
                    "Answer",
                    vec![
                        FieldDescriptor::textarea("text").label("Answer text").required(),
                        FieldDescriptor::text("upvoteCount").label("Upvotes"),
                        FieldDescriptor::text("url").label("URL"),
                    ],
                )
                .cloneable()
                .clone_item_heading("Answer"),
            ],
        )
        .required()
        .suppress_group_label(),
    ]
}

fn review() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("review-snippet"),
        common::id(),
        common::typed_group(
            "itemReviewed",
            "Item reviewed",
            "Thing",
            vec![FieldDescriptor::text("name").label("Name").required()],
        )
        .required(),
        common::typed_group(
            "reviewRating",
            "Rating",
            "Rating",
            vec![
                FieldDescriptor::text("ratingValue").label("Rating value").required(),
                FieldDescriptor::text("bestRating").label("Best rating").placeholder("5"),
                FieldDescriptor::text("worstRating").label("Worst rating").placeholder("1"),
            ],
        )
        .required(),
        common::person("author", "Author").required(),
        FieldDescriptor::textarea("reviewBody").label("Review body"),
        common::date_published(),
    ]
}

fn claim_review() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("factcheck"),
        common::person("author", "Author")
            .tooltip("The publisher of the fact check article, not the publisher of the claim."),
        FieldDescriptor::text("claimReviewed")
            .label("Claim reviewed")
            .required()
            .tooltip("A short summary of the claim being evaluated, ideally under 75 characters."),
        common::date_published().tooltip("The date when the fact check was published."),
        common::typed_group(
            "itemReviewed",
            "Item reviewed",
            "Claim",
            vec![
                FieldDescriptor::text("author")
                    .label("Author")
                    .tooltip("The author of the claim, not the author of the fact check.")
                    .default_text("{{ schemas.organization }}"),
                common::typed_group(
                    "appearance",
                    "Appearance",
                    "CreativeWork",
                    vec![
                        common::url()
                            .required()
                            .tooltip("Link to the page or article where this claim appears."),
                    ],
                )
                .required()
                .tooltip("Link to or description of the work in which this claim appears."),
            ],
        )
        .required()
        .tooltip("An object describing the claim being made."),
        common::typed_group(
            "reviewRating",
            "Review rating",
            "Rating",
            vec![
                FieldDescriptor::text("ratingValue")
                    .label("Rating value")
                    .required()
                    .tooltip("A numeric rating for this claim, in the range 1-5."),
                FieldDescriptor::text("bestRating")
                    .label("Best rating")
                    .default_text("5"),
                FieldDescriptor::text("worstRating")
                    .label("Worst rating")
                    .default_text("1"),
                FieldDescriptor::text("alternateName")
                    .label("Alternate name")
                    .tooltip("The truthfulness rating as a short human-readable phrase."),
            ],
        )
        .required()
        .tooltip("The assessment of the claim."),
    ]
}
