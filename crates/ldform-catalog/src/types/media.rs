use ldform_core::FieldDescriptor;
use serde_json::json;

use super::{Definitions, define};
use crate::common;

pub(super) fn register(defs: &mut Definitions) {
    define(defs, "VideoObject", video_object());
    define(defs, "ImageObject", image_object());
    define(defs, "AudioObject", audio_object());
    define(defs, "SoftwareApplication", software_application());
    define(defs, "ItemList", movie_list());
}

fn video_object() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("video"),
        common::name().required().tooltip("The title of the video."),
        common::description().required(),
        FieldDescriptor::image("thumbnailUrl")
            .label("Thumbnail URL")
            .required()
            .cloneable()
            .default_list(["{{ post.thumbnail }}"]),
        FieldDescriptor::date("uploadDate").label("Upload date").required(),
        FieldDescriptor::text("duration")
            .label("Duration")
            .tooltip("The duration of the video in ISO 8601 format.")
            .placeholder("PT1M54S"),
        FieldDescriptor::text("contentUrl").label("Content URL"),
        FieldDescriptor::text("embedUrl").label("Embed URL"),
    ]
}

fn image_object() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("image-license-metadata"),
        FieldDescriptor::image("contentUrl")
            .label("Content URL")
            .required(),
        common::name(),
        FieldDescriptor::text("caption").label("Caption"),
        FieldDescriptor::text("license").label("License URL"),
        FieldDescriptor::text("acquireLicensePage").label("Acquire license page"),
        common::person("creator", "Creator"),
        FieldDescriptor::text("creditText").label("Credit text"),
        FieldDescriptor::text("copyrightNotice").label("Copyright notice"),
    ]
}

fn audio_object() -> Vec<FieldDescriptor> {
    vec![
        common::schema_docs("AudioObject"),
        common::id(),
        common::name().required(),
        common::description(),
        FieldDescriptor::text("contentUrl").label("Content URL").required(),
        FieldDescriptor::text("duration")
            .label("Duration")
            .placeholder("PT3M20S"),
        FieldDescriptor::data_list(
            "encodingFormat",
            json!({ "audio/mpeg": "MP3", "audio/ogg": "Ogg", "audio/wav": "WAV", "audio/flac": "FLAC" }),
        )
        .label("Encoding format"),
        FieldDescriptor::textarea("transcript").label("Transcript"),
    ]
}

fn software_application() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("software-app"),
        common::name().required(),
        FieldDescriptor::data_list(
            "applicationCategory",
            json!({
                "GameApplication": "Game",
                "BusinessApplication": "Business",
                "DeveloperApplication": "Developer tools",
                "EducationalApplication": "Education",
                "MultimediaApplication": "Multimedia",
                "UtilitiesApplication": "Utilities",
            }),
        )
        .label("Application category"),
        FieldDescriptor::text("operatingSystem")
            .label("Operating system")
            .placeholder("Windows 10, macOS"),
        common::offers().required(),
        common::aggregate_rating(),
    ]
}

fn movie_list() -> Vec<FieldDescriptor> {
    let movie = common::typed_group(
        "item",
        "Movie",
        "Movie",
        vec![
            FieldDescriptor::image("image")
                .label("Image")
                .required()
                .tooltip("An image that represents the movie."),
            common::name().required().tooltip("The name of the movie."),
            common::typed_group(
                "aggregateRating",
                "Aggregate rating",
                "AggregateRating",
                vec![
                    FieldDescriptor::text("ratingValue").label("Rating value"),
                    FieldDescriptor::text("ratingCount").label("Rating count"),
                ],
            ),
            FieldDescriptor::date("dateCreated")
                .label("Date created")
                .tooltip("The release date of the movie.")
                .default_text("{{ post.date }}"),
            common::typed_group(
                "director",
                "Director",
                "Person",
                vec![common::name().tooltip("The name of the director.")],
            ),
            common::typed_group(
                "review",
                "Review",
                "Review",
                vec![
                    FieldDescriptor::textarea("reviewBody")
                        .label("Review body")
                        .rows(3),
                ],
            ),
            common::url()
                .required()
                .tooltip("The link to the movie.")
                .default_text("{{ post.url }}"),
        ],
    )
    .required()
    .suppress_group_label();

    vec![
        common::google_docs("movie"),
        common::typed_group(
            "itemListElement",
            "Movie list",
            "ListItem",
            vec![
                FieldDescriptor::text("position").label("Position").required(),
                movie,
            ],
        )
        .required()
        .cloneable()
        .clone_item_heading("Movie"),
    ]
}
