use ldform_core::FieldDescriptor;
use serde_json::json;

use super::{Definitions, define};
use crate::common;

pub(super) fn register(defs: &mut Definitions) {
    define(defs, "Event", event());
    define(defs, "Course", course());
    define(defs, "Dataset", dataset());
    define(defs, "Quiz", quiz());
}

fn event() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("event"),
        common::name().required().tooltip("The full title of the event."),
        common::description().required(),
        common::image(),
        FieldDescriptor::date("startDate")
            .label("Start date")
            .required(),
        FieldDescriptor::date("endDate").label("End date"),
        FieldDescriptor::select(
            "eventStatus",
            json!({
                "https://schema.org/EventScheduled": "Scheduled",
                "https://schema.org/EventPostponed": "Postponed",
                "https://schema.org/EventRescheduled": "Rescheduled",
                "https://schema.org/EventMovedOnline": "Moved online",
                "https://schema.org/EventCancelled": "Cancelled",
            }),
        )
        .label("Event status"),
        FieldDescriptor::select(
            "eventAttendanceMode",
            json!({
                "https://schema.org/OfflineEventAttendanceMode": "In person",
                "https://schema.org/OnlineEventAttendanceMode": "Online",
                "https://schema.org/MixedEventAttendanceMode": "Mixed",
            }),
        )
        .label("Attendance mode"),
        common::typed_group(
            "location",
            "Location",
            "Place",
            vec![
                FieldDescriptor::text("name").label("Name").required(),
                common::postal_address().required(),
            ],
        )
        .required()
        .in_group("Venue"),
        common::organization("organizer", "Organizer").in_group("People"),
        common::person("performer", "Performer")
            .cloneable()
            .clone_item_heading("Performer")
            .in_group("People"),
        common::offers().in_group("Tickets"),
    ]
}

fn course() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("course"),
        common::name().required().tooltip("The title of the course."),
        common::description()
            .required()
            .tooltip("A description of the course."),
        FieldDescriptor::text("courseCode").label("Course code"),
        common::organization("provider", "Provider").tooltip("The organization offering the course."),
        common::typed_group(
            "hasCourseInstance",
            "Course instances",
            "CourseInstance",
            vec![
                FieldDescriptor::select(
                    "courseMode",
                    json!({ "Online": "Online", "Onsite": "On site", "Blended": "Blended" }),
                )
                .label("Course mode")
                .required(),
                FieldDescriptor::text("courseWorkload")
                    .label("Workload")
                    .placeholder("PT22H"),
                FieldDescriptor::date("startDate").label("Start date"),
                FieldDescriptor::date("endDate").label("End date"),
            ],
        )
        .cloneable()
        .clone_item_heading("Instance"),
        common::offers(),
    ]
}

fn dataset() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("dataset"),
        common::name().required().tooltip("The name of the dataset."),
        FieldDescriptor::text("alternateName")
            .label("Alternate name")
            .tooltip("Aliases or abbreviations used to refer to this dataset."),
        common::description()
            .required()
            .tooltip("A summary of the dataset, 50 to 5000 characters long."),
        common::person("creator", "Creator").tooltip("The creator or author of this dataset."),
        FieldDescriptor::text("citation").label("Citation"),
        common::typed_group(
            "distribution",
            "Distribution",
            "DataDownload",
            vec![
                FieldDescriptor::text("encodingFormat")
                    .label("Encoding format")
                    .required(),
                FieldDescriptor::text("contentUrl")
                    .label("Content URL")
                    .required(),
            ],
        )
        .tooltip("Where the dataset can be downloaded, and in which format.")
        .cloneable()
        .clone_item_heading("Download"),
        FieldDescriptor::text("identifier")
            .label("Identifier")
            .placeholder("https://doi.org/..."),
        common::keywords(),
        FieldDescriptor::text("license").label("License"),
        common::same_as(),
        FieldDescriptor::text("spatialCoverage").label("Spatial coverage"),
        FieldDescriptor::text("temporalCoverage")
            .label("Temporal coverage")
            .placeholder("2008/2020"),
        FieldDescriptor::text("variableMeasured").label("Variable measured"),
        FieldDescriptor::text("version").label("Version"),
    ]
}

fn answer(id: &str, label: &str) -> FieldDescriptor {
    common::typed_group(
        id,
        label,
        "Answer",
        vec![FieldDescriptor::text("text").label("Answer text").required()],
    )
}

fn quiz() -> Vec<FieldDescriptor> {
    vec![
        common::google_docs("practice-problems"),
        common::name().required().tooltip("The title of the quiz."),
        common::about()
            .required()
            .tooltip("The concept behind the quiz."),
        FieldDescriptor::text("assesses")
            .label("Assesses")
            .tooltip("The skills required to solve the questions."),
        FieldDescriptor::select(
            "educationalLevel",
            json!({ "beginner": "Beginner", "intermediate": "Intermediate", "advanced": "Advanced" }),
        )
        .label("Educational level")
        .default_text("beginner"),
        common::typed_group(
            "educationalAlignment",
            "Educational alignment",
            "AlignmentObject",
            vec![
                FieldDescriptor::select(
                    "alignmentType",
                    json!({
                        "educationalSubject": "Educational subject",
                        "educationalLevel": "Educational level",
                    }),
                )
                .label("Alignment type")
                .required()
                .default_text("educationalSubject"),
                FieldDescriptor::text("educationalFramework")
                    .label("Educational framework")
                    .required()
                    .placeholder("Common Core"),
                FieldDescriptor::text("targetName")
                    .label("Target name")
                    .required(),
                FieldDescriptor::text("targetUrl")
                    .label("Target URL")
                    .required(),
            ],
        )
        .cloneable()
        .clone_item_heading("Alignment"),
        common::typed_group(
            "hasPart",
            "Questions",
            "Question",
            vec![
                FieldDescriptor::select(
                    "eduQuestionType",
                    json!({
                        "Flashcard": "Flashcard",
                        "Multiple choice": "Multiple choice",
                        "Checkbox": "Checkbox",
                        "True or false": "True or false",
                    }),
                )
                .label("Question type"),
                common::name()
                    .required()
                    .tooltip("The full text of the question."),
                answer("acceptedAnswer", "Accepted answer").required(),
                answer("suggestedAnswer", "Suggested answer")
                    .cloneable()
                    .clone_item_heading("Answer option"),
            ],
        )
        .required()
        .cloneable()
        .clone_item_heading("Question"),
    ]
}
