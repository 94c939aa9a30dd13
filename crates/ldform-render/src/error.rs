use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Field tree nests deeper than {limit} levels at '{path}'")]
    TooDeep { path: String, limit: usize },

    #[error("Instance fields must be an object, found {found}")]
    FieldsNotObject { found: &'static str },

    #[error("Failed to format JSON-LD: {0}")]
    Format(#[from] serde_json::Error),
}
