//! Catalog error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The menu offers types that have no descriptor entry.
    #[error("Menu offers types with no field definitions: {}", types.join(", "))]
    MissingDefinitions { types: Vec<String> },
}
