//! Store, storage, and import error types.

use std::path::PathBuf;

use ldform_core::CoreError;
use thiserror::Error;

/// Failures of a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Keys become file names, so they are restricted to `[A-Za-z0-9_-]`.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Errors from the value store and workspace.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize instances: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write export file {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored instances could not be read at open; saving would destroy them.
    #[error("Refusing to overwrite stored instances that could not be read (run `reset` to start over)")]
    Degraded,
}

/// Import failures. The existing instance map is untouched whenever one occurs.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error reading file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON file: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid file format: expected an object of schemas, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Invalid schema '{id}': {}", errors.join("; "))]
    InvalidInstance { id: String, errors: Vec<String> },
}
