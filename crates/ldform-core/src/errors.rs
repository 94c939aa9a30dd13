//! Cross-cutting error types for ldform.
//!
//! Domain-specific errors (`StoreError`, `RenderError`, ...) live in their
//! respective crates. Everything converges on `anyhow` in `ldform-cli`.

use thiserror::Error;

/// Errors that can be raised by the core model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The OS random source could not produce bytes for a new id.
    #[error("Failed to generate instance id: {0}")]
    IdGeneration(String),

    /// A path did not address a writable location of a schema instance.
    #[error("Invalid instance path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}
