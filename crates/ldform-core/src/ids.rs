//! Instance id generation.
//!
//! Ids are `sch-` followed by 16 lowercase hex characters drawn from the OS
//! random source, e.g. `sch-3fa8b2c1d04e9a7b`.

use crate::errors::CoreError;

/// Prefix of every generated instance id.
pub const INSTANCE_PREFIX: &str = "sch";

const RANDOM_BYTES: usize = 8;

/// Generate a fresh instance id.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the OS random source fails.
pub fn generate_instance_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; RANDOM_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    Ok(format_id(INSTANCE_PREFIX, &bytes))
}

/// Format `prefix-<hex>` from raw bytes.
#[must_use]
pub fn format_id(prefix: &str, bytes: &[u8]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}
