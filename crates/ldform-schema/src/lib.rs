//! # ldform-schema
//!
//! JSON Schema generation, validation, and registry for ldform.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas of every persisted or
//!   exchanged ldform type
//! - Validation of arbitrary JSON values against those schemas (used to vet
//!   import files before they touch the instance map)
//! - Schema export for external tooling (`ldf schema` command)
//!
//! ## Architecture
//!
//! Model types are defined in `ldform-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation layer.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
