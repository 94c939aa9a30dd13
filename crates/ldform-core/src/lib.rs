//! # ldform-core
//!
//! Core types, path addressing, and error types for ldform.
//!
//! This crate provides the foundational types shared across all ldform crates:
//! - `FieldDescriptor`, the recursive declarative description of one editable property
//! - `ControlKind` and the tagged `FieldShape` view used by the resolver and validator
//! - `FieldOptions`, the closed union over the three legal `options` shapes
//! - `SchemaInstance` and the ordered `InstanceMap`
//! - The schema-type menu (`SchemaTypeGroup`)
//! - Dotted-path `get`/`set` over `serde_json::Value` trees
//! - `WriteBack`, the write address a form control hands back to the store
//! - Instance id generation
//! - Cross-cutting error types

pub mod descriptor;
pub mod edit;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod instance;
pub mod menu;
pub mod options;
pub mod path;

pub use descriptor::{FieldDefault, FieldDescriptor, FieldShape, MAIN_GROUP};
pub use edit::{Seed, WriteBack};
pub use enums::ControlKind;
pub use errors::CoreError;
pub use instance::{InstanceMap, LABEL_KEY, LABEL_PATH, SchemaInstance};
pub use menu::{SchemaTypeGroup, SchemaTypeMenu};
pub use options::{FieldOptions, OptionGroup, OptionItem};
