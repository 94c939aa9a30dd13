//! # ldform-store
//!
//! State and persistence for ldform:
//! - [`ValueStore`], the `id -> SchemaInstance` map with its [`LabelIndex`]
//! - [`KeyValueStore`] backends (`MemoryStore`, `FileStore`)
//! - [`Workspace`], which loads and saves a value store and the menu cache
//! - Export and import of the whole instance map

pub mod backend;
mod error;
pub mod labels;
pub mod seed;
pub mod transfer;
pub mod values;
pub mod workspace;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::{ImportError, StorageError, StoreError};
pub use labels::LabelIndex;
pub use values::{ImportSummary, ValueStore};
pub use workspace::{INSTANCES_KEY, MENU_KEY, Workspace, WorkspaceOptions};
