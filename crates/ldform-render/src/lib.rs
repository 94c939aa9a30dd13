//! # ldform-render
//!
//! Renders schema instances as JSON-LD documents.
//!
//! Rendering is a pure function of an instance and its id: the output starts
//! with `@context` and `@type`, carries every stored field that has content,
//! and ends with a default `@id` when the fields did not supply one. Keys
//! starting with `_` and empty values are dropped at every depth.
//!
//! ```
//! use ldform_core::SchemaInstance;
//! use ldform_render::Renderer;
//!
//! let mut instance = SchemaInstance::new("WebSite", "Home");
//! instance.set("fields.name", "Acme".into()).unwrap();
//!
//! let doc = Renderer::default().render("site", &instance).unwrap();
//! assert_eq!(doc["@id"], "#site");
//! assert!(doc.get("_label").is_none());
//! ```

mod document;
mod error;
mod renderer;

pub use document::{RenderedDocument, format_document, format_documents};
pub use error::RenderError;
pub use renderer::{CONTEXT, DEFAULT_MAX_DEPTH, PREVIEW_PLACEHOLDER, Renderer};
