//! # ldform-form
//!
//! Turns a descriptor list plus an instance's value tree into a render plan:
//! an ordered tree of instructions a presentation layer walks to draw the
//! editing form. Also hosts the advisory required-field validator.
//!
//! Nothing here mutates an instance. Every leaf carries a [`WriteBack`]
//! address which the caller hands to the value store when the user edits.
//!
//! [`WriteBack`]: ldform_core::WriteBack

pub mod layout;
pub mod plan;
pub mod resolve;
pub mod validate;

pub use layout::{FormLayout, Section, layout};
pub use plan::{CloneEntry, Leaf, RenderNode, RenderPlan};
pub use resolve::resolve;
pub use validate::{ValidationError, ValidationReport, summary, validate};
