pub mod delete;
pub mod dispatch;
pub mod entry;
pub mod export;
pub mod fields;
pub mod form;
pub mod get;
pub mod import;
pub mod list;
pub mod new;
pub mod render;
pub mod reset;
pub mod schema;
pub mod set;
pub mod shared;
pub mod show;
pub mod types;
pub mod validate;
