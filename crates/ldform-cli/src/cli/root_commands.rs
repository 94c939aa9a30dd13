use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::EntryCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Schema types offered when adding a schema.
    Types,
    /// Field descriptors of a schema type.
    Fields(FieldsArgs),
    /// Add a schema instance.
    New(NewArgs),
    /// Instance ids and labels.
    List,
    /// Print a stored instance.
    Show(IdArgs),
    /// Read a value by path (`type`, `fields`, `fields.author.name`).
    Get(GetArgs),
    /// Write a value by path.
    Set(SetArgs),
    /// Resolved form for an instance.
    Form(IdArgs),
    /// Cloneable field entries.
    Entry {
        #[command(subcommand)]
        action: EntryCommands,
    },
    /// JSON-LD for one instance, or all of them.
    Render(RenderArgs),
    /// Check required fields.
    Validate(IdArgs),
    /// Delete an instance.
    Delete(IdArgs),
    /// Write all instances to `schema-export-<date>.json`.
    Export(ExportArgs),
    /// Merge instances from an export file. Existing ids are overwritten.
    Import(ImportArgs),
    /// Restore the seed instances and the default type menu.
    Reset,
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for commands addressing one instance.
#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    pub id: String,
}

/// Arguments for `ldf fields`.
#[derive(Clone, Debug, Args)]
pub struct FieldsArgs {
    pub type_name: String,
}

/// Arguments for `ldf new`.
#[derive(Clone, Debug, Args)]
pub struct NewArgs {
    pub type_name: String,
    /// Display label (defaults to the type's menu label).
    #[arg(long)]
    pub label: Option<String>,
}

/// Arguments for `ldf get`.
#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    pub id: String,
    pub path: String,
}

/// Arguments for `ldf set`.
#[derive(Clone, Debug, Args)]
pub struct SetArgs {
    pub id: String,
    pub path: String,
    pub value: String,
    /// Parse the value as JSON instead of storing it as a string.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `ldf render`.
#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Instance to render (defaults to all).
    pub id: Option<String>,
}

/// Arguments for `ldf export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Target directory (defaults to export.dir).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for `ldf import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    pub file: PathBuf,
}

/// Arguments for `ldf schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name (`schema_instance`, `instance_map`, ...).
    pub name: Option<String>,
}
