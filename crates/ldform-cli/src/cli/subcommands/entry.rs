use clap::Subcommand;

/// Cloneable field entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntryCommands {
    /// Append an entry to a cloneable field.
    Add {
        id: String,
        /// Field id, dotted for fields inside groups (`author.sameAs`).
        field: String,
        /// JSON value of the new entry (defaults to the field's entry seed).
        #[arg(long)]
        value: Option<String>,
    },
    /// Remove the entry at an index.
    Remove {
        id: String,
        field: String,
        index: usize,
    },
}
