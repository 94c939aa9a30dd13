mod entry;

pub use entry::EntryCommands;
