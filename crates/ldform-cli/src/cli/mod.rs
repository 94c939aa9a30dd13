use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ldform_config::LdformConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ldf` binary.
#[derive(Debug, Parser)]
#[command(name = "ldf", version, about = "ldform - Schema.org JSON-LD builder")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage directory (overrides storage.dir)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags, filling gaps from config.
    pub fn global_flags(&self, config: &LdformConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.default_format, true).map_err(
                |error| anyhow::anyhow!("invalid general.default_format: {error}"),
            )?,
        };

        Ok(GlobalFlags {
            format,
            quiet: self.quiet,
            store: self.store.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use ldform_config::LdformConfig;

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::EntryCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["ldf", "--format", "table", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ldf", "types", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Types));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["ldf", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn format_falls_back_to_config() {
        let mut config = LdformConfig::default();
        config.general.default_format = "table".into();

        let cli = Cli::try_parse_from(["ldf", "list"]).expect("cli should parse");
        let flags = cli.global_flags(&config).expect("flags");
        assert_eq!(flags.format, OutputFormat::Table);

        let cli = Cli::try_parse_from(["ldf", "-f", "raw", "list"]).expect("cli should parse");
        let flags = cli.global_flags(&config).expect("flags");
        assert_eq!(flags.format, OutputFormat::Raw);
    }

    #[test]
    fn store_flag_is_carried() {
        let cli = Cli::try_parse_from(["ldf", "--store", "/tmp/ldform", "list"])
            .expect("cli should parse");
        let flags = cli.global_flags(&LdformConfig::default()).expect("flags");
        assert_eq!(
            flags.store.as_deref(),
            Some(std::path::Path::new("/tmp/ldform"))
        );
    }

    #[test]
    fn set_accepts_json_flag() {
        let cli = Cli::try_parse_from([
            "ldf", "set", "sch-1", "fields.wordCount", "1200", "--json",
        ])
        .expect("cli should parse");
        let Commands::Set(args) = cli.command else {
            panic!("expected set");
        };
        assert!(args.json);
        assert_eq!(args.value, "1200");
    }

    #[test]
    fn entry_remove_takes_an_index() {
        let cli = Cli::try_parse_from(["ldf", "entry", "remove", "sch-1", "image", "2"])
            .expect("cli should parse");
        let Commands::Entry { action } = cli.command else {
            panic!("expected entry");
        };
        assert!(matches!(
            action,
            EntryCommands::Remove { index: 2, .. }
        ));
        assert!(Cli::try_parse_from(["ldf", "entry", "remove", "sch-1", "image", "x"]).is_err());
    }
}
