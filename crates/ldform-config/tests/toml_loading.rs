//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use ldform_config::LdformConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "/var/lib/ldform"
seed_defaults = false

[export]
dir = "exports"

[render]
max_depth = 16

[general]
default_format = "table"
"#,
        )?;

        let config: LdformConfig = Figment::from(Serialized::defaults(LdformConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.dir, "/var/lib/ldform");
        assert!(!config.storage.seed_defaults);
        assert_eq!(config.export.dir, "exports");
        assert_eq!(config.render.max_depth, 16);
        assert_eq!(config.general.default_format, "table");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[render]
max_depth = 8
"#,
        )?;

        let config: LdformConfig = Figment::from(Serialized::defaults(LdformConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.render.max_depth, 8);
        assert!(config.storage.seed_defaults);
        assert_eq!(config.export.dir, ".");
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_format = "table"
"#,
        )?;
        jail.set_env("LDFORM_GENERAL__DEFAULT_FORMAT", "raw");

        let config: LdformConfig = Figment::from(Serialized::defaults(LdformConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LDFORM_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ldform")?;
        jail.create_file(
            ".ldform/config.toml",
            r#"
[export]
dir = "out"
"#,
        )?;

        let config = LdformConfig::load().expect("config loads");
        assert_eq!(config.export.dir, "out");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[render]
max_depth = "deep"
"#,
        )?;

        let result: Result<LdformConfig, _> =
            Figment::from(Serialized::defaults(LdformConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
