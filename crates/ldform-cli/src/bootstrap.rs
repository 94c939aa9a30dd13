use ldform_config::LdformConfig;

/// Load `.env`, the TOML layers and `LDFORM_*` overrides, then reject
/// values that cannot work.
pub fn load_config() -> anyhow::Result<LdformConfig> {
    let config = LdformConfig::load_with_dotenv()?;
    config.validate()?;
    Ok(config)
}
