//! # ldform-config
//!
//! Layered configuration loading for ldform using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LDFORM_*` prefix, `__` as separator)
//! 2. Project-level `.ldform/config.toml`
//! 3. User-level `~/.config/ldform/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LDFORM_STORAGE__DIR` -> `storage.dir`,
//! `LDFORM_RENDER__MAX_DEPTH` -> `render.max_depth`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ldform_config::LdformConfig;
//!
//! let config = LdformConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! if let Some(dir) = config.storage.resolved_dir() {
//!     println!("schemas live in {}", dir.display());
//! }
//! ```

mod error;
mod export;
mod general;
mod render;
mod storage;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use render::RenderConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LdformConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LdformConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the workspace root.
    ///
    /// # Errors
    ///
    /// As [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".ldform/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LDFORM_").split("__"))
    }

    /// Reject values that load but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero `render.max_depth` or an
    /// unknown `general.default_format`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "render.max_depth".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !OUTPUT_FORMATS.contains(&self.general.default_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.general.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ldform").join("config.toml"))
    }

    /// Walks up from `CARGO_MANIFEST_DIR` (crate -> crates/ -> workspace) looking
    /// for `.env`, then falls back to the current directory. Missing files are
    /// ignored.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
