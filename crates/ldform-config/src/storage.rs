//! Where the workspace keeps its data.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Storage directory. Empty means `<data_dir>/ldform`.
    #[serde(default)]
    pub dir: String,

    /// Start a workspace with no stored schemas from the built-in seeds.
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            seed_defaults: default_seed(),
        }
    }
}

impl StorageConfig {
    /// The configured directory, or the platform data directory.
    ///
    /// `None` only when `dir` is empty and the platform has no data directory.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::data_dir().map(|p| p.join("ldform"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert!(config.dir.is_empty());
        assert!(config.seed_defaults);
    }

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            dir: "/srv/ldform".into(),
            ..StorageConfig::default()
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/srv/ldform")));
    }
}
