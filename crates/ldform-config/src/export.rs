use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory export files are written to.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
