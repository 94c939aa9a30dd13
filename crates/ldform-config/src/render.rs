use serde::{Deserialize, Serialize};

/// Same limit the renderer uses when unconfigured.
const fn default_max_depth() -> usize {
    64
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Deepest field nesting the renderer accepts.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}
