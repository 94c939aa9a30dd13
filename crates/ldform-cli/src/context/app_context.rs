use std::path::{Path, PathBuf};

use anyhow::Context;
use ldform_catalog::Catalog;
use ldform_config::LdformConfig;
use ldform_core::SchemaInstance;
use ldform_render::Renderer;
use ldform_schema::SchemaRegistry;
use ldform_store::{FileStore, KeyValueStore, Workspace, WorkspaceOptions};

/// Shared application resources initialized once at startup.
pub struct AppContext<B = FileStore> {
    pub catalog: Catalog,
    pub registry: SchemaRegistry,
    pub renderer: Renderer,
    pub workspace: Workspace<B>,
    pub config: LdformConfig,
}

impl AppContext {
    /// Open the file-backed workspace in `store_override`, else the
    /// configured storage directory.
    pub fn open(config: LdformConfig, store_override: Option<&Path>) -> anyhow::Result<Self> {
        let dir = resolve_store_dir(&config, store_override)?;
        tracing::debug!(dir = %dir.display(), "opening workspace");
        Ok(Self::with_backend(config, FileStore::new(dir)))
    }
}

impl<B: KeyValueStore> AppContext<B> {
    pub fn with_backend(config: LdformConfig, backend: B) -> Self {
        let options = WorkspaceOptions {
            seed_defaults: config.storage.seed_defaults,
        };
        Self {
            catalog: Catalog::builtin(),
            registry: SchemaRegistry::new(),
            renderer: Renderer::new(config.render.max_depth),
            workspace: Workspace::open(backend, options),
            config,
        }
    }

    /// A stored instance, or an error naming the id.
    pub fn instance(&self, id: &str) -> anyhow::Result<&SchemaInstance> {
        self.workspace
            .store()
            .instance(id)
            .with_context(|| format!("no schema with id '{id}' (see 'ldf list')"))
    }

    /// Persist the instance map after a mutating command.
    pub fn save(&self) -> anyhow::Result<()> {
        if self.workspace.is_degraded() {
            anyhow::bail!(
                "stored schemas could not be read; run 'ldf reset' or repair the storage file"
            );
        }
        self.workspace.save().context("failed to save schemas")
    }
}

fn resolve_store_dir(config: &LdformConfig, store_override: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = store_override {
        return Ok(dir.to_path_buf());
    }
    config
        .storage
        .resolved_dir()
        .context("no storage directory: set storage.dir or pass --store")
}

#[cfg(test)]
mod tests {
    use ldform_config::LdformConfig;
    use ldform_store::MemoryStore;
    use tempfile::TempDir;

    use super::AppContext;

    #[test]
    fn store_flag_wins_over_config() {
        let tmp = TempDir::new().expect("tempdir");
        let mut config = LdformConfig::default();
        config.storage.dir = "/nonexistent/ldform".into();

        let ctx = AppContext::open(config, Some(tmp.path())).expect("open");
        assert_eq!(ctx.workspace.backend().dir(), tmp.path());
    }

    #[test]
    fn seeds_follow_config() {
        let mut config = LdformConfig::default();
        config.storage.seed_defaults = false;
        let ctx = AppContext::with_backend(config, MemoryStore::new());
        assert!(ctx.workspace.store().is_empty());

        let ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        assert_eq!(ctx.workspace.store().len(), 2);
    }

    #[test]
    fn unknown_instance_is_an_error() {
        let ctx = AppContext::with_backend(LdformConfig::default(), MemoryStore::new());
        let err = ctx.instance("sch-missing").err().expect("missing id");
        assert!(err.to_string().contains("sch-missing"));
    }

    #[test]
    fn degraded_workspace_refuses_to_save() {
        let backend = MemoryStore::with_entries([(ldform_store::INSTANCES_KEY, "{ not json")]);
        let ctx = AppContext::with_backend(LdformConfig::default(), backend);
        let err = ctx.save().expect_err("degraded save");
        assert!(err.to_string().contains("ldf reset"));
    }
}
