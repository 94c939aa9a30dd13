//! A value store bound to a persistence backend.
//!
//! Loading never fails: unreadable data is logged and replaced with a safe
//! default. Saving is explicit, and refuses to clobber stored instances that
//! could not be read.

use ldform_catalog::Catalog;
use ldform_core::{InstanceMap, SchemaTypeMenu};

use crate::backend::KeyValueStore;
use crate::error::StoreError;
use crate::seed::default_instances;
use crate::values::ValueStore;

/// Storage key of the instance map.
pub const INSTANCES_KEY: &str = "ldform-schemas";

/// Storage key of the cached schema-type menu.
pub const MENU_KEY: &str = "ldform-schema-types";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceOptions {
    /// Start from the seed instances when nothing is stored yet.
    pub seed_defaults: bool,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            seed_defaults: true,
        }
    }
}

#[derive(Debug)]
pub struct Workspace<B> {
    backend: B,
    store: ValueStore,
    options: WorkspaceOptions,
    degraded: bool,
}

impl<B: KeyValueStore> Workspace<B> {
    #[must_use]
    pub fn open(backend: B, options: WorkspaceOptions) -> Self {
        let (instances, degraded) = match backend.load(INSTANCES_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<InstanceMap>(&text) {
                Ok(instances) => (instances, false),
                Err(error) => {
                    tracing::error!(%error, key = INSTANCES_KEY, "stored schemas are not valid JSON");
                    (InstanceMap::new(), true)
                }
            },
            Ok(None) => (initial_instances(options), false),
            Err(error) => {
                tracing::error!(%error, key = INSTANCES_KEY, "failed to load schemas");
                (InstanceMap::new(), true)
            }
        };

        if degraded {
            tracing::warn!("workspace opened degraded; saving is disabled until reset");
        }

        Self {
            backend,
            store: ValueStore::from_instances(instances),
            options,
            degraded,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ValueStore {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut ValueStore {
        &mut self.store
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether stored instances could not be read at open.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Persist the instance map.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Degraded` when the workspace opened degraded,
    /// or the backend or serialization error otherwise.
    pub fn save(&self) -> Result<(), StoreError> {
        if self.degraded {
            return Err(StoreError::Degraded);
        }
        let text = serde_json::to_string_pretty(self.store.instances())?;
        self.backend.save(INSTANCES_KEY, &text)?;
        Ok(())
    }

    /// The schema-type menu: the cached one reconciled against `catalog`,
    /// or the catalog default (written back) when the cache is missing or
    /// unreadable.
    #[must_use]
    pub fn menu(&self, catalog: &Catalog) -> SchemaTypeMenu {
        let cached = match self.backend.load(MENU_KEY) {
            Ok(Some(text)) => serde_json::from_str::<SchemaTypeMenu>(&text)
                .inspect_err(|error| {
                    tracing::warn!(%error, key = MENU_KEY, "cached menu is corrupt, using default");
                })
                .ok(),
            Ok(None) => None,
            Err(error) => {
                tracing::error!(%error, key = MENU_KEY, "failed to load cached menu");
                None
            }
        };

        match cached {
            Some(menu) => catalog.reconcile_menu(menu),
            None => {
                let menu = catalog.schema_type_menu().clone();
                if let Err(error) = self.write_menu(&menu) {
                    tracing::error!(%error, key = MENU_KEY, "failed to cache default menu");
                }
                menu
            }
        }
    }

    /// Overwrite the menu cache with the catalog default.
    ///
    /// # Errors
    ///
    /// Returns the backend or serialization error.
    pub fn refresh_menu(&self, catalog: &Catalog) -> Result<SchemaTypeMenu, StoreError> {
        let menu = catalog.schema_type_menu().clone();
        self.write_menu(&menu)?;
        Ok(menu)
    }

    /// Back to a fresh workspace. Both keys are wiped, then the seed
    /// instances (when seeding is enabled) and the default menu are written.
    /// Clears the degraded flag.
    ///
    /// # Errors
    ///
    /// Returns the backend or serialization error.
    pub fn reset(&mut self, catalog: &Catalog) -> Result<(), StoreError> {
        self.backend.remove(INSTANCES_KEY)?;
        self.backend.remove(MENU_KEY)?;
        self.store.replace_all(initial_instances(self.options));
        self.degraded = false;
        if !self.store.is_empty() {
            self.save()?;
        }
        self.refresh_menu(catalog)?;
        Ok(())
    }

    fn write_menu(&self, menu: &SchemaTypeMenu) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(menu)?;
        self.backend.save(MENU_KEY, &text)?;
        Ok(())
    }
}

fn initial_instances(options: WorkspaceOptions) -> InstanceMap {
    if options.seed_defaults {
        default_instances()
    } else {
        InstanceMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::error::StorageError;
    use ldform_core::{SchemaInstance, SchemaTypeGroup};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Backend whose reads and writes always fail.
    struct Broken;

    impl KeyValueStore for Broken {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                source: std::io::Error::other("disk on fire"),
            })
        }

        fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::other("disk on fire"),
            })
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn fresh_workspace_is_seeded() {
        let workspace = Workspace::open(MemoryStore::new(), WorkspaceOptions::default());
        let ids: Vec<_> = workspace.store().instances().keys().cloned().collect();
        assert_eq!(ids, vec!["website_schema", "organization_schema"]);
        assert_eq!(
            workspace.store().labels().get("website_schema"),
            Some("Website Schema")
        );
        assert!(!workspace.is_degraded());
    }

    #[test]
    fn seeding_can_be_disabled() {
        let workspace = Workspace::open(
            MemoryStore::new(),
            WorkspaceOptions {
                seed_defaults: false,
            },
        );
        assert!(workspace.store().is_empty());
    }

    #[test]
    fn save_then_reopen() {
        let backend = MemoryStore::new();
        let mut workspace = Workspace::open(backend, WorkspaceOptions::default());
        let id = workspace
            .store_mut()
            .add_instance(SchemaInstance::new("Article", "Post"))
            .unwrap();
        workspace.save().unwrap();

        let reopened = Workspace::open(workspace.backend, WorkspaceOptions::default());
        assert_eq!(reopened.store().len(), 3);
        assert_eq!(reopened.store().labels().get(&id), Some("Post"));
        // Insertion order survives the round trip.
        assert_eq!(
            reopened.store().instances().keys().last().map(String::as_str),
            Some(id.as_str())
        );
    }

    #[test]
    fn corrupt_instances_degrade_and_block_save() {
        let backend = MemoryStore::with_entries([(INSTANCES_KEY, "{not json")]);
        let workspace = Workspace::open(backend, WorkspaceOptions::default());
        assert!(workspace.is_degraded());
        assert!(workspace.store().is_empty());
        assert!(matches!(workspace.save(), Err(StoreError::Degraded)));
        assert_eq!(
            workspace.backend().load(INSTANCES_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn failing_backend_degrades_to_empty() {
        let workspace = Workspace::open(Broken, WorkspaceOptions::default());
        assert!(workspace.is_degraded());
        assert!(workspace.store().is_empty());

        // Menu falls back to the default; the failed write-back is only logged.
        let catalog = Catalog::builtin();
        assert_eq!(&workspace.menu(&catalog), catalog.schema_type_menu());
    }

    #[test]
    fn reset_clears_degraded() {
        let backend = MemoryStore::with_entries([(INSTANCES_KEY, "[]")]);
        let mut workspace = Workspace::open(backend, WorkspaceOptions::default());
        assert!(workspace.is_degraded());

        workspace.reset(&Catalog::builtin()).unwrap();
        assert!(!workspace.is_degraded());
        assert_eq!(workspace.store().len(), 2);
        assert!(workspace.backend().load(MENU_KEY).unwrap().is_some());
    }

    #[test]
    fn reset_without_seeds_wipes_stored_instances() {
        let options = WorkspaceOptions {
            seed_defaults: false,
        };
        let backend = MemoryStore::new();
        let mut workspace = Workspace::open(backend, options);
        workspace
            .store_mut()
            .add_instance(SchemaInstance::new("Article", "Post"))
            .unwrap();
        workspace.save().unwrap();

        workspace.reset(&Catalog::builtin()).unwrap();
        assert!(workspace.store().is_empty());
        assert_eq!(workspace.backend().load(INSTANCES_KEY).unwrap(), None);
        assert!(Workspace::open(workspace.backend, options).store().is_empty());
    }

    #[test]
    fn missing_menu_is_cached() {
        let catalog = Catalog::builtin();
        let workspace = Workspace::open(MemoryStore::new(), WorkspaceOptions::default());
        let menu = workspace.menu(&catalog);
        assert_eq!(&menu, catalog.schema_type_menu());

        let cached = workspace.backend().load(MENU_KEY).unwrap().unwrap();
        let cached: SchemaTypeMenu = serde_json::from_str(&cached).unwrap();
        assert_eq!(cached, menu);
    }

    #[test]
    fn cached_menu_is_reconciled() {
        let cached = json!([
            { "label": "Mine", "options": { "Article": "Post", "MathSolver": "Math solver" } }
        ]);
        let backend = MemoryStore::with_entries([(MENU_KEY, cached.to_string())]);
        let workspace = Workspace::open(backend, WorkspaceOptions::default());
        assert_eq!(
            workspace.menu(&Catalog::builtin()),
            vec![SchemaTypeGroup::new("Mine").with_label("Article", "Post")]
        );
    }

    #[test]
    fn corrupt_menu_is_replaced() {
        let catalog = Catalog::builtin();
        let backend = MemoryStore::with_entries([(MENU_KEY, "nope")]);
        let workspace = Workspace::open(backend, WorkspaceOptions::default());
        assert_eq!(&workspace.menu(&catalog), catalog.schema_type_menu());
        assert_ne!(
            workspace.backend().load(MENU_KEY).unwrap().as_deref(),
            Some("nope")
        );
    }
}
