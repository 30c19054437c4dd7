//! Data store registry.

use std::sync::Arc;

use gearbox_protocols::{AdapterFactory, Settings};

use super::base::{Collection, Registry, RegistryCore};
use super::kind::RegistryKind;

/// Registry for named data stores.
///
/// Stores default to the `memory` adapter type.
pub struct DataManager {
    core: RegistryCore,
}

impl DataManager {
    /// Create a data manager with base settings applied to every store.
    pub fn new(factory: Arc<dyn AdapterFactory>, config: Settings) -> Self {
        Self {
            core: RegistryCore::new(RegistryKind::DataManager, factory, config),
        }
    }

    /// Use another default store type.
    pub fn with_type(mut self, adapter_type: impl Into<String>) -> Self {
        self.core.set_default_type(adapter_type);
        self
    }

    /// Registered stores.
    pub fn stores(&self) -> &Collection {
        self.core.collection()
    }
}

impl Registry for DataManager {
    fn core(&self) -> &RegistryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut RegistryCore {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::FactoryTable;
    use gearbox_protocols::AdapterDescriptor;
    use serde_json::json;

    fn factory() -> Arc<dyn AdapterFactory> {
        let mut table = FactoryTable::new();
        table
            .register_configured("datamanager", "memory")
            .register_configured("datamanager", "session");
        Arc::new(table)
    }

    #[test]
    fn test_data_manager_defaults() {
        let dm = DataManager::new(factory(), Settings::new());
        assert!(dm.is_empty());
        assert_eq!(dm.core().collection_name(), "stores");
        assert_eq!(dm.core().default_type(), "memory");
    }

    #[test]
    fn test_chained_add_and_remove() {
        let mut dm = DataManager::new(factory(), Settings::new());
        dm.add("users")
            .add(AdapterDescriptor::new("tasks").with_type("session"))
            .remove("users");

        assert_eq!(dm.names(), vec!["tasks"]);
        assert_eq!(dm.stores().len(), 1);
    }

    #[test]
    fn test_with_type() {
        let mut dm = DataManager::new(factory(), Settings::new()).with_type("session");
        dm.add("users");
        assert_eq!(dm.get("users").unwrap().adapter_type(), "session");
    }

    #[test]
    fn test_base_config_applies_to_stores() {
        let config = Settings::from([("prefix".to_string(), json!("app"))]);
        let mut dm = DataManager::new(factory(), config);
        dm.add(["users", "tasks"]);

        for name in ["users", "tasks"] {
            assert_eq!(dm.get(name).unwrap().settings()["prefix"], json!("app"));
        }
    }
}
