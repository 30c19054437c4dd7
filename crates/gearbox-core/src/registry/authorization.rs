//! Authorization service registry.

use std::sync::Arc;

use gearbox_protocols::{AdapterFactory, Settings};

use super::base::{Collection, Registry, RegistryCore};
use super::kind::RegistryKind;

/// Registry for named authorization services.
pub struct Authorization {
    core: RegistryCore,
}

impl Authorization {
    pub fn new(factory: Arc<dyn AdapterFactory>, config: Settings) -> Self {
        Self {
            core: RegistryCore::new(RegistryKind::Authorization, factory, config),
        }
    }

    pub fn with_type(mut self, adapter_type: impl Into<String>) -> Self {
        self.core.set_default_type(adapter_type);
        self
    }

    pub fn services(&self) -> &Collection {
        self.core.collection()
    }
}

impl Registry for Authorization {
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

    #[test]
    fn test_authorization_services() {
        let mut table = FactoryTable::new();
        table.register_configured("authorization", "oauth2");

        let config = Settings::from([("clientId".to_string(), json!("app"))]);
        let mut authz = Authorization::new(Arc::new(table), config);
        authz.add(AdapterDescriptor::new("drive").with_settings(Settings::from([(
            "scopes".to_string(),
            json!("drive.readonly"),
        )])));

        let service = authz.services().get("drive").unwrap();
        assert_eq!(service.adapter_type(), "oauth2");
        assert_eq!(service.settings()["clientId"], json!("app"));
        assert_eq!(service.settings()["scopes"], json!("drive.readonly"));
    }

    #[test]
    fn test_authorization_ignores_data_manager_types() {
        let mut table = FactoryTable::new();
        table.register_configured("datamanager", "oauth2");

        let mut authz = Authorization::new(Arc::new(table), Settings::new());
        authz.add("drive");
        assert!(authz.is_empty());
    }
}
