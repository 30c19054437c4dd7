//! Push notification client registry.

use std::sync::Arc;

use gearbox_protocols::{AdapterFactory, Settings};

use super::base::{Collection, Registry, RegistryCore};
use super::kind::RegistryKind;

/// Registry for named notifier clients.
pub struct Notifier {
    core: RegistryCore,
}

impl Notifier {
    pub fn new(factory: Arc<dyn AdapterFactory>, config: Settings) -> Self {
        Self {
            core: RegistryCore::new(RegistryKind::Notifier, factory, config),
        }
    }

    pub fn with_type(mut self, adapter_type: impl Into<String>) -> Self {
        self.core.set_default_type(adapter_type);
        self
    }

    pub fn clients(&self) -> &Collection {
        self.core.collection()
    }
}

impl Registry for Notifier {
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

    #[test]
    fn test_notifier_clients() {
        let mut table = FactoryTable::new();
        table
            .register_configured("notifier", "simplepush")
            .register_configured("notifier", "stomp");

        let mut notifier = Notifier::new(Arc::new(table), Settings::new()).with_type("stomp");
        notifier.add(["alerts", "chat"]).remove("chat");

        assert_eq!(notifier.clients().len(), 1);
        assert_eq!(notifier.get("alerts").unwrap().adapter_type(), "stomp");
    }
}
