//! Registry context.
//!
//! A [`Gearbox`] owns the adapter factory shared by every registry it
//! builds. Create one per application and pass it where registries are
//! needed.

use std::sync::Arc;

use gearbox_protocols::{AdapterFactory, RegistryError, Settings};
use tracing::debug;

use crate::registry::{
    Authorization, Collection, DataManager, Notifier, Registry, RegistryCore, RegistryKind,
};

/// Builds registries that share one adapter factory.
#[derive(Clone)]
pub struct Gearbox {
    factory: Arc<dyn AdapterFactory>,
}

impl Gearbox {
    /// Create a context around a factory.
    pub fn new(factory: impl AdapterFactory + 'static) -> Self {
        Self::with_factory(Arc::new(factory))
    }

    /// Create a context around an already shared factory.
    pub fn with_factory(factory: Arc<dyn AdapterFactory>) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> Arc<dyn AdapterFactory> {
        self.factory.clone()
    }

    pub fn data_manager(&self, config: Settings) -> DataManager {
        DataManager::new(self.factory(), config)
    }

    pub fn authorization(&self, config: Settings) -> Authorization {
        Authorization::new(self.factory(), config)
    }

    pub fn notifier(&self, config: Settings) -> Notifier {
        Notifier::new(self.factory(), config)
    }

    /// Build a registry from its library name.
    ///
    /// Naming the registry base (`core`) fails with
    /// [`RegistryError::InvalidBaseInstantiation`].
    pub fn registry(&self, lib: &str, config: Settings) -> Result<AnyRegistry, RegistryError> {
        let kind: RegistryKind = lib.parse()?;
        Ok(self.registry_of(kind, config))
    }

    pub fn registry_of(&self, kind: RegistryKind, config: Settings) -> AnyRegistry {
        debug!(lib = kind.lib(), "Creating registry");
        match kind {
            RegistryKind::DataManager => AnyRegistry::DataManager(self.data_manager(config)),
            RegistryKind::Authorization => AnyRegistry::Authorization(self.authorization(config)),
            RegistryKind::Notifier => AnyRegistry::Notifier(self.notifier(config)),
        }
    }
}

/// Any of the concrete registries.
pub enum AnyRegistry {
    DataManager(DataManager),
    Authorization(Authorization),
    Notifier(Notifier),
}

impl AnyRegistry {
    pub fn kind(&self) -> RegistryKind {
        self.core().kind()
    }

    pub fn collection(&self) -> &Collection {
        self.core().collection()
    }

    /// Override the default adapter type.
    pub fn with_type(self, adapter_type: impl Into<String>) -> Self {
        match self {
            AnyRegistry::DataManager(r) => AnyRegistry::DataManager(r.with_type(adapter_type)),
            AnyRegistry::Authorization(r) => {
                AnyRegistry::Authorization(r.with_type(adapter_type))
            }
            AnyRegistry::Notifier(r) => AnyRegistry::Notifier(r.with_type(adapter_type)),
        }
    }
}

impl Registry for AnyRegistry {
    fn core(&self) -> &RegistryCore {
        match self {
            AnyRegistry::DataManager(r) => r.core(),
            AnyRegistry::Authorization(r) => r.core(),
            AnyRegistry::Notifier(r) => r.core(),
        }
    }

    fn core_mut(&mut self) -> &mut RegistryCore {
        match self {
            AnyRegistry::DataManager(r) => r.core_mut(),
            AnyRegistry::Authorization(r) => r.core_mut(),
            AnyRegistry::Notifier(r) => r.core_mut(),
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
