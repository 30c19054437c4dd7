//! Table-backed adapter factory.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use gearbox_protocols::{Adapter, AdapterFactory, RegistryError, Settings};

use crate::adapter::ConfiguredAdapter;

/// Constructor stored in a [`FactoryTable`]: `(name, settings) -> adapter`.
pub type AdapterConstructor = Arc<dyn Fn(&str, &Settings) -> Arc<dyn Adapter> + Send + Sync>;

/// Maps `(lib, adapter_type)` to a constructor.
#[derive(Clone, Default)]
pub struct FactoryTable {
    constructors: HashMap<String, HashMap<String, AdapterConstructor>>,
}

impl FactoryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor, replacing any previous one for the same key.
    pub fn register<F>(
        &mut self,
        lib: impl Into<String>,
        adapter_type: impl Into<String>,
        constructor: F,
    ) -> &mut Self
    where
        F: Fn(&str, &Settings) -> Arc<dyn Adapter> + Send + Sync + 'static,
    {
        self.constructors
            .entry(lib.into())
            .or_default()
            .insert(adapter_type.into(), Arc::new(constructor));
        self
    }

    /// Register [`ConfiguredAdapter`] as the constructor for `(lib, adapter_type)`.
    pub fn register_configured(
        &mut self,
        lib: impl Into<String>,
        adapter_type: impl Into<String>,
    ) -> &mut Self {
        let adapter_type = adapter_type.into();
        let recorded_type = adapter_type.clone();
        self.register(lib, adapter_type, move |name, settings| {
            Arc::new(ConfiguredAdapter::new(name, recorded_type.clone(), settings.clone()))
        })
    }

    /// Sorted list of libraries with at least one constructor.
    pub fn libs(&self) -> Vec<String> {
        let mut libs: Vec<_> = self.constructors.keys().cloned().collect();
        libs.sort();
        libs
    }

    /// Sorted list of adapter types registered for `lib`.
    pub fn types_for(&self, lib: &str) -> Vec<String> {
        let mut types: Vec<_> = self
            .constructors
            .get(lib)
            .map(|types| types.keys().cloned().collect())
            .unwrap_or_default();
        types.sort();
        types
    }

    /// Build an adapter, reporting a missing constructor as an error.
    pub fn try_create(
        &self,
        lib: &str,
        adapter_type: &str,
        name: &str,
        settings: &Settings,
    ) -> Result<Arc<dyn Adapter>, RegistryError> {
        self.create(lib, adapter_type, name, settings)
            .ok_or_else(|| RegistryError::UnsupportedAdapterType {
                lib: lib.to_string(),
                adapter_type: adapter_type.to_string(),
            })
    }

    fn constructor(&self, lib: &str, adapter_type: &str) -> Option<&AdapterConstructor> {
        self.constructors.get(lib)?.get(adapter_type)
    }
}

impl AdapterFactory for FactoryTable {
    fn create(
        &self,
        lib: &str,
        adapter_type: &str,
        name: &str,
        settings: &Settings,
    ) -> Option<Arc<dyn Adapter>> {
        self.constructor(lib, adapter_type)
            .map(|constructor| constructor(name, settings))
    }

    fn supports(&self, lib: &str, adapter_type: &str) -> bool {
        self.constructor(lib, adapter_type).is_some()
    }
}

impl fmt::Debug for FactoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for lib in self.libs() {
            map.entry(&lib, &self.types_for(&lib));
        }
        map.finish()
    }
}
