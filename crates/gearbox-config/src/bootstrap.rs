//! Building registries from configuration.

use std::collections::BTreeMap;

use gearbox_core::{AnyRegistry, FactoryTable, Gearbox, Registry, RegistryKind};
use gearbox_protocols::RegistryError;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::schema::Config;

/// Registries built from a [`Config`], keyed by library name.
pub struct RegistrySet {
    gearbox: Gearbox,
    registries: BTreeMap<RegistryKind, AnyRegistry>,
}

impl RegistrySet {
    /// Build the factory table a config describes.
    ///
    /// Every registry's default adapter type is always provided, plus the
    /// types listed under `[factory]`.
    pub fn factory_table(config: &Config) -> Result<FactoryTable, ConfigError> {
        let mut table = FactoryTable::new();
        for kind in RegistryKind::ALL {
            table.register_configured(kind.lib(), kind.default_type());
        }
        for (lib, types) in &config.factory {
            let kind: RegistryKind = lib.parse()?;
            for adapter_type in types {
                if adapter_type.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: format!("factory.{}", lib),
                        message: "adapter type cannot be empty".to_string(),
                    });
                }
                table.register_configured(kind.lib(), adapter_type.as_str());
            }
        }
        Ok(table)
    }

    /// Build the factory, the context and every configured registry, then
    /// register each registry's startup adapters.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let gearbox = Gearbox::new(Self::factory_table(config)?);
        let mut registries: BTreeMap<RegistryKind, AnyRegistry> = BTreeMap::new();

        for (lib, section) in &config.registries {
            let kind: RegistryKind = lib.parse()?;
            if registries.contains_key(&kind) {
                return Err(ConfigError::InvalidValue {
                    field: format!("registries.{}", lib),
                    message: format!("duplicate section for {}", kind),
                });
            }
            let mut registry = gearbox.registry_of(kind, section.settings.clone());
            if let Some(adapter_type) = &section.adapter_type {
                registry = registry.with_type(adapter_type.as_str());
            }
            registry.add(section.adapters.clone());
            debug!(lib = %lib, adapters = registry.len(), "Configured registry");
            registries.insert(kind, registry);
        }

        info!(registries = registries.len(), "Registries ready");
        Ok(Self { gearbox, registries })
    }

    pub fn get(&self, lib: &str) -> Result<Option<&AnyRegistry>, RegistryError> {
        let kind: RegistryKind = lib.parse()?;
        Ok(self.registries.get(&kind))
    }

    /// Get a registry, creating an empty one if the config had none.
    pub fn get_or_create(&mut self, lib: &str) -> Result<&mut AnyRegistry, RegistryError> {
        let kind: RegistryKind = lib.parse()?;
        let gearbox = &self.gearbox;
        Ok(self
            .registries
            .entry(kind)
            .or_insert_with(|| gearbox.registry_of(kind, Default::default())))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnyRegistry> + '_ {
        self.registries.values()
    }

    /// JSON object mapping each collection name to its adapters.
    pub fn snapshot(&self) -> Result<Value, serde_json::Error> {
        let mut out = Map::new();
        for registry in self.iter() {
            let value = serde_json::to_value(registry.core().describe())?;
            out.insert(registry.core().collection_name().to_string(), value);
        }
        Ok(Value::Object(out))
    }
}
