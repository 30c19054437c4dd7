//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use gearbox_protocols::{AdapterRequest, Settings};

mod schema_log;

pub use schema_log::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    /// Adapter types to provide per registry library, e.g.
    /// `datamanager = ["memory", "session"]`.
    #[serde(default)]
    pub factory: BTreeMap<String, Vec<String>>,

    /// Registries to build, keyed by library name.
    #[serde(default)]
    pub registries: BTreeMap<String, RegistryConfig>,
}

/// One registry section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Overrides the registry's default adapter type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub adapter_type: Option<String>,

    /// Base settings applied to every adapter in this registry.
    #[serde(default)]
    pub settings: Settings,

    /// Adapters to register at startup: a name, a list, or a descriptor.
    #[serde(default, skip_serializing_if = "AdapterRequest::is_empty")]
    pub adapters: AdapterRequest,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
