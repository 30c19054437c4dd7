//! Adapter protocol definitions.
//!
//! Adapters are the named instances a registry keeps in its collection.
//! They are produced by an [`AdapterFactory`], never by the registry itself.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Settings map handed to every adapter constructor.
pub type Settings = HashMap<String, serde_json::Value>;

/// Core trait for adapter instances.
pub trait Adapter: Send + Sync {
    /// Returns the name the adapter was registered under.
    fn name(&self) -> &str;

    /// Returns the adapter type key (e.g. "memory", "oauth2").
    fn adapter_type(&self) -> &str;

    /// Returns the merged settings the adapter was built with.
    fn settings(&self) -> &Settings;

    /// Returns self as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// External lookup that constructs adapters.
///
/// Keyed by library namespace (`lib`, e.g. "datamanager") and adapter type.
/// Registries receive an implementation at construction time.
pub trait AdapterFactory: Send + Sync {
    /// Build an adapter, or `None` if no constructor exists for `(lib, adapter_type)`.
    fn create(
        &self,
        lib: &str,
        adapter_type: &str,
        name: &str,
        settings: &Settings,
    ) -> Option<Arc<dyn Adapter>>;

    /// Check whether a constructor exists for `(lib, adapter_type)`.
    fn supports(&self, lib: &str, adapter_type: &str) -> bool;
}
