//! Registry base and the shared add/remove contract.
//!
//! Every concrete registry (data manager, authorization, notifier) wraps a
//! [`RegistryCore`] and gets `add`/`remove` through the [`Registry`] trait.
//! `RegistryCore` has no public constructor, so the base can only exist as
//! part of a concrete registry.

use std::collections::HashMap;
use std::sync::Arc;

use gearbox_protocols::{
    extend, Adapter, AdapterDescriptor, AdapterFactory, AdapterRequest, RequestItem, Settings,
};
use serde::Serialize;
use tracing::{debug, warn};

use super::kind::RegistryKind;

/// Adapters keyed by the name they were registered under.
pub type Collection = HashMap<String, Arc<dyn Adapter>>;

/// Serializable view of one registered adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdapterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub adapter_type: String,
    pub settings: Settings,
}

/// State shared by all registries.
///
/// Holds the named collection and everything needed to build adapters:
/// the factory, the library key, the default adapter type and the base
/// settings applied to every adapter.
pub struct RegistryCore {
    kind: RegistryKind,
    default_type: String,
    config: Settings,
    factory: Arc<dyn AdapterFactory>,
    collection: Collection,
}

impl RegistryCore {
    pub(crate) fn new(kind: RegistryKind, factory: Arc<dyn AdapterFactory>, config: Settings) -> Self {
        Self {
            kind,
            default_type: kind.default_type().to_string(),
            config,
            factory,
            collection: Collection::new(),
        }
    }

    pub(crate) fn set_default_type(&mut self, adapter_type: impl Into<String>) {
        self.default_type = adapter_type.into();
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn lib(&self) -> &'static str {
        self.kind.lib()
    }

    pub fn collection_name(&self) -> &'static str {
        self.kind.collection_name()
    }

    pub fn default_type(&self) -> &str {
        &self.default_type
    }

    /// Base settings applied to every adapter.
    pub fn config(&self) -> &Settings {
        &self.config
    }

    pub fn factory(&self) -> &Arc<dyn AdapterFactory> {
        &self.factory
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Register adapters.
    ///
    /// Names use the default type and the base config. Descriptors merge
    /// their settings over the base config and may pick another type.
    /// A descriptor without a name is skipped, as is anything the factory
    /// cannot build. Existing entries with the same name are replaced.
    pub fn add(&mut self, request: AdapterRequest) {
        match request {
            AdapterRequest::Empty => {}
            AdapterRequest::ByName(name) => self.add_named(name),
            AdapterRequest::ByList(items) => {
                for item in items {
                    match item {
                        RequestItem::Name(name) => self.add_named(name),
                        RequestItem::Descriptor(descriptor) => self.add_descriptor(descriptor),
                    }
                }
            }
            AdapterRequest::ByDescriptor(descriptor) => self.add_descriptor(descriptor),
        }
    }

    /// Remove adapters by name. Unknown names are ignored.
    pub fn remove(&mut self, request: &AdapterRequest) {
        for name in request.names() {
            if self.collection.remove(name).is_some() {
                debug!(lib = self.lib(), name, "Removed adapter");
            }
        }
    }

    /// Drop every registered adapter.
    pub fn clear(&mut self) {
        self.collection.clear();
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Adapter>> {
        self.collection.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collection.contains_key(name)
    }

    /// Sorted list of registered names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.collection.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Iterate over `(name, adapter)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Adapter>)> + '_ {
        self.collection
            .iter()
            .map(|(name, adapter)| (name.as_str(), adapter))
    }

    /// Describe every adapter, sorted by name.
    pub fn describe(&self) -> Vec<AdapterInfo> {
        let mut infos: Vec<_> = self
            .iter()
            .map(|(name, adapter)| AdapterInfo {
                name: name.to_string(),
                adapter_type: adapter.adapter_type().to_string(),
                settings: adapter.settings().clone(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    fn add_named(&mut self, name: String) {
        if name.is_empty() {
            return;
        }
        let adapter_type = self.default_type.clone();
        let settings = self.config.clone();
        self.insert(name, &adapter_type, settings);
    }

    fn add_descriptor(&mut self, descriptor: AdapterDescriptor) {
        let Some(name) = descriptor.name().map(str::to_string) else {
            debug!(lib = self.lib(), "Skipping adapter descriptor without a name");
            return;
        };

        let mut settings = self.config.clone();
        if let Some(overrides) = &descriptor.settings {
            extend(&mut settings, [overrides]);
        }

        let adapter_type = descriptor
            .adapter_type
            .filter(|adapter_type| !adapter_type.is_empty())
            .unwrap_or_else(|| self.default_type.clone());

        self.insert(name, &adapter_type, settings);
    }

    fn insert(&mut self, name: String, adapter_type: &str, settings: Settings) {
        let lib = self.lib();
        match self.factory.create(lib, adapter_type, &name, &settings) {
            Some(adapter) => {
                debug!(lib, name = %name, adapter_type, "Registered adapter");
                self.collection.insert(name, adapter);
            }
            None => {
                warn!(lib, name = %name, adapter_type, "No adapter constructor, skipping");
            }
        }
    }
}

/// The add/remove contract shared by every registry.
///
/// Implementors only expose their [`RegistryCore`]; `add` and `remove`
/// return `&mut Self` so calls can be chained.
pub trait Registry {
    fn core(&self) -> &RegistryCore;

    fn core_mut(&mut self) -> &mut RegistryCore;

    /// Register adapters from a name, a list, or a descriptor.
    fn add(&mut self, request: impl Into<AdapterRequest>) -> &mut Self
    where
        Self: Sized,
    {
        self.core_mut().add(request.into());
        self
    }

    /// Remove adapters by name, list, or descriptor.
    fn remove(&mut self, request: impl Into<AdapterRequest>) -> &mut Self
    where
        Self: Sized,
    {
        self.core_mut().remove(&request.into());
        self
    }

    fn get(&self, name: &str) -> Option<Arc<dyn Adapter>> {
        self.core().get(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.core().contains(name)
    }

    fn names(&self) -> Vec<String> {
        self.core().names()
    }

    fn len(&self) -> usize {
        self.core().len()
    }

    fn is_empty(&self) -> bool {
        self.core().is_empty()
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
