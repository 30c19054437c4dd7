//! # Gearbox Core
//!
//! Adapter registries for the gearbox client library.
//!
//! ## Components
//!
//! - [`Gearbox`] - Registry context owning the shared adapter factory
//! - [`Registry`] - The add/remove contract shared by every registry
//! - [`DataManager`], [`Authorization`], [`Notifier`] - Concrete registries
//! - [`FactoryTable`] - Table-backed [`AdapterFactory`](gearbox_protocols::AdapterFactory)
//!
//! The registry base ([`RegistryCore`]) has no public constructor; it only
//! exists inside a concrete registry.

pub mod adapter;
pub mod context;
pub mod factory;
pub mod registry;

pub use adapter::ConfiguredAdapter;
pub use context::{AnyRegistry, Gearbox};
pub use factory::{AdapterConstructor, FactoryTable};
pub use registry::{
    AdapterInfo, Authorization, Collection, DataManager, Notifier, Registry, RegistryCore,
    RegistryKind,
};
