//! Registries for data stores, authorizers and notifier clients.

mod authorization;
mod base;
mod data_manager;
mod kind;
mod notifier;

pub use authorization::Authorization;
pub use base::{AdapterInfo, Collection, Registry, RegistryCore};
pub use data_manager::DataManager;
pub use kind::RegistryKind;
pub use notifier::Notifier;
