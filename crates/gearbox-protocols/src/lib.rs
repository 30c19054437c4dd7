//! # Gearbox Protocols
//!
//! Core protocol definitions for gearbox adapter registries.
//! Contains only interface definitions and plain data types - no registries.
//!
//! ## Core Traits
//!
//! - [`Adapter`] - Trait for named adapter instances (stores, authorizers, ...)
//! - [`AdapterFactory`] - Lookup that constructs adapters by library and type
//!
//! ## Request Shapes
//!
//! - [`AdapterRequest`] - A bare name, a list of names/descriptors, or a descriptor
//! - [`extend`] - Shallow merge of settings maps

pub mod adapter;
pub mod error;
pub mod merge;
pub mod request;

pub use adapter::{Adapter, AdapterFactory, Settings};
pub use error::RegistryError;
pub use merge::{extend, merged};
pub use request::{AdapterDescriptor, AdapterRequest, RequestItem};
