//! Registry-related errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid instantiation of base registry: {0}")]
    InvalidBaseInstantiation(String),

    #[error("Unknown registry library: {0}")]
    UnknownLib(String),

    #[error("Unsupported adapter type for {lib}: {adapter_type}")]
    UnsupportedAdapterType { lib: String, adapter_type: String },
}
