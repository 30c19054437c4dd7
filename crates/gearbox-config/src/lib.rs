//! # Gearbox Config
//!
//! Configuration management for gearbox registries: TOML schema, loader,
//! validation, and building a registry set from a loaded config.

mod bootstrap;
mod error;
mod loader;
mod schema;
mod validator;

pub use bootstrap::RegistrySet;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
