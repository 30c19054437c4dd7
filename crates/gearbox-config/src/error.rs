//! Configuration errors.

use gearbox_protocols::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ConfigError::NotFound("gearbox.toml".to_string());
        assert!(err.to_string().contains("gearbox.toml"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::InvalidValue {
            field: "log.level".to_string(),
            message: "cannot be empty".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("log.level"));
        assert!(display.contains("cannot be empty"));
    }

    #[test]
    fn test_env_var_not_set_error() {
        let err = ConfigError::EnvVarNotSet("STORE_PREFIX".to_string());
        assert!(err.to_string().contains("STORE_PREFIX"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_registry_error_from() {
        let err = ConfigError::from(RegistryError::InvalidBaseInstantiation("core".to_string()));
        assert!(matches!(err, ConfigError::Registry(_)));
        assert!(err.to_string().contains("core"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_debug() {
        let err = ConfigError::NotFound("test.toml".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
