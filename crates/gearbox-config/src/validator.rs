//! Configuration validation.

use std::collections::BTreeMap;

use gearbox_core::{FactoryTable, RegistryKind};
use gearbox_protocols::{AdapterFactory, AdapterRequest, RequestItem};

use crate::bootstrap::RegistrySet;
use crate::error::ConfigError;
use crate::schema::{Config, RegistryConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
///
/// Adapters that registration would silently skip (no name, no
/// constructor) are reported as warnings, not errors.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_log(config, &mut result);
        Self::validate_factory(config, &mut result);
        Self::validate_registries(config, &mut result);

        Ok(result)
    }

    fn validate_log(config: &Config, result: &mut ValidationResult) {
        let level = config.log.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new("log.level", "Log level cannot be empty"));
        } else if !level.contains('=') && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            result.add_warning(ValidationWarning::new(
                "log.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LOG_LEVELS),
            ));
        }
    }

    fn validate_factory(config: &Config, result: &mut ValidationResult) {
        for (lib, types) in &config.factory {
            if let Err(err) = lib.parse::<RegistryKind>() {
                result.add_error(ValidationError::new(format!("factory.{}", lib), err.to_string()));
                continue;
            }
            if types.iter().any(|adapter_type| adapter_type.is_empty()) {
                result.add_error(ValidationError::new(
                    format!("factory.{}", lib),
                    "Adapter type cannot be empty",
                ));
            }
        }
    }

    fn validate_registries(config: &Config, result: &mut ValidationResult) {
        // A broken [factory] is already reported; skip type checks then.
        let table = RegistrySet::factory_table(config).ok();
        let mut seen: BTreeMap<RegistryKind, &str> = BTreeMap::new();

        for (lib, section) in &config.registries {
            let path = format!("registries.{}", lib);
            let kind = match lib.parse::<RegistryKind>() {
                Ok(kind) => kind,
                Err(err) => {
                    result.add_error(ValidationError::new(path, err.to_string()));
                    continue;
                }
            };
            if let Some(first) = seen.insert(kind, lib.as_str()) {
                result.add_error(ValidationError::new(
                    path,
                    format!("Duplicate section for {}, already configured as '{}'", kind, first),
                ));
                continue;
            }
            Self::validate_adapters(table.as_ref(), kind, section, &path, result);
        }
    }

    fn validate_adapters(
        table: Option<&FactoryTable>,
        kind: RegistryKind,
        section: &RegistryConfig,
        path: &str,
        result: &mut ValidationResult,
    ) {
        let default_type = section
            .adapter_type
            .as_deref()
            .unwrap_or(kind.default_type());
        let provided = |adapter_type: &str| {
            table.is_none_or(|table| table.supports(kind.lib(), adapter_type))
        };

        let mut check = |item_path: String, item: &RequestItem| {
            if item.name().is_none() {
                result.add_warning(ValidationWarning::new(
                    item_path,
                    "Adapter has no name and will be skipped",
                ));
                return;
            }
            let adapter_type = match item {
                RequestItem::Descriptor(descriptor) => descriptor
                    .adapter_type
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(default_type),
                RequestItem::Name(_) => default_type,
            };
            if !provided(adapter_type) {
                result.add_warning(ValidationWarning::new(
                    item_path,
                    format!(
                        "Adapter type '{}' is not provided for {}, adapter will be skipped",
                        adapter_type,
                        kind.lib()
                    ),
                ));
            }
        };

        let adapters_path = format!("{}.adapters", path);
        match &section.adapters {
            AdapterRequest::Empty => {}
            AdapterRequest::ByName(name) => {
                check(adapters_path, &RequestItem::Name(name.clone()));
            }
            AdapterRequest::ByList(items) => {
                for (index, item) in items.iter().enumerate() {
                    check(format!("{}[{}]", adapters_path, index), item);
                }
            }
            AdapterRequest::ByDescriptor(descriptor) => {
                check(adapters_path, &RequestItem::Descriptor(descriptor.clone()));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
