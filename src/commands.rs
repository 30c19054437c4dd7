//! Command handlers.

use std::path::Path;

use gearbox_config::{ConfigLoader, ConfigValidator, RegistrySet};
use gearbox_core::Registry;
use gearbox_protocols::AdapterRequest;
use serde_json::Value;
use tracing::{info, warn};

/// Load the config at `path`, or the default config if `path` is `None`
/// and the default file does not exist.
pub(crate) fn load_config(path: Option<&Path>) -> Result<gearbox_config::Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&ConfigLoader::default_path())?,
    };
    Ok(config)
}

/// Parse a request given on the command line.
///
/// Input that does not look like JSON is taken as a bare adapter name.
/// Falsy JSON (`null`, `false`, `0`, `""`) is an empty request. Any other
/// JSON must have a request shape.
pub(crate) fn parse_request(raw: &str) -> Result<AdapterRequest, serde_json::Error> {
    let trimmed = raw.trim();
    let value: Value = if trimmed.starts_with(['{', '[', '"']) {
        serde_json::from_str(trimmed)?
    } else {
        match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(_) => return Ok(AdapterRequest::from(raw)),
        }
    };

    if is_falsy(&value) {
        return Ok(AdapterRequest::Empty);
    }
    serde_json::from_value(value)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub(crate) fn show(
    config: &gearbox_config::Config,
    registry: Option<&str>,
    add: &[String],
    remove: &[String],
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let mut set = RegistrySet::from_config(config)?;

    let Some(lib) = registry else {
        return Ok(set.snapshot()?);
    };

    let parse = |raw: &String| {
        parse_request(raw).map_err(|err| format!("Invalid request '{}': {}", raw, err))
    };
    let adds = add.iter().map(parse).collect::<Result<Vec<_>, _>>()?;
    let removes = remove.iter().map(parse).collect::<Result<Vec<_>, _>>()?;

    let target = set.get_or_create(lib)?;
    for request in adds {
        target.add(request);
    }
    for request in removes {
        target.remove(request);
    }
    info!(lib, adapters = target.len(), "Applied requests");

    let collection_name = target.core().collection_name();
    let snapshot = set.snapshot()?;
    Ok(snapshot
        .get(collection_name)
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new())))
}

/// Returns whether the config is valid.
pub(crate) fn validate(config: &gearbox_config::Config) -> Result<bool, Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config)?;

    for warning in &result.warnings {
        warn!(path = %warning.path, "{}", warning.message);
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }
    if result.is_valid() {
        println!("configuration is valid");
    }
    Ok(result.is_valid())
}
