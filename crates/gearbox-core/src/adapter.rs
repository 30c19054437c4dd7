//! Generic adapter that only keeps its configuration.

use std::any::Any;

use gearbox_protocols::{Adapter, Settings};
use serde::Serialize;

/// An adapter that records the name, type and settings it was built with.
///
/// Used for adapter types that carry no behavior of their own, and as the
/// default constructor registered from configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ConfiguredAdapter {
    name: String,
    #[serde(rename = "type")]
    adapter_type: String,
    settings: Settings,
}

impl ConfiguredAdapter {
    pub fn new(name: impl Into<String>, adapter_type: impl Into<String>, settings: Settings) -> Self {
        Self {
            name: name.into(),
            adapter_type: adapter_type.into(),
            settings,
        }
    }
}

impl Adapter for ConfiguredAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn adapter_type(&self) -> &str {
        &self.adapter_type
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_configured_adapter() {
        let settings = Settings::from([("prefix".to_string(), json!("app"))]);
        let adapter = ConfiguredAdapter::new("users", "memory", settings);

        assert_eq!(adapter.name(), "users");
        assert_eq!(adapter.adapter_type(), "memory");
        assert_eq!(adapter.settings()["prefix"], json!("app"));
    }

    #[test]
    fn test_downcast() {
        let adapter: Box<dyn Adapter> =
            Box::new(ConfiguredAdapter::new("users", "memory", Settings::new()));
        let concrete = adapter.as_any().downcast_ref::<ConfiguredAdapter>();
        assert!(concrete.is_some());
    }

    #[test]
    fn test_serialize() {
        let adapter = ConfiguredAdapter::new("users", "memory", Settings::new());
        let value = serde_json::to_value(&adapter).unwrap();
        assert_eq!(value, json!({"name": "users", "type": "memory", "settings": {}}));
    }
}
