//! Registration and removal request shapes.
//!
//! A request is either nothing, a bare adapter name, a list of names and
//! descriptors, or a single descriptor. The serde representation is
//! untagged so the same shapes can be written in JSON or TOML:
//!
//! ```json
//! "users"
//! ["users", {"name": "tasks", "type": "session"}]
//! {"name": "tasks", "type": "session", "settings": {"prefix": "app"}}
//! ```

use serde::{Deserialize, Serialize};

use crate::adapter::Settings;

/// Describes one adapter to register or remove.
///
/// `name` is required for the descriptor to have any effect; an empty
/// name counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdapterDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Adapter type; falls back to the registry's default type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub adapter_type: Option<String>,

    /// Merged over the registry's base config; these values win.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

impl AdapterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, adapter_type: impl Into<String>) -> Self {
        self.adapter_type = Some(adapter_type.into());
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// The usable name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// One element of a list request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestItem {
    Name(String),
    Descriptor(AdapterDescriptor),
}

impl RequestItem {
    pub fn name(&self) -> Option<&str> {
        match self {
            RequestItem::Name(name) if !name.is_empty() => Some(name.as_str()),
            RequestItem::Name(_) => None,
            RequestItem::Descriptor(descriptor) => descriptor.name(),
        }
    }
}

impl From<&str> for RequestItem {
    fn from(name: &str) -> Self {
        RequestItem::Name(name.to_string())
    }
}

impl From<String> for RequestItem {
    fn from(name: String) -> Self {
        RequestItem::Name(name)
    }
}

impl From<AdapterDescriptor> for RequestItem {
    fn from(descriptor: AdapterDescriptor) -> Self {
        RequestItem::Descriptor(descriptor)
    }
}

/// A request accepted by registry `add` and `remove`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdapterRequest {
    /// No request; both operations leave the collection untouched.
    #[default]
    Empty,
    ByName(String),
    ByList(Vec<RequestItem>),
    ByDescriptor(AdapterDescriptor),
}

impl AdapterRequest {
    pub fn is_empty(&self) -> bool {
        match self {
            AdapterRequest::Empty => true,
            AdapterRequest::ByName(name) => name.is_empty(),
            AdapterRequest::ByList(_) | AdapterRequest::ByDescriptor(_) => false,
        }
    }

    /// Every usable name this request refers to, in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            AdapterRequest::Empty => Vec::new(),
            AdapterRequest::ByName(name) if name.is_empty() => Vec::new(),
            AdapterRequest::ByName(name) => vec![name.as_str()],
            AdapterRequest::ByList(items) => items.iter().filter_map(RequestItem::name).collect(),
            AdapterRequest::ByDescriptor(descriptor) => descriptor.name().into_iter().collect(),
        }
    }
}

impl From<&str> for AdapterRequest {
    fn from(name: &str) -> Self {
        AdapterRequest::ByName(name.to_string())
    }
}

impl From<String> for AdapterRequest {
    fn from(name: String) -> Self {
        AdapterRequest::ByName(name)
    }
}

impl From<AdapterDescriptor> for AdapterRequest {
    fn from(descriptor: AdapterDescriptor) -> Self {
        AdapterRequest::ByDescriptor(descriptor)
    }
}

impl<T: Into<RequestItem>> From<Vec<T>> for AdapterRequest {
    fn from(items: Vec<T>) -> Self {
        AdapterRequest::ByList(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RequestItem>, const N: usize> From<[T; N]> for AdapterRequest {
    fn from(items: [T; N]) -> Self {
        AdapterRequest::ByList(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AdapterRequest>> From<Option<T>> for AdapterRequest {
    fn from(request: Option<T>) -> Self {
        request.map(Into::into).unwrap_or_default()
    }
}
