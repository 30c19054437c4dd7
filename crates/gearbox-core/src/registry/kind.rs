//! Registry kinds and their fixed keys.

use std::fmt;
use std::str::FromStr;

use gearbox_protocols::RegistryError;

/// Library names that refer to the registry base itself.
const BASE_NAMES: &[&str] = &["core", "base"];

/// The concrete registries a [`Gearbox`](crate::Gearbox) can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistryKind {
    DataManager,
    Authorization,
    Notifier,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 3] = [
        RegistryKind::DataManager,
        RegistryKind::Authorization,
        RegistryKind::Notifier,
    ];

    /// Namespace key used for factory lookups.
    pub fn lib(self) -> &'static str {
        match self {
            RegistryKind::DataManager => "datamanager",
            RegistryKind::Authorization => "authorization",
            RegistryKind::Notifier => "notifier",
        }
    }

    /// Name under which the registry exposes its collection.
    pub fn collection_name(self) -> &'static str {
        match self {
            RegistryKind::DataManager => "stores",
            RegistryKind::Authorization => "services",
            RegistryKind::Notifier => "clients",
        }
    }

    /// Adapter type used when a request does not name one.
    pub fn default_type(self) -> &'static str {
        match self {
            RegistryKind::DataManager => "memory",
            RegistryKind::Authorization => "oauth2",
            RegistryKind::Notifier => "simplepush",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lib())
    }
}

impl FromStr for RegistryKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lib = s.trim().to_ascii_lowercase();
        if BASE_NAMES.contains(&lib.as_str()) {
            return Err(RegistryError::InvalidBaseInstantiation(s.to_string()));
        }
        RegistryKind::ALL
            .into_iter()
            .find(|kind| kind.lib() == lib)
            .ok_or_else(|| RegistryError::UnknownLib(s.to_string()))
    }
}
