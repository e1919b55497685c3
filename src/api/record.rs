use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Alias reported by the service for containers that are not attached to the
/// network under any name. Rows carrying it cannot be addressed for updates.
pub const MISSING_ALIAS: &str = "-MISSING-";

/// Network alias of a container: the list key and the update path segment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Alias(String);

impl Alias {
    pub fn new(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the update endpoint can address this alias.
    pub fn is_addressable(&self) -> bool {
        !self.0.is_empty() && self.0 != MISSING_ALIAS
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Alias {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Alias {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One element of the `GET /config` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    pub alias: Alias,
    /// Display-only status label, e.g. `running`.
    pub state: String,
    /// `KEY=VALUE` entries in the order the container was configured with.
    pub env: Vec<String>,
}

/// `PUT /config/{alias}/` request payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnvUpdateRequest {
    pub env: Vec<String>,
}
