//! Per-page-load client identity.
//!
//! The backend may fan responses out over a shared channel, so every envelope
//! carries the identity of the client it belongs to. The identity is opaque:
//! only equality matters.

use std::fmt;

use uuid::Uuid;

/// Opaque token generated once per page load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// Generate a fresh identity.
    ///
    /// A secure origin gets a random v4 UUID. An insecure origin gets the weak
    /// fallback: the decimal rendering of a random float in `[0, 1)`.
    pub fn generate(secure: bool) -> Self {
        if secure {
            Self(Uuid::new_v4().to_string())
        } else {
            Self(rand::random::<f64>().to_string())
        }
    }

    /// Wrap an existing token (fake backends, fixtures).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `client_id` addresses this client.
    pub fn matches(&self, client_id: &str) -> bool {
        self.0 == client_id
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
