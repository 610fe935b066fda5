//! Envelope (JSON text frame).
//!
//! Canonical field names are `category`, `topic`, `payload`, `client_id`.
//! Older frontends wrote `request_*`/`response_*` and `transport_client_id`;
//! those names are accepted on read, never written.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ShapeError};
use crate::identity::ClientIdentity;

/// Top-level routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Data,
    Oauth,
    /// Any category this client does not know. Never routed.
    #[serde(other)]
    Unknown,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Data => "data",
            Category::Oauth => "oauth",
            Category::Unknown => "unknown",
        }
    }
}

/// One request or response on the wire.
///
/// `payload` is required: `null` is a meaningful value ("no image",
/// "session invalid") and is kept distinct from a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(alias = "request_type", alias = "response_type")]
    pub category: Category,
    #[serde(alias = "request_data", alias = "response_data")]
    pub topic: String,
    #[serde(alias = "request_args", alias = "response_args")]
    pub payload: Value,
    #[serde(alias = "transport_client_id")]
    pub client_id: String,
}

/// Envelope without a client id. The transport stamps it on send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub category: Category,
    pub topic: String,
    pub payload: Value,
}

impl Request {
    /// Build a request; an absent payload is sent as `null`.
    pub fn new(category: Category, topic: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            category,
            topic: topic.into(),
            payload: payload.unwrap_or(Value::Null),
        }
    }

    pub fn stamp(self, identity: &ClientIdentity) -> Envelope {
        Envelope {
            category: self.category,
            topic: self.topic,
            payload: self.payload,
            client_id: identity.as_str().to_owned(),
        }
    }
}

/// Decode one text frame.
pub fn decode(text: &str) -> Result<Envelope> {
    serde_json::from_str(text).map_err(|e| ShapeError::Protocol(format!("invalid envelope json: {e}")))
}

/// Encode one envelope as a text frame.
pub fn encode(env: &Envelope) -> Result<String> {
    serde_json::to_string(env).map_err(|e| ShapeError::Internal(format!("envelope encode failed: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn absent_payload_becomes_null() {
        let req = Request::new(Category::Data, "user-profile-image", None);
        assert_eq!(req.payload, Value::Null);
    }

    #[test]
    fn stamp_writes_canonical_names() {
        let id = ClientIdentity::from_raw("c-1");
        let env = Request::new(Category::Oauth, "register", None).stamp(&id);
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(
            v,
            json!({"category": "oauth", "topic": "register", "payload": null, "client_id": "c-1"})
        );
    }

    #[test]
    fn unknown_category_is_not_an_error() {
        let env: Envelope = serde_json::from_str(
            r#"{"category":"telemetry","topic":"x","payload":1,"client_id":"c"}"#,
        )
        .unwrap();
        assert_eq!(env.category, Category::Unknown);
    }
}
