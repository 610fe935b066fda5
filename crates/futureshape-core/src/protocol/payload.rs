//! Typed payloads per route.
//!
//! Envelopes carry a raw `serde_json::Value`; handlers parse it into one of
//! these types only once the route is known.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ShapeError};

/// `{url}`: profile image source or OAuth redirect target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPayload {
    pub url: String,
}

/// `data/search` request arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub target_state: String,
    pub current_state: String,
    #[serde(alias = "majoring_target")]
    pub study_target: String,
    #[serde(default)]
    pub use_queer_scoring: bool,
}

/// Status token of a `data/search` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchResponse {
    InvalidSession,
    ProcessingRequest,
    ProcessingFinished,
    #[serde(other)]
    Unknown,
}

/// `data/search` response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatus {
    pub response: SearchResponse,
    /// Result page, present on `PROCESSING_FINISHED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `data/autocomplete` request arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteRequest {
    pub input: String,
    /// Field the suggestions are for (e.g. `target-state`).
    pub target: String,
}

/// `data/autocomplete` response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteResults {
    pub results: Vec<String>,
    pub target: String,
}

/// Parse a payload lazily. `null` is `Ok(None)`, never an error.
pub fn parse<T: DeserializeOwned>(payload: &Value) -> Result<Option<T>> {
    if payload.is_null() {
        return Ok(None);
    }
    T::deserialize(payload)
        .map(Some)
        .map_err(|e| ShapeError::Protocol(format!("invalid payload: {e}")))
}

/// Encode a request payload.
pub fn to_value<T: Serialize>(payload: &T) -> Result<Value> {
    serde_json::to_value(payload).map_err(|e| ShapeError::Internal(format!("payload encode failed: {e}")))
}
