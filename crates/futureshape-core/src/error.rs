//! Shared error type across futureshape crates.

use thiserror::Error;

/// Stable error codes, used as structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Frame could not be decoded or lacks required fields.
    Protocol,
    /// Send attempted while the connection is not open.
    NotConnected,
    /// Invalid configuration.
    Config,
    /// Unparseable user input (CLI commands).
    BadInput,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal failure (queue full, encode failure).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Protocol => "PROTOCOL",
            ErrorCode::NotConnected => "NOT_CONNECTED",
            ErrorCode::Config => "CONFIG",
            ErrorCode::BadInput => "BAD_INPUT",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("protocol: {0}")]
    Protocol(String),
    #[error("transport not connected")]
    NotConnected,
    #[error("config: {0}")]
    Config(String),
    #[error("bad input: {0}")]
    BadInput(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ShapeError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ShapeError::Protocol(_) => ErrorCode::Protocol,
            ShapeError::NotConnected => ErrorCode::NotConnected,
            ShapeError::Config(_) => ErrorCode::Config,
            ShapeError::BadInput(_) => ErrorCode::BadInput,
            ShapeError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ShapeError::Internal(_) => ErrorCode::Internal,
        }
    }
}
