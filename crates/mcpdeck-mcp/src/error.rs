//! MCP client error types.

use thiserror::Error;

/// Result type for MCP client operations.
pub type McpResult<T> = Result<T, McpError>;

/// Errors that can occur during MCP client operations.
///
/// Every failure surfaces to the immediate caller of the public operation
/// that triggered it; nothing is retried internally, and no error leaves the
/// client unusable for subsequent calls.
#[derive(Debug, Error)]
pub enum McpError {
    /// An HTTP call was attempted before any endpoint was set.
    #[error("Not connected to any server")]
    NotConnected,

    /// Network-level failure reaching the HTTP endpoint. DNS failures,
    /// refused connections, and cross-origin rejections all collapse into
    /// this one kind.
    #[error("Connection failed: {0}")]
    Unreachable(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP error {status}: {text}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Status text reported alongside the code.
        text: String,
    },

    /// The JSON-RPC response envelope carried an `error` field.
    #[error("Server error {code}: {message}")]
    Rpc {
        /// Server-supplied JSON-RPC error code.
        code: i64,
        /// Server-supplied error message.
        message: String,
    },

    /// The native bridge reported a failure. The message is passed through
    /// verbatim, not reinterpreted.
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// The response body was not a valid JSON-RPC envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// Transport failure with the standard unreachable/cross-origin hint.
    pub fn unreachable_hint() -> Self {
        Self::Unreachable(
            "possible cross-origin restriction or server unreachable".to_string(),
        )
    }

    /// Create a transport failure error.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable(message.into())
    }

    /// Create a bridge failure error.
    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge(message.into())
    }
}
