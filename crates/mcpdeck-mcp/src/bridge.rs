//! Native bridge seam.
//!
//! When running inside the native host, operations are delegated to a
//! host-provided bridge instead of going over HTTP. The bridge is opaque
//! beyond the shapes below: results are trusted as-is and failures surface
//! verbatim as [`McpError::Bridge`](crate::McpError::Bridge).

use crate::error::McpResult;
use crate::protocol::{ConnectResult, HeaderPair, Prompt, Resource, Tool};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for the bridge's connect procedure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectPayload {
    pub url: String,
    pub headers: Vec<HeaderPair>,
}

/// Payload for the bridge's call-tool procedure.
///
/// `args` is `Value::Null` when the caller supplied no arguments; the null is
/// an explicit sentinel the host side expects, not an omission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolPayload {
    pub name: String,
    pub args: Value,
}

/// Host-provided remote procedures.
///
/// Implementations report failures as `McpError::Bridge` with the host's
/// message passed through unchanged.
#[async_trait]
pub trait Bridge: Send + Sync {
    /// Establish a connection; the bridge is authoritative about the result.
    async fn connect(&self, payload: ConnectPayload) -> McpResult<ConnectResult>;

    /// List available tools.
    async fn list_tools(&self) -> McpResult<Vec<Tool>>;

    /// List available resources.
    async fn list_resources(&self) -> McpResult<Vec<Resource>>;

    /// List available prompts.
    async fn list_prompts(&self) -> McpResult<Vec<Prompt>>;

    /// Invoke a tool. The result shape is opaque to this client.
    async fn call_tool(&self, payload: CallToolPayload) -> McpResult<Value>;
}
