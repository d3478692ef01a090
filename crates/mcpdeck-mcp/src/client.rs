//! MCP client implementation.
//!
//! One client instance talks to one server at a time over whichever transport
//! is active: the host-provided native bridge, or JSON-RPC over HTTP.
//! Transport selection happens once at the top of each public operation, so
//! callers never branch on transport themselves.

use crate::bridge::{Bridge, CallToolPayload, ConnectPayload};
use crate::error::{McpError, McpResult};
use crate::host;
use crate::http::{HttpConfig, HttpTransport};
use crate::protocol::{
    CallToolParams, ConnectResult, HeaderPair, JsonRpcRequest, ListPromptsResult,
    ListResourcesResult, ListToolsResult, Prompt, Resource, Tool, METHOD_PROMPTS_LIST,
    METHOD_RESOURCES_LIST, METHOD_TOOLS_CALL, METHOD_TOOLS_LIST,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Per-connection state. Fully replaced by each `connect`, never merged.
#[derive(Debug, Clone, Default)]
struct ConnectionState {
    endpoint: String,
    headers: Vec<HeaderPair>,
    connected: bool,
}

/// Dual-transport MCP client.
///
/// Calling `connect` on the HTTP path performs no reachability probe; it
/// records the endpoint optimistically and the first list/call surfaces any
/// connectivity failure. The request-id counter is never reset, not even by
/// a reconnect.
pub struct McpClient {
    state: RwLock<ConnectionState>,
    /// Request ID counter; ids are issued as `counter + 1`.
    next_id: AtomicU64,
    http: HttpTransport,
    bridge: Option<Arc<dyn Bridge>>,
    detect_native: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl McpClient {
    /// Create a new MCP client with the default HTTP configuration.
    pub fn new() -> McpResult<Self> {
        Self::with_config(HttpConfig::default())
    }

    /// Create a new MCP client with an explicit HTTP configuration.
    pub fn with_config(config: HttpConfig) -> McpResult<Self> {
        Ok(Self {
            state: RwLock::new(ConnectionState::default()),
            next_id: AtomicU64::new(0),
            http: HttpTransport::new(config)?,
            bridge: None,
            detect_native: Arc::new(host::is_native_host),
        })
    }

    /// Install the native bridge used when running inside the host.
    pub fn with_bridge(mut self, bridge: Arc<dyn Bridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Replace the ambient host probe, mainly for tests.
    pub fn with_detector(mut self, detect: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.detect_native = Arc::new(detect);
        self
    }

    /// Get the next request ID. Strictly increasing for the lifetime of the
    /// client; consumed even by calls that subsequently fail.
    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The bridge to dispatch to, iff the host probe fires and a bridge is
    /// installed. Otherwise operations take the HTTP path.
    fn active_bridge(&self) -> Option<Arc<dyn Bridge>> {
        if (self.detect_native)() {
            self.bridge.clone()
        } else {
            None
        }
    }

    /// Connect to an MCP server.
    ///
    /// Overwrites the stored endpoint and headers before dispatch
    /// (last-write-wins). On the native path the bridge is authoritative
    /// about the result; on the HTTP path the client marks itself connected
    /// without probing the server.
    pub async fn connect(
        &self,
        url: impl Into<String>,
        headers: Vec<HeaderPair>,
    ) -> McpResult<ConnectResult> {
        let url = url.into();

        {
            let mut state = self.state.write().await;
            state.endpoint = url.clone();
            state.headers = headers.clone();
        }

        if let Some(bridge) = self.active_bridge() {
            debug!(url = %url, "Connecting via native bridge");
            return bridge.connect(ConnectPayload { url, headers }).await;
        }

        let mut state = self.state.write().await;
        state.connected = true;
        info!(url = %state.endpoint, header_count = state.headers.len(), "MCP endpoint set");

        Ok(ConnectResult {
            connected: true,
            url: state.endpoint.clone(),
            headers: state.headers.clone(),
        })
    }

    /// List available tools.
    pub async fn list_tools(&self) -> McpResult<Vec<Tool>> {
        if let Some(bridge) = self.active_bridge() {
            return bridge.list_tools().await;
        }
        let result = self.rpc_request(METHOD_TOOLS_LIST, None).await?;
        let result: ListToolsResult = unwrap_list(result)?;
        Ok(result.tools)
    }

    /// List available resources.
    pub async fn list_resources(&self) -> McpResult<Vec<Resource>> {
        if let Some(bridge) = self.active_bridge() {
            return bridge.list_resources().await;
        }
        let result = self.rpc_request(METHOD_RESOURCES_LIST, None).await?;
        let result: ListResourcesResult = unwrap_list(result)?;
        Ok(result.resources)
    }

    /// List available prompts.
    pub async fn list_prompts(&self) -> McpResult<Vec<Prompt>> {
        if let Some(bridge) = self.active_bridge() {
            return bridge.list_prompts().await;
        }
        let result = self.rpc_request(METHOD_PROMPTS_LIST, None).await?;
        let result: ListPromptsResult = unwrap_list(result)?;
        Ok(result.prompts)
    }

    /// Call a tool by name. The result shape is the server's concern and is
    /// returned verbatim.
    ///
    /// With no arguments the bridge receives an explicit `null` while the
    /// HTTP path sends an empty object; conformant servers accept both as
    /// "no arguments".
    pub async fn call_tool(
        &self,
        name: impl Into<String>,
        args: Option<Value>,
    ) -> McpResult<Value> {
        let name = name.into();

        if let Some(bridge) = self.active_bridge() {
            debug!(tool = %name, "Calling tool via native bridge");
            return bridge
                .call_tool(CallToolPayload {
                    name,
                    args: args.unwrap_or(Value::Null),
                })
                .await;
        }

        debug!(tool = %name, "Calling tool via HTTP");
        let params = CallToolParams {
            name,
            arguments: args.unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        };
        self.rpc_request(METHOD_TOOLS_CALL, Some(serde_json::to_value(&params)?))
            .await
    }

    /// Whether a `connect` has completed on this client.
    ///
    /// On the HTTP path this does not imply the server is reachable.
    pub async fn is_connected(&self) -> bool {
        self.state.read().await.connected
    }

    /// The currently configured endpoint URL, empty when not connected.
    pub async fn endpoint(&self) -> String {
        self.state.read().await.endpoint.clone()
    }

    /// The currently configured header pairs.
    pub async fn headers(&self) -> Vec<HeaderPair> {
        self.state.read().await.headers.clone()
    }

    /// Issue one JSON-RPC call over HTTP.
    ///
    /// Endpoint and headers are captured here, at envelope-build time; a
    /// racing `connect` affects this call only if it lands before the
    /// snapshot. The not-connected check precedes id assignment, so a call
    /// rejected here consumes no request id.
    async fn rpc_request(&self, method: &str, params: Option<Value>) -> McpResult<Value> {
        let (endpoint, headers) = {
            let state = self.state.read().await;
            (state.endpoint.clone(), state.headers.clone())
        };

        if endpoint.is_empty() {
            return Err(McpError::NotConnected);
        }

        let request = JsonRpcRequest::new(self.next_request_id(), method, params);
        self.http.request(&endpoint, &headers, request).await
    }
}

/// Unwrap a list result, tolerating a `null` result the same way an absent
/// array field is tolerated: as an empty listing.
fn unwrap_list<T: DeserializeOwned + Default>(result: Value) -> McpResult<T> {
    if result.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(result)?)
}
