//! Dual-transport Model Context Protocol (MCP) client for mcpdeck.
//!
//! The client talks to one MCP server (tool/resource/prompt discovery and
//! tool invocation) over whichever transport the environment provides:
//!
//! ```text
//! ┌──────────┐     ┌────────────┐     ┌── native bridge ──▶ host runtime
//! │ mcpdeck  │────▶│ McpClient  │─────┤
//! │   (UI)   │◀────│            │     └── JSON-RPC/HTTP ──▶ MCP server
//! └──────────┘     └────────────┘
//! ```
//!
//! Transport selection happens per call: when the ambient host probe fires
//! and a [`Bridge`] is installed, operations pass through to the host;
//! otherwise each operation is a single JSON-RPC POST to the configured
//! endpoint. Both transports present the same contract, so callers never
//! branch on transport.
//!
//! `connect` on the HTTP path is optimistic: it records the endpoint and
//! headers without probing the server, and the first list/call surfaces any
//! connectivity failure.
//!
//! # Example
//!
//! ```no_run
//! use mcpdeck_mcp::{HeaderPair, McpClient};
//!
//! # async fn example() -> mcpdeck_mcp::McpResult<()> {
//! let client = McpClient::new()?;
//! client
//!     .connect(
//!         "http://localhost:8003/mcp",
//!         vec![HeaderPair::new("Authorization", "Bearer token")],
//!     )
//!     .await?;
//!
//! let tools = client.list_tools().await?;
//! let result = client
//!     .call_tool("echo", Some(serde_json::json!({"text": "hi"})))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod bridge;
mod client;
mod error;
pub mod host;
mod http;
pub mod protocol;

pub use bridge::{Bridge, CallToolPayload, ConnectPayload};
pub use client::McpClient;
pub use error::{McpError, McpResult};
pub use http::{HttpConfig, HttpTransport};
pub use protocol::{ConnectResult, HeaderPair, Prompt, Resource, Tool};
