//! MCP protocol types.
//!
//! JSON-RPC envelope and the slice of the MCP data model this client uses
//! (tool/resource/prompt discovery and tool invocation).
//! See: <https://spec.modelcontextprotocol.io/>

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC protocol version.
pub const JSONRPC_VERSION: &str = "2.0";

/// Method name for tool discovery.
pub const METHOD_TOOLS_LIST: &str = "tools/list";
/// Method name for resource discovery.
pub const METHOD_RESOURCES_LIST: &str = "resources/list";
/// Method name for prompt discovery.
pub const METHOD_PROMPTS_LIST: &str = "prompts/list";
/// Method name for tool invocation.
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// JSON-RPC request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request.
    pub fn new(id: u64, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response.
///
/// Exactly one of `result`/`error` is expected; the `jsonrpc` field is
/// tolerated as absent since some HTTP adapters omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A single HTTP header to send with JSON-RPC requests.
///
/// Pairs with an empty name or empty value are dropped when the transmitted
/// header set is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPair {
    pub name: String,
    pub value: String,
}

impl HeaderPair {
    /// Create a header pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result of a `connect` call, echoing the state that was just established.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectResult {
    pub connected: bool,
    pub url: String,
    pub headers: Vec<HeaderPair>,
}

/// MCP tool definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name, unique within a listing.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// JSON Schema for the tool's input.
    #[serde(skip_serializing_if = "Option::is_none", alias = "input_schema")]
    pub input_schema: Option<Value>,
}

/// MCP resource definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource URI, unique within a listing.
    pub uri: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "mime_type")]
    pub mime_type: Option<String>,
}

/// MCP prompt definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Prompt name, unique within a listing.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `tools/list` result.
///
/// The array field defaults to empty: a server that omits an empty list is
/// treated identically to one that returns an explicit empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListToolsResult {
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// `resources/list` result. Same missing-field leniency as tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResourcesResult {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// `prompts/list` result. Same missing-field leniency as tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPromptsResult {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

/// `tools/call` parameters for the HTTP path.
///
/// `arguments` is always present; callers that supply no arguments send an
/// empty object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = JsonRpcRequest::new(1, METHOD_TOOLS_CALL, Some(serde_json::json!({"a": 1})));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"method\":\"tools/call\""));
    }

    #[test]
    fn test_request_omits_absent_params() {
        let req = JsonRpcRequest::new(7, METHOD_TOOLS_LIST, None);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("params").is_none());
    }

    #[test]
    fn test_response_without_jsonrpc_field() {
        let response: JsonRpcResponse =
            serde_json::from_str(r#"{"id":1,"result":{"tools":[]}}"#).unwrap();
        assert_eq!(response.id, 1);
        assert!(response.result.is_some());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_response_error_envelope() {
        let response: JsonRpcResponse =
            serde_json::from_str(r#"{"id":2,"error":{"code":-32601,"message":"Method not found"}}"#)
                .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Method not found");
    }

    #[test]
    fn test_list_tools_missing_field_defaults_empty() {
        let result: ListToolsResult = serde_json::from_str("{}").unwrap();
        assert!(result.tools.is_empty());
    }

    #[test]
    fn test_tool_deserialization() {
        let tool: Tool = serde_json::from_str(
            r#"{"name":"echo","description":"Echoes input","inputSchema":{"type":"object"}}"#,
        )
        .unwrap();
        assert_eq!(tool.name, "echo");
        assert_eq!(tool.description.as_deref(), Some("Echoes input"));
        assert!(tool.input_schema.is_some());
    }

    #[test]
    fn test_resource_accepts_snake_case_alias() {
        let resource: Resource =
            serde_json::from_str(r#"{"uri":"file:///a","name":"a","mime_type":"text/plain"}"#)
                .unwrap();
        assert_eq!(resource.mime_type.as_deref(), Some("text/plain"));
    }
}
