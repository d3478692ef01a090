//! HTTP transport for remote MCP servers.
//!
//! One JSON-RPC exchange per call: a single POST of the serialized envelope,
//! no persistent connection, no retries. Every failure is terminal for that
//! call and surfaces to the caller.

use crate::error::{McpError, McpResult};
use crate::protocol::{HeaderPair, JsonRpcRequest, JsonRpcResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds, enforced by the underlying HTTP client.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

/// JSON-RPC-over-HTTP transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new(config: HttpConfig) -> McpResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| McpError::unreachable(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Build the transmitted header set.
    ///
    /// Starts from `Content-Type: application/json`, then overlays stored
    /// pairs in order. Pairs with an empty name or value are dropped; on a
    /// name collision the last-applied pair wins, including over the default
    /// content type.
    fn build_headers(pairs: &[HeaderPair]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for pair in pairs {
            if pair.name.is_empty() || pair.value.is_empty() {
                continue;
            }
            let name = match HeaderName::from_bytes(pair.name.as_bytes()) {
                Ok(name) => name,
                Err(_) => {
                    warn!(header = %pair.name, "Skipping header with invalid name");
                    continue;
                }
            };
            let value = match HeaderValue::from_str(&pair.value) {
                Ok(value) => value,
                Err(_) => {
                    warn!(header = %pair.name, "Skipping header with invalid value");
                    continue;
                }
            };
            headers.insert(name, value);
        }

        headers
    }

    /// Send one JSON-RPC request and unwrap the response envelope.
    pub async fn request(
        &self,
        endpoint: &str,
        headers: &[HeaderPair],
        request: JsonRpcRequest,
    ) -> McpResult<Value> {
        debug!(method = %request.method, id = request.id, endpoint, "Sending JSON-RPC request");

        let body = serde_json::to_vec(&request)?;

        let response = self
            .client
            .post(endpoint)
            .headers(Self::build_headers(headers))
            .body(body)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "JSON-RPC transport failure");
                McpError::unreachable_hint()
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(McpError::HttpStatus {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| McpError::unreachable(format!("failed to read response body: {e}")))?;

        let envelope: JsonRpcResponse = serde_json::from_str(&text)?;

        if let Some(error) = envelope.error {
            debug!(code = error.code, message = %error.message, "JSON-RPC error response");
            return Err(McpError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(envelope.result.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_type() {
        let headers = HttpTransport::build_headers(&[]);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_empty_pairs_are_dropped() {
        let headers = HttpTransport::build_headers(&[
            HeaderPair::new("", "value"),
            HeaderPair::new("X-Empty", ""),
            HeaderPair::new("Authorization", "Bearer t"),
        ]);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Authorization").unwrap(), "Bearer t");
        assert!(headers.get("X-Empty").is_none());
    }

    #[test]
    fn test_later_pair_wins_on_collision() {
        let headers = HttpTransport::build_headers(&[
            HeaderPair::new("X-Tag", "first"),
            HeaderPair::new("X-Tag", "second"),
        ]);
        assert_eq!(headers.get("X-Tag").unwrap(), "second");
    }

    #[test]
    fn test_pair_overrides_default_content_type() {
        let headers = HttpTransport::build_headers(&[HeaderPair::new(
            "Content-Type",
            "application/json-rpc",
        )]);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json-rpc");
    }

    #[test]
    fn test_invalid_header_name_is_skipped() {
        let headers = HttpTransport::build_headers(&[
            HeaderPair::new("bad name", "x"),
            HeaderPair::new("X-Ok", "y"),
        ]);
        assert!(headers.get("X-Ok").is_some());
        // Only the default content type and the valid pair survive.
        assert_eq!(headers.len(), 2);
    }
}
