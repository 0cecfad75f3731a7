//! MCP Server implementation using JSON-RPC 2.0 over stdio
//!
//! Implements the minimal MCP protocol:
//! - `initialize` - Return server info and capabilities
//! - `tools/list` - Return available tool definitions
//! - `tools/call` - Execute a tool and return result
//!
//! Requests are handled one at a time in arrival order.

use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::tools::{ToolContext, ToolRegistry};

const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP Server for handling JSON-RPC requests over stdio
pub struct McpServer {
    server_name: String,
    tool_registry: ToolRegistry,
    tool_context: ToolContext,
}

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    /// `None` only when the member is absent; `"id": null` is `Some(Null)`
    #[serde(default, deserialize_with = "present_id")]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

fn present_id<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

// JSON-RPC error codes
const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
        }
    }
}

impl McpServer {
    pub fn new(server_name: impl Into<String>, tool_context: ToolContext) -> Self {
        Self {
            server_name: server_name.into(),
            tool_registry: ToolRegistry::new(),
            tool_context,
        }
    }

    /// Run the MCP server, reading from stdin and writing to stdout
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!(
            root = %self.tool_context.project_root().display(),
            commands = %self.tool_context.loader().commands_dir().display(),
            "server started, waiting for requests"
        );

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "read error");
                    break;
                }
            };

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.handle_request(&line) else {
                continue;
            };

            let mut response_json = serde_json::to_string(&response)?;
            response_json.push('\n');
            stdout.write_all(response_json.as_bytes()).await?;
            stdout.flush().await?;
        }

        info!("server stopped");
        Ok(())
    }

    /// Handle a single JSON-RPC line. Notifications get no response.
    fn handle_request(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::failure(
                request.id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ));
        }

        let Some(id) = request.id.clone() else {
            debug!(method = %request.method, "notification received");
            return None;
        };

        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.tool_registry.list_tools() })),
            "tools/call" => self.handle_tools_call(&request.params),
            "shutdown" => {
                info!("shutdown requested");
                Ok(json!({}))
            }
            _ => Err((
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err((code, message)) => JsonRpcResponse::failure(id, code, message),
        })
    }

    /// Handle `initialize` request
    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": self.server_name,
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {}
            }
        })
    }

    /// Handle `tools/call` request
    fn handle_tools_call(&self, params: &Option<Value>) -> std::result::Result<Value, (i32, String)> {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing tool name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match self
            .tool_registry
            .call_tool(name, &arguments, &self.tool_context)
        {
            Ok(text) => Ok(json!({
                "content": [{
                    "type": "text",
                    "text": text
                }]
            })),
            Err(e) => {
                debug!(tool = name, error = %e, "tool returned an error");
                Ok(json!({
                    "content": [{
                        "type": "text",
                        "text": format!("Error: {}", e)
                    }],
                    "isError": true
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::tools::test_support::{configure, project};

    fn call(server: &McpServer, request: Value) -> Value {
        let response = server.handle_request(&request.to_string()).unwrap();
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_parse_request() {
        let json = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.method, "initialize");
        assert_eq!(request.jsonrpc, "2.0");
    }

    #[test]
    fn test_serialize_response() {
        let response = JsonRpcResponse::success(json!(1), json!({"status": "ok"}));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_initialize() {
        let (_dir, ctx) = project();
        let server = McpServer::new("sdd-mcp", ctx);
        let response = call(&server, json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"}));
        assert_eq!(response["result"]["serverInfo"]["name"], "sdd-mcp");
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
    }

    #[test]
    fn test_notification_has_no_response() {
        let (_dir, ctx) = project();
        let server = McpServer::new("sdd-mcp", ctx);
        let line = json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string();
        assert!(server.handle_request(&line).is_none());
    }

    #[test]
    fn test_null_id_is_answered() {
        let (_dir, ctx) = project();
        let server = McpServer::new("sdd-mcp", ctx);
        let line = r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#;

        let request: JsonRpcRequest = serde_json::from_str(line).unwrap();
        assert_eq!(request.id, Some(Value::Null));

        let response = serde_json::to_value(server.handle_request(line).unwrap()).unwrap();
        assert_eq!(response["id"], Value::Null);
        assert_eq!(response["result"], json!({}));
    }

    #[test]
    fn test_protocol_errors() {
        let (_dir, ctx) = project();
        let server = McpServer::new("sdd-mcp", ctx);

        let response = serde_json::to_value(server.handle_request("{not json").unwrap()).unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert_eq!(response["id"], Value::Null);

        let response = call(&server, json!({"jsonrpc": "1.0", "id": 2, "method": "ping"}));
        assert_eq!(response["error"]["code"], INVALID_REQUEST);

        let response = call(&server, json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"}));
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);

        let response = call(&server, json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call"}));
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[test]
    fn test_tools_call_success_and_gate() {
        let (dir, ctx) = project();
        let server = McpServer::new("sdd-mcp", ctx);
        let request = json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {
                "name": "create-spec",
                "arguments": {"feature_name": "Login", "problem_statement": "No sign in"}
            }
        });

        let response = call(&server, request.clone());
        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Error: Project is not configured"));

        configure(dir.path());
        let response = call(&server, request);
        assert!(response["result"].get("isError").is_none());
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# CREATE-SPEC Command Workflow"));
    }
}
