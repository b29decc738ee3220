use serde_json::{json, Value};

use crate::server::DashboardServer;

use super::dto::{RpcError, RpcRequest, RpcResponse, ToolCall};

pub async fn handle_request(server: &DashboardServer, request: RpcRequest) -> RpcResponse {
    match request.method.as_str() {
        "tools/list" => success(
            request.id,
            json!({
                "tools": server.get_tools()
            }),
        ),
        "tools/call" => {
            let Some(params) = request.params else {
                return error(request.id, -32602, "Missing parameters".to_string());
            };
            let Ok(tool_call) = serde_json::from_value::<ToolCall>(params) else {
                return error(request.id, -32602, "Invalid tool call parameters".to_string());
            };
            match server.handle_tool_call(tool_call).await {
                Ok(result) => success(
                    request.id,
                    json!({
                        "content": [
                            { "type": "text", "text": result.content }
                        ],
                        "isError": result.is_error
                    }),
                ),
                Err(e) => error(request.id, -32603, format!("Tool execution failed: {}", e)),
            }
        }
        "initialize" => success(
            request.id,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "ping" => success(request.id, json!({ "ok": true })),
        _ => error(
            request.id,
            -32601,
            format!("Method not found: {}", request.method),
        ),
    }
}

/// Response for a line that could not be parsed as a request at all.
pub fn parse_error(details: impl std::fmt::Display) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        id: None,
        result: None,
        error: Some(RpcError {
            code: -32700,
            message: "Parse error".to_string(),
            data: Some(json!({ "details": details.to_string() })),
        }),
    }
}

fn success(id: Option<Value>, result: Value) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: Some(result),
        error: None,
    }
}

fn error(id: Option<Value>, code: i32, message: String) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(RpcError {
            code,
            message,
            data: None,
        }),
    }
}
