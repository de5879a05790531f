// MCP server: newline-delimited JSON-RPC 2.0 over stdio.
//
// stdout carries protocol messages only; all diagnostics go to stderr
// via tracing. Requests are handled to completion in arrival order.

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "bountyhub-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve requests from stdin until it closes.
    pub async fn start(&self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = BufReader::new(stdin).lines();

        info!("MCP server listening on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(r) => r,
                Err(e) => {
                    debug!(error = %e, "Discarding unparseable request line");
                    let response =
                        JsonRpcResponse::error(serde_json::Value::Null, JsonRpcError::parse_error());
                    write_response(&mut stdout, &response).await?;
                    continue;
                }
            };

            if let Some(response) = self.handle_request(request).await {
                write_response(&mut stdout, &response).await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Dispatch a single request. Notifications (no id) get no response.
    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            debug!(method = %request.method, "Notification");
            return None;
        };

        debug!(method = %request.method, "Handling request");

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };

        Some(response)
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        }
    }

    async fn handle_tool_call(
        &self,
        id: serde_json::Value,
        params: serde_json::Value,
    ) -> JsonRpcResponse {
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return JsonRpcResponse::error(id, JsonRpcError::invalid_params(e.to_string()))
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)),
            );
        };

        match tool.execute(params.arguments).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
        }
    }
}

async fn write_response(stdout: &mut io::Stdout, response: &JsonRpcResponse) -> Result<()> {
    let mut payload = serde_json::to_vec(response)?;
    payload.push(b'\n');
    stdout.write_all(&payload).await?;
    stdout.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{
        ClaimBountyTool, GetBountyTool, GetStatsTool, ListBountiesTool, SubmitWorkTool,
    };
    use bountyhub_sdk::BountyClient;
    use std::sync::Arc;

    fn test_server() -> McpServer {
        let client = Arc::new(
            BountyClient::builder()
                .base_url("http://localhost:9")
                .build()
                .unwrap(),
        );

        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(ListBountiesTool::new(client.clone())));
        registry.register(Arc::new(GetBountyTool::new(client.clone())));
        registry.register(Arc::new(GetStatsTool::new(client.clone())));
        registry.register(Arc::new(ClaimBountyTool::new(client.clone())));
        registry.register(Arc::new(SubmitWorkTool::new(client)));

        McpServer::new(registry)
    }

    fn request(id: i64, method: &str, params: serde_json::Value) -> JsonRpcRequest {
        serde_json::from_value(serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = test_server();
        let response = server
            .handle_request(request(1, "initialize", serde_json::json!({})))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_tools_list_exposes_all_five_tools() {
        let server = test_server();
        let response = server
            .handle_request(request(2, "tools/list", serde_json::json!({})))
            .await
            .unwrap();

        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 5);

        let mut names: Vec<String> = tools
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "claim_bounty",
                "get_bounty",
                "get_stats",
                "list_bounties",
                "submit_work"
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = test_server();
        let response = server
            .handle_request(request(3, "resources/list", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_tool_call_with_unknown_tool() {
        let server = test_server();
        let response = server
            .handle_request(request(
                4,
                "tools/call",
                serde_json::json!({"name": "steal_bounty", "arguments": {}}),
            ))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_tool_call_with_malformed_params() {
        let server = test_server();
        let response = server
            .handle_request(request(5, "tools/call", serde_json::json!({"arguments": {}})))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_tool_call_with_invalid_arguments_is_rpc_error() {
        let server = test_server();
        let response = server
            .handle_request(request(
                6,
                "tools/call",
                serde_json::json!({
                    "name": "list_bounties",
                    "arguments": {"status": "abandoned"}
                }),
            ))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, -32603);
        assert!(error.message.contains("list_bounties"));
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let server = test_server();
        let notification: JsonRpcRequest = serde_json::from_value(serde_json::json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();

        assert!(server.handle_request(notification).await.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let server = test_server();
        let response = server
            .handle_request(request(7, "ping", serde_json::json!({})))
            .await
            .unwrap();

        assert!(response.error.is_none());
    }
}
