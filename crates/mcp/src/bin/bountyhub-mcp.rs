// Standalone MCP server binary for the Bountyhub bounty board

use anyhow::Result;
use bountyhub_mcp::server::McpServer;
use bountyhub_mcp::tools::*;
use bountyhub_sdk::BountyClient;
use std::sync::Arc;

const DEFAULT_API_URL: &str = "https://api.bountyhub.io";

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is reserved for protocol messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let base_url =
        std::env::var("BOUNTYHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    tracing::info!(base_url = %base_url, "Bountyhub MCP server starting");

    let client = Arc::new(BountyClient::builder().base_url(base_url).build()?);

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ListBountiesTool::new(client.clone())));
    registry.register(Arc::new(GetBountyTool::new(client.clone())));
    registry.register(Arc::new(GetStatsTool::new(client.clone())));
    registry.register(Arc::new(ClaimBountyTool::new(client.clone())));
    registry.register(Arc::new(SubmitWorkTool::new(client)));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
