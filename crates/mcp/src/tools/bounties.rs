// Bounty board tools

use crate::format::{format_bounty_details, format_bounty_list, format_stats};
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use bountyhub_sdk::{Bounty, BountyClient, ClaimRequest, SubmitRequest};
use serde::Deserialize;
use std::sync::Arc;

const CLAIM_FALLBACK_MESSAGE: &str = "Bounty claimed successfully.";
const SUBMIT_FALLBACK_MESSAGE: &str = "Work submitted successfully.";

/// Status filter accepted by `list_bounties`. Values outside this set are
/// rejected during argument deserialization, before any remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StatusFilter {
    Open,
    Claimed,
    Completed,
    All,
}

impl StatusFilter {
    fn as_str(self) -> &'static str {
        match self {
            StatusFilter::Open => "open",
            StatusFilter::Claimed => "claimed",
            StatusFilter::Completed => "completed",
            StatusFilter::All => "all",
        }
    }
}

/// Apply the status and tag filters locally, preserving board order.
/// The remote API has no filter parameters.
fn filter_bounties(
    mut bounties: Vec<Bounty>,
    status: Option<StatusFilter>,
    tag: Option<&str>,
) -> Vec<Bounty> {
    if let Some(status) = status {
        if status != StatusFilter::All {
            bounties.retain(|b| b.status == status.as_str());
        }
    }

    if let Some(tag) = tag {
        bounties.retain(|b| b.tags.iter().any(|t| t == tag));
    }

    bounties
}

/// Tool to list bounties with optional status/tag filters
pub struct ListBountiesTool {
    client: Arc<BountyClient>,
}

impl ListBountiesTool {
    pub fn new(client: Arc<BountyClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListBountiesArgs {
    #[serde(default)]
    status: Option<StatusFilter>,
    #[serde(default)]
    tag: Option<String>,
}

#[async_trait::async_trait]
impl Tool for ListBountiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_bounties".to_string(),
            description: "List bounties on the board, optionally filtered by status or tag"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "status": {
                        "type": "string",
                        "description": "Filter by bounty status",
                        "enum": ["open", "claimed", "completed", "all"]
                    },
                    "tag": json_schema_string("Only include bounties carrying this tag")
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListBountiesArgs =
            serde_json::from_value(arguments).context("Invalid arguments for list_bounties")?;

        match self.client.bounties().list().await {
            Ok(bounties) => {
                let filtered = filter_bounties(bounties, args.status, args.tag.as_deref());
                Ok(CallToolResult::text(format_bounty_list(&filtered)))
            }
            Err(e) => Ok(CallToolResult::error(e.to_string())),
        }
    }
}

/// Tool to show one bounty in full
pub struct GetBountyTool {
    client: Arc<BountyClient>,
}

impl GetBountyTool {
    pub fn new(client: Arc<BountyClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetBountyArgs {
    id: String,
}

#[async_trait::async_trait]
impl Tool for GetBountyTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_bounty".to_string(),
            description: "Get full details for a single bounty by its id".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "id": json_schema_string("The bounty id to look up")
                }),
                vec!["id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetBountyArgs =
            serde_json::from_value(arguments).context("Invalid arguments for get_bounty")?;

        match self.client.bounties().get(&args.id).await {
            Ok(bounty) => Ok(CallToolResult::text(format_bounty_details(&bounty))),
            Err(e) => Ok(CallToolResult::error(e.to_string())),
        }
    }
}

/// Tool to fetch board-wide stats
pub struct GetStatsTool {
    client: Arc<BountyClient>,
}

impl GetStatsTool {
    pub fn new(client: Arc<BountyClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetStatsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_stats".to_string(),
            description: "Get aggregate bounty board statistics".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.stats().get().await {
            Ok(stats) => Ok(CallToolResult::text(format_stats(&stats))),
            Err(e) => Ok(CallToolResult::error(e.to_string())),
        }
    }
}

/// Tool to claim a bounty for a wallet
pub struct ClaimBountyTool {
    client: Arc<BountyClient>,
}

impl ClaimBountyTool {
    pub fn new(client: Arc<BountyClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ClaimBountyArgs {
    id: String,
    wallet: String,
    #[serde(default)]
    name: Option<String>,
}

#[async_trait::async_trait]
impl Tool for ClaimBountyTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "claim_bounty".to_string(),
            description: "Claim an open bounty for a wallet address".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "id": json_schema_string("The bounty id to claim"),
                    "wallet": json_schema_string("Wallet address the claim is made for"),
                    "name": json_schema_string("Display name to show on the claim")
                }),
                vec!["id", "wallet"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ClaimBountyArgs =
            serde_json::from_value(arguments).context("Invalid arguments for claim_bounty")?;

        let request = ClaimRequest {
            wallet: args.wallet,
            name: args.name,
        };

        match self.client.bounties().claim(&args.id, request).await {
            Ok(response) => Ok(CallToolResult::text(
                response
                    .message
                    .unwrap_or_else(|| CLAIM_FALLBACK_MESSAGE.to_string()),
            )),
            Err(e) => Ok(CallToolResult::error(e.to_string())),
        }
    }
}

/// Tool to submit completed work for a claimed bounty
pub struct SubmitWorkTool {
    client: Arc<BountyClient>,
}

impl SubmitWorkTool {
    pub fn new(client: Arc<BountyClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitWorkArgs {
    id: String,
    wallet: String,
    proof_url: String,
    description: String,
}

#[async_trait::async_trait]
impl Tool for SubmitWorkTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "submit_work".to_string(),
            description: "Submit completed work for a bounty with a proof link".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "id": json_schema_string("The bounty id the work is for"),
                    "wallet": json_schema_string("Wallet address that claimed the bounty"),
                    "proofUrl": json_schema_string("Link proving the work (PR, deployment, etc.)"),
                    "description": json_schema_string("Short description of the submitted work")
                }),
                vec!["id", "wallet", "proofUrl", "description"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SubmitWorkArgs =
            serde_json::from_value(arguments).context("Invalid arguments for submit_work")?;

        let request = SubmitRequest {
            wallet: args.wallet,
            proof_url: args.proof_url,
            description: args.description,
        };

        match self.client.bounties().submit(&args.id, request).await {
            Ok(response) => Ok(CallToolResult::text(
                response
                    .message
                    .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string()),
            )),
            Err(e) => Ok(CallToolResult::error(e.to_string())),
        }
    }
}
