//! Bounties API endpoints.

use crate::client::BountyClient;
use crate::error::{BountyError, BountyResult};
use serde::{Deserialize, Serialize};

/// Bounties API for listing, claiming, and submitting work on bounties.
pub struct BountiesApi<'a> {
    client: &'a BountyClient,
}

impl<'a> BountiesApi<'a> {
    pub(crate) fn new(client: &'a BountyClient) -> Self {
        Self { client }
    }

    /// List all bounties on the board, in the order the board returns them.
    pub async fn list(&self) -> BountyResult<Vec<Bounty>> {
        self.client.http.get("/bounties").await
    }

    /// Get a single bounty by id.
    ///
    /// The board has no by-id endpoint, so this fetches the full listing
    /// and scans for the first match.
    pub async fn get(&self, id: &str) -> BountyResult<Bounty> {
        let bounties = self.list().await?;
        bounties
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BountyError::NotFound(id.to_string()))
    }

    /// Claim a bounty for the given wallet.
    pub async fn claim(&self, id: &str, request: ClaimRequest) -> BountyResult<ActionResponse> {
        self.client
            .http
            .post(&format!("/bounties/{}/claim", id), &request)
            .await
    }

    /// Submit completed work for a bounty.
    pub async fn submit(&self, id: &str, request: SubmitRequest) -> BountyResult<ActionResponse> {
        self.client
            .http
            .post(&format!("/bounties/{}/submit", id), &request)
            .await
    }
}

/// A bounty on the board.
///
/// Constructed fresh from each response; the remote service is the sole
/// owner of bounty state and all mutation happens there.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounty {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Reward in minor units of a 6-decimal token, string-encoded.
    pub reward: String,
    /// open/claimed/completed, or whatever else the board reports.
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Request to claim a bounty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub wallet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request to submit work for a bounty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub wallet: String,
    pub proof_url: String,
    pub description: String,
}

/// Response from a claim or submit call.
///
/// The board's success message is optional; callers resolve the fallback
/// at the formatting boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BountyClient;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_bounties() -> serde_json::Value {
        serde_json::json!([
            {
                "id": "b-1",
                "title": "Fix the parser",
                "description": "The tokenizer chokes on unicode.",
                "reward": "30000000",
                "status": "open",
                "tags": ["rust", "parser"]
            },
            {
                "id": "b-2",
                "title": "Write docs",
                "description": "Document the API.",
                "reward": "5000000",
                "status": "completed",
                "tags": [],
                "claimedBy": "0xabc",
                "deadline": "2026-09-01"
            }
        ])
    }

    fn client_for(server: &MockServer) -> BountyClient {
        BountyClient::builder()
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_preserves_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bounties"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_bounties()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let bounties = client.bounties().list().await.unwrap();

        assert_eq!(bounties.len(), 2);
        assert_eq!(bounties[0].id, "b-1");
        assert_eq!(bounties[1].id, "b-2");
        assert_eq!(bounties[1].claimed_by.as_deref(), Some("0xabc"));
        assert!(bounties[0].claimed_by.is_none());
    }

    #[tokio::test]
    async fn test_get_finds_bounty_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bounties"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_bounties()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let bounty = client.bounties().get("b-2").await.unwrap();

        assert_eq!(bounty.title, "Write docs");
    }

    #[tokio::test]
    async fn test_get_missing_bounty_names_the_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bounties"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_bounties()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.bounties().get("b-999").await;

        match result {
            Err(BountyError::NotFound(id)) => assert_eq!(id, "b-999"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[tokio::test]
    async fn test_claim_posts_wallet_and_name() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bounties/b-1/claim"))
            .and(body_json(serde_json::json!({
                "wallet": "0xwallet",
                "name": "alice"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "claimed, good luck"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .bounties()
            .claim(
                "b-1",
                ClaimRequest {
                    wallet: "0xwallet".to_string(),
                    name: Some("alice".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.message.as_deref(), Some("claimed, good luck"));
    }

    #[tokio::test]
    async fn test_claim_without_name_omits_the_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bounties/b-1/claim"))
            .and(body_json(serde_json::json!({"wallet": "0xwallet"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .bounties()
            .claim(
                "b-1",
                ClaimRequest {
                    wallet: "0xwallet".to_string(),
                    name: None,
                },
            )
            .await
            .unwrap();

        assert!(response.message.is_none());
    }

    #[tokio::test]
    async fn test_claim_failure_carries_remote_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bounties/b-1/claim"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({"message": "bounty already claimed"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .bounties()
            .claim(
                "b-1",
                ClaimRequest {
                    wallet: "0xwallet".to_string(),
                    name: None,
                },
            )
            .await;

        match result {
            Err(BountyError::Api { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message, "bounty already claimed");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[tokio::test]
    async fn test_submit_posts_camel_case_proof_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bounties/b-1/submit"))
            .and(body_json(serde_json::json!({
                "wallet": "0xwallet",
                "proofUrl": "https://github.com/me/fix/pull/1",
                "description": "Fixed in linked PR"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "submission received"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .bounties()
            .submit(
                "b-1",
                SubmitRequest {
                    wallet: "0xwallet".to_string(),
                    proof_url: "https://github.com/me/fix/pull/1".to_string(),
                    description: "Fixed in linked PR".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.message.as_deref(), Some("submission received"));
    }
}
