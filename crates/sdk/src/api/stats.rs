//! Stats API endpoints.

use crate::client::BountyClient;
use crate::error::BountyResult;
use serde::{Deserialize, Serialize};

/// Stats API for board-wide aggregates.
pub struct StatsApi<'a> {
    client: &'a BountyClient,
}

impl<'a> StatsApi<'a> {
    pub(crate) fn new(client: &'a BountyClient) -> Self {
        Self { client }
    }

    /// Fetch board-wide bounty stats.
    pub async fn get(&self) -> BountyResult<BountyStats> {
        self.client.http.get("/stats").await
    }
}

/// Aggregate bounty board statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyStats {
    pub total_bounties: u64,
    pub open_bounties: u64,
    pub completed_bounties: u64,
    /// Sum of rewards in minor units, string-encoded like `Bounty::reward`.
    pub total_rewards: String,
}
