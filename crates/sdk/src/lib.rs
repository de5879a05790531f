//! # Bountyhub SDK
//!
//! Rust client for the Bountyhub bounty board API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bountyhub_sdk::{BountyClient, BountyResult};
//!
//! #[tokio::main]
//! async fn main() -> BountyResult<()> {
//!     // Build client
//!     let client = BountyClient::builder()
//!         .base_url("https://api.bountyhub.io")
//!         .build()?;
//!
//!     // List open bounties
//!     let bounties = client.bounties().list().await?;
//!     println!("Found {} bounties", bounties.len());
//!
//!     // Fetch board-wide stats
//!     let stats = client.stats().get().await?;
//!     println!("{} bounties total", stats.total_bounties);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{BountyClient, BountyClientBuilder};
pub use config::ClientConfig;
pub use error::{BountyError, BountyResult};

// Re-export API types for convenience
pub use api::bounties::{ActionResponse, Bounty, ClaimRequest, SubmitRequest};
pub use api::stats::BountyStats;
