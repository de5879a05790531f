//! API endpoint groups for the Bountyhub SDK.

pub mod bounties;
pub mod stats;

pub use bounties::BountiesApi;
pub use stats::StatsApi;
