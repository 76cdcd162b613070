//! Bounty source port trait
//!
//! Defines the interface for retrieving the current bounty list.

use async_trait::async_trait;

use crate::domain::entities::Bounty;
use crate::error::FetchError;

/// Source of the current bounty list
#[async_trait]
pub trait BountySource: Send + Sync {
    /// Fetch every bounty currently listed, in upstream order
    async fn fetch_bounties(&self) -> Result<Vec<Bounty>, FetchError>;
}
