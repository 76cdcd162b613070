//! Mock implementations of port traits
//!
//! In-memory bounty sources that can be configured for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::entities::Bounty;
use crate::domain::ports::BountySource;
use crate::error::FetchError;

// ============================================================================
// Static Bounty Source
// ============================================================================

/// Returns the same bounty list on every fetch
#[derive(Default)]
pub struct StaticBountySource {
    bounties: Vec<Bounty>,
    fetches: AtomicUsize,
}

impl StaticBountySource {
    pub fn new(bounties: Vec<Bounty>) -> Self {
        Self {
            bounties,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch_bounties` was called
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BountySource for StaticBountySource {
    async fn fetch_bounties(&self) -> Result<Vec<Bounty>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.bounties.clone())
    }
}

// ============================================================================
// Failing Bounty Source
// ============================================================================

/// Fails every fetch with a freshly built error
pub struct FailingBountySource {
    error: Box<dyn Fn() -> FetchError + Send + Sync>,
}

impl FailingBountySource {
    pub fn new(error: impl Fn() -> FetchError + Send + Sync + 'static) -> Self {
        Self {
            error: Box::new(error),
        }
    }
}

#[async_trait]
impl BountySource for FailingBountySource {
    async fn fetch_bounties(&self) -> Result<Vec<Bounty>, FetchError> {
        Err((self.error)())
    }
}
