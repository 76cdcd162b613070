//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid bounty that can be customized.

use chrono::DateTime;

use crate::domain::entities::bounty::OPEN_STATUS;
use crate::domain::entities::Bounty;

/// Create an open bounty with no tags, deadline or requirements
pub fn test_bounty(id: &str, created_at_millis: i64) -> Bounty {
    Bounty {
        id: id.to_string(),
        title: "Test bounty".to_string(),
        status: OPEN_STATUS.to_string(),
        reward_formatted: "10 USDC".to_string(),
        created_at: DateTime::from_timestamp_millis(created_at_millis)
            .expect("fixture timestamp in range"),
        deadline: None,
        tags: Vec::new(),
        description: None,
        requirements: Vec::new(),
    }
}

/// Create an open bounty carrying the given tags
pub fn test_bounty_with_tags(id: &str, created_at_millis: i64, tags: &[&str]) -> Bounty {
    Bounty {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..test_bounty(id, created_at_millis)
    }
}
