//! Feed service
//!
//! Generates syndication feeds of open bounties. Every call re-fetches the
//! bounty list; nothing is cached between requests.

use std::sync::Arc;

use chrono::Utc;

use super::bounty_filter::{select_open_bounties, TagFilter};
use crate::domain::ports::BountySource;
use crate::error::AppError;
use crate::feed::{render_feed, FeedFormat, FeedMetadata};

/// Service for generating bounty feeds
pub struct FeedService<BS>
where
    BS: BountySource + ?Sized,
{
    bounties: Arc<BS>,
    metadata: FeedMetadata,
}

impl<BS> FeedService<BS>
where
    BS: BountySource + ?Sized,
{
    pub fn new(bounties: Arc<BS>, metadata: FeedMetadata) -> Self {
        Self { bounties, metadata }
    }

    /// Generate a feed document of open bounties, optionally restricted to
    /// a comma-separated tag list
    pub async fn generate_feed(
        &self,
        format: FeedFormat,
        tag_filter: Option<&str>,
    ) -> Result<String, AppError> {
        let bounties = self.bounties.fetch_bounties().await?;
        let fetched = bounties.len();

        let filter = TagFilter::parse(tag_filter);
        let selected = select_open_bounties(bounties, filter.as_ref());

        tracing::debug!(
            "Rendering {} feed: {} of {} bounties (tag filter: {:?})",
            format,
            selected.len(),
            fetched,
            tag_filter
        );

        Ok(render_feed(&selected, format, &self.metadata, Utc::now())?)
    }
}
