//! Feed renderer
//!
//! Renders selected bounties to RSS 2.0, Atom 1.0 or JSON Feed.

use chrono::{DateTime, Utc};

use super::atom1::write_atom;
use super::json_feed::write_json_feed;
use super::rss2::write_rss;
use super::{FeedEntry, FeedFormat, FeedMetadata};
use crate::domain::entities::Bounty;
use crate::error::RenderError;

/// Render a complete feed document.
///
/// `bounties` are rendered in the given order; selection happens upstream.
/// `updated` becomes the channel's last-updated timestamp.
pub fn render_feed(
    bounties: &[Bounty],
    format: FeedFormat,
    meta: &FeedMetadata,
    updated: DateTime<Utc>,
) -> Result<String, RenderError> {
    let entries: Vec<FeedEntry> = bounties
        .iter()
        .map(|bounty| FeedEntry::from_bounty(bounty, meta))
        .collect();

    match format {
        FeedFormat::Rss => write_rss(meta, &entries, updated),
        FeedFormat::Atom => write_atom(meta, &entries, updated),
        FeedFormat::Json => write_json_feed(meta, &entries),
    }
}
