//! Feed module
//!
//! Syndication feed rendering: envelope metadata, per-bounty entries and the
//! RSS 2.0, Atom 1.0 and JSON Feed serializers.

mod atom1;
pub mod entry;
mod json_feed;
pub mod metadata;
pub mod renderer;
mod rss2;

use chrono::{DateTime, SecondsFormat, Utc};

pub use entry::FeedEntry;
pub use metadata::{FeedFormat, FeedMetadata};
pub use renderer::render_feed;

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-01-01T00:00:00.000Z`
pub(crate) fn iso8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
