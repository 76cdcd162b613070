//! HTTP handlers
//!
//! Axum request handlers for the feed, health and documentation endpoints.

pub mod docs;
pub mod feed;
pub mod health;

pub use docs::docs_page;
pub use feed::{get_atom, get_json_feed, get_rss};
pub use health::health;

/// Cache policy of feed and health responses
pub(crate) const CACHE_CONTROL: &str = "public, max-age=300";
