//! Feed envelope
//!
//! Channel-level metadata shared by every feed format, and the format
//! selector itself.

use crate::config::Config;

/// Target serialization of a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Rss,
    Atom,
    Json,
}

impl FeedFormat {
    /// Resolve a format name. Anything that is not `atom` or `json` is RSS 2.0.
    pub fn from_name(name: &str) -> Self {
        match name {
            "atom" => FeedFormat::Atom,
            "json" => FeedFormat::Json,
            _ => FeedFormat::Rss,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            FeedFormat::Rss => "application/rss+xml; charset=utf-8",
            FeedFormat::Atom => "application/atom+xml; charset=utf-8",
            FeedFormat::Json => "application/json; charset=utf-8",
        }
    }
}

impl std::fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedFormat::Rss => write!(f, "rss"),
            FeedFormat::Atom => write!(f, "atom"),
            FeedFormat::Json => write!(f, "json"),
        }
    }
}

/// Self links of the three published feeds
#[derive(Debug, Clone)]
pub struct FeedLinks {
    pub rss: String,
    pub atom: String,
    pub json: String,
}

#[derive(Debug, Clone)]
pub struct FeedAuthor {
    pub name: String,
    pub link: String,
}

/// Fixed channel metadata of the bounty feed
#[derive(Debug, Clone)]
pub struct FeedMetadata {
    pub title: String,
    pub description: String,
    /// Canonical feed id, also the channel link
    pub id: String,
    pub link: String,
    pub language: String,
    pub image: String,
    pub favicon: String,
    pub copyright: String,
    pub generator: String,
    pub feed_links: FeedLinks,
    pub author: FeedAuthor,
    /// Bounty board base URL, used for per-bounty links
    pub site_url: String,
}

impl FeedMetadata {
    pub fn from_config(config: &Config) -> Self {
        let site_url = config.site_url.trim_end_matches('/').to_string();
        let feed_base = config.feed_base_url.trim_end_matches('/');

        Self {
            title: "owockibot Bounty Board".to_string(),
            description: "Open bounties for AI agents - earn USDC on Base".to_string(),
            id: format!("{}/", site_url),
            link: format!("{}/", site_url),
            language: "en".to_string(),
            image: format!("{}/favicon.ico", site_url),
            favicon: format!("{}/favicon.ico", site_url),
            copyright: "owockibot 2026".to_string(),
            generator: "Bounty RSS Feed Generator".to_string(),
            feed_links: FeedLinks {
                rss: format!("{}/rss", feed_base),
                atom: format!("{}/atom", feed_base),
                json: format!("{}/json", feed_base),
            },
            author: FeedAuthor {
                name: "owockibot".to_string(),
                link: "https://owockibot.xyz".to_string(),
            },
            site_url,
        }
    }

    /// Canonical page of a single bounty
    pub fn bounty_url(&self, id: &str) -> String {
        format!("{}/bounty/{}", self.site_url, id)
    }
}
