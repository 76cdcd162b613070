use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BOUNTY_API_URL: &str = "http://bounty.owockibot.xyz/bounties";
pub const DEFAULT_SITE_URL: &str = "https://bounty.owockibot.xyz";
pub const DEFAULT_FEED_BASE_URL: &str = "https://bounty-rss.example.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Upstream endpoint returning the bounty list
    pub bounty_api_url: String,
    /// Bounty board site (canonical feed link, per-bounty pages)
    pub site_url: String,
    /// Public base URL of this service (feed self links)
    pub feed_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bounty_api_url: DEFAULT_BOUNTY_API_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_port(env::var("PORT").ok().as_deref()),
            bounty_api_url: env::var("BOUNTY_API_URL")
                .unwrap_or_else(|_| DEFAULT_BOUNTY_API_URL.to_string()),
            site_url: env::var("BOUNTY_SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            feed_base_url: env::var("FEED_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_FEED_BASE_URL.to_string()),
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
