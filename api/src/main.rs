//! Bounty Feed API Server
//!
//! Publishes the open bounties of the owockibot bounty board as RSS 2.0,
//! Atom and JSON Feed documents. Stateless: every feed request re-fetches the
//! bounty list from the upstream API.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::any, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::BountyApiClient;
use app::FeedService;
use config::Config;
use domain::ports::BountySource;
use feed::FeedMetadata;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<dyn BountySource>>,
}

impl AppState {
    pub fn new(config: &Config, bounties: Arc<dyn BountySource>) -> Self {
        let metadata = FeedMetadata::from_config(config);

        Self {
            feed_service: Arc::new(FeedService::new(bounties, metadata)),
        }
    }
}

/// Build the router. Routes answer any method; unmatched paths fall through
/// to the documentation page.
pub fn router(state: AppState) -> Router {
    Router::new()
        // RSS 2.0
        .route("/rss", any(handlers::get_rss))
        .route("/rss.xml", any(handlers::get_rss))
        .route("/feed", any(handlers::get_rss))
        // Atom
        .route("/atom", any(handlers::get_atom))
        .route("/atom.xml", any(handlers::get_atom))
        // JSON Feed
        .route("/json", any(handlers::get_json_feed))
        .route("/feed.json", any(handlers::get_json_feed))
        // Health check (never calls upstream)
        .route("/health", any(handlers::health))
        .fallback(handlers::docs_page)
        // Middleware
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bounty_feed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting bounty feed...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Bounty API: {}", config.bounty_api_url);

    let bounty_client: Arc<dyn BountySource> =
        Arc::new(BountyApiClient::new(config.bounty_api_url.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState::new(&config, bounty_client));

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Bounty RSS Feed running on http://{}", addr);
    tracing::info!("Endpoints: /rss, /atom, /json");
    tracing::info!("Filter by tag: /rss?tag=coding");

    axum::serve(listener, app).await?;

    Ok(())
}
