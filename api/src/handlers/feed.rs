//! Feed handlers
//!
//! RSS, Atom and JSON Feed endpoints. Each request fetches the current
//! bounty list and renders it; an optional `tag` query parameter restricts
//! the feed to bounties carrying one of the given comma-separated tags.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use super::CACHE_CONTROL;
use crate::error::AppError;
use crate::feed::FeedFormat;
use crate::AppState;

/// Raw query pairs, so repeated or unexpected parameters never reject a request
type QueryPairs = Query<Vec<(String, String)>>;

/// First `tag` value, passed through exactly as given
fn tag_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "tag")
        .map(|(_, value)| value.as_str())
}

async fn feed_response(
    state: &AppState,
    format: FeedFormat,
    params: &[(String, String)],
) -> Result<Response, AppError> {
    let body = state
        .feed_service
        .generate_feed(format, tag_param(params))
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type()),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        body,
    )
        .into_response())
}

/// GET /rss, /rss.xml, /feed
pub async fn get_rss(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Response, AppError> {
    feed_response(&state, FeedFormat::Rss, &params).await
}

/// GET /atom, /atom.xml
pub async fn get_atom(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Response, AppError> {
    feed_response(&state, FeedFormat::Atom, &params).await
}

/// GET /json, /feed.json
pub async fn get_json_feed(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Response, AppError> {
    feed_response(&state, FeedFormat::Json, &params).await
}
