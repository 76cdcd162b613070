//! Bounty API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::entities::{Bounty, BountyRecord};
use crate::domain::ports::BountySource;
use crate::error::FetchError;

/// Implementation of the bounty board API client
pub struct BountyApiClient {
    http: Client,
    bounties_url: String,
}

impl BountyApiClient {
    pub fn new(bounties_url: String) -> Self {
        Self {
            http: Client::new(),
            bounties_url,
        }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<BountyRecord>, FetchError> {
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let items: Vec<Value> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        Ok(items.into_iter().filter_map(Self::parse_record).collect())
    }

    /// Only objects are bounties; other array elements are skipped
    fn parse_record(item: Value) -> Option<BountyRecord> {
        if !item.is_object() {
            tracing::warn!("Skipping non-object bounty entry: {}", item);
            return None;
        }

        match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping unreadable bounty entry: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl BountySource for BountyApiClient {
    async fn fetch_bounties(&self) -> Result<Vec<Bounty>, FetchError> {
        tracing::debug!("Fetching bounties from {}", self.bounties_url);

        let response = self.http.get(&self.bounties_url).send().await?;
        let records = self.handle_response(response).await?;

        tracing::debug!("Fetched {} bounties", records.len());

        Ok(records.into_iter().map(BountyRecord::normalize).collect())
    }
}
