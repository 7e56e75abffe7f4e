//! HTTP client for the search API

use std::future::Future;

use reqwest::Client;

use super::types::{HealthResponse, ProfileStats, SearchRequest, SearchResponse};
use crate::error::{SearchError, StatsUnavailable};

/// The two calls the controller needs. Implemented by [`BackendClient`] and
/// by in-memory fakes in tests.
pub trait SearchBackend {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send;

    fn fetch_stats(&self) -> impl Future<Output = Result<ProfileStats, StatsUnavailable>> + Send;
}

/// Client for the search service. Single attempt per call, no retries,
/// no client-side timeout.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /health. Failures are logged and reported as unavailable.
    pub async fn health_check(&self) -> Result<ProfileStats, StatsUnavailable> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Failed to load stats: {}", e);
            StatsUnavailable::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Failed to load stats: {}", status.as_u16());
            return Err(StatsUnavailable::Status(status.as_u16()));
        }

        let health: HealthResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to load stats: {}", e);
            StatsUnavailable::Network(e.to_string())
        })?;

        Ok(ProfileStats {
            total_profiles: health.total_profiles,
        })
    }

    /// POST /search with a JSON body.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(url = %url, payload = ?request, "Sending search request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Search response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Search request rejected");
            return Err(SearchError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

impl SearchBackend for BackendClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        BackendClient::search(self, request).await
    }

    async fn fetch_stats(&self) -> Result<ProfileStats, StatsUnavailable> {
        self.health_check().await
    }
}
