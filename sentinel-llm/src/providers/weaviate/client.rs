//! Weaviate HTTP client

use super::types::{GraphQlRequest, GraphQlResponse};
use crate::providers::{invalid_response, request_failed};
use reqwest::Client;
use sentinel_core::SentinelResult;

const PROVIDER: &str = "weaviate";

/// Thin client for the Weaviate GraphQL endpoint.
pub struct WeaviateClient {
    client: Client,
    base_url: String,
}

impl WeaviateClient {
    /// Create a new client for the given instance URL
    /// (e.g. "http://weaviate:8080").
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Execute a GraphQL query and return the parsed response envelope.
    pub async fn graphql(&self, query: String) -> SentinelResult<GraphQlResponse> {
        let url = format!("{}/v1/graphql", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&GraphQlRequest { query })
            .send()
            .await
            .map_err(|e| request_failed(PROVIDER, 0, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(request_failed(PROVIDER, status.as_u16() as i32, body));
        }

        let envelope: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| invalid_response(PROVIDER, format!("Failed to parse response: {}", e)))?;

        if let Some(error) = envelope.errors.first() {
            return Err(invalid_response(PROVIDER, error.message.clone()));
        }

        Ok(envelope)
    }
}

impl std::fmt::Debug for WeaviateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeaviateClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
