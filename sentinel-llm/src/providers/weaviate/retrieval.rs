//! Weaviate retrieval provider implementation

use super::client::WeaviateClient;
use super::types::LogEntryHit;
use crate::{RetrievalProvider, NO_RESULTS_SENTINEL};
use async_trait::async_trait;
use sentinel_core::SentinelResult;

/// Semantic log retrieval over a Weaviate `LogEntry` class using nearText
/// vector search.
pub struct WeaviateRetrievalProvider {
    client: WeaviateClient,
    limit: usize,
}

impl WeaviateRetrievalProvider {
    /// Create a new retrieval provider.
    ///
    /// # Arguments
    /// * `client` - Configured Weaviate client
    /// * `limit` - Maximum number of log entries to retrieve per query
    pub fn new(client: WeaviateClient, limit: usize) -> Self {
        Self { client, limit }
    }

    /// Build the nearText GraphQL query for a user concept.
    fn build_query(&self, concept: &str) -> String {
        // serde_json string encoding doubles as GraphQL string escaping
        let escaped =
            serde_json::to_string(concept).unwrap_or_else(|_| format!("\"{}\"", concept));
        format!(
            "{{ Get {{ LogEntry(nearText: {{concepts: [{escaped}]}}, limit: {limit}) \
             {{ content ip_address timestamp }} }} }}",
            limit = self.limit,
        )
    }

    fn format_hits(hits: &[LogEntryHit]) -> String {
        hits.iter()
            .map(|hit| format!("- {} (IP: {})", hit.content, hit.ip_address))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl RetrievalProvider for WeaviateRetrievalProvider {
    async fn search(&self, query: &str) -> SentinelResult<String> {
        let envelope = self.client.graphql(self.build_query(query)).await?;

        let hits = envelope
            .data
            .map(|data| data.get.log_entries)
            .unwrap_or_default();

        if hits.is_empty() {
            return Ok(NO_RESULTS_SENTINEL.to_string());
        }

        Ok(Self::format_hits(&hits))
    }

    fn provider_id(&self) -> &str {
        "weaviate"
    }
}

impl std::fmt::Debug for WeaviateRetrievalProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeaviateRetrievalProvider")
            .field("limit", &self.limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_escapes_concept() {
        let provider =
            WeaviateRetrievalProvider::new(WeaviateClient::new("http://localhost:8080"), 15);
        let query = provider.build_query("failed \"root\" logins");
        assert!(query.contains("nearText"));
        assert!(query.contains("limit: 15"));
        assert!(query.contains(r#"\"root\""#));
    }

    #[test]
    fn test_format_hits() {
        let hits = vec![
            LogEntryHit {
                content: "auth failure for root".to_string(),
                ip_address: "10.0.0.5".to_string(),
                timestamp: None,
            },
            LogEntryHit {
                content: "invalid password".to_string(),
                ip_address: "10.0.0.6".to_string(),
                timestamp: None,
            },
        ];
        let formatted = WeaviateRetrievalProvider::format_hits(&hits);
        assert_eq!(
            formatted,
            "- auth failure for root (IP: 10.0.0.5)\n- invalid password (IP: 10.0.0.6)"
        );
    }
}
