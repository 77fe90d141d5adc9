//! Weaviate GraphQL wire types

use serde::{Deserialize, Serialize};

/// GraphQL request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

/// GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<GetData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetData {
    #[serde(rename = "Get")]
    pub get: GetResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetResult {
    #[serde(rename = "LogEntry", default)]
    pub log_entries: Vec<LogEntryHit>,
}

/// One retrieved log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntryHit {
    pub content: String,
    pub ip_address: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserializes_hits() {
        let json = r#"{
            "data": {
                "Get": {
                    "LogEntry": [
                        {"content": "auth failure for root", "ip_address": "10.0.0.5",
                         "timestamp": "2024-03-01T00:00:00Z"}
                    ]
                }
            }
        }"#;
        let parsed: GraphQlResponse = serde_json::from_str(json).unwrap();
        let hits = parsed.data.unwrap().get.log_entries;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ip_address, "10.0.0.5");
    }

    #[test]
    fn test_response_deserializes_errors() {
        let json = r#"{"data": null, "errors": [{"message": "class not found"}]}"#;
        let parsed: GraphQlResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.data.is_none());
        assert_eq!(parsed.errors[0].message, "class not found");
    }

    #[test]
    fn test_empty_hit_list_defaults() {
        let json = r#"{"data": {"Get": {}}}"#;
        let parsed: GraphQlResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.data.unwrap().get.log_entries.is_empty());
    }
}
