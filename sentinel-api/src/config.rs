//! API Configuration Module
//!
//! Configuration for the request service, storage backend, worker pool,
//! and collaborator providers. Loaded from environment variables with
//! sensible defaults for development.

use std::path::PathBuf;

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for CORS and the in-process worker pool.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Number of worker tasks consuming the task queue.
    pub worker_count: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(), // Empty = allow all
            worker_count: 2,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `SENTINEL_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `SENTINEL_WORKER_COUNT`: Worker tasks consuming the queue (default: 2)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("SENTINEL_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let worker_count = std::env::var("SENTINEL_WORKER_COUNT")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(2);

        Self {
            cors_origins,
            worker_count,
        }
    }
}

// ============================================================================
// STORAGE CONFIGURATION
// ============================================================================

/// Which status record store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory store; records do not survive a restart
    Memory,
    /// LMDB-backed durable store
    Lmdb {
        path: PathBuf,
        max_size_mb: usize,
    },
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
        }
    }
}

impl StorageConfig {
    /// Create StorageConfig from environment variables.
    ///
    /// Environment variables:
    /// - `SENTINEL_STORAGE_BACKEND`: "memory" (default) or "lmdb"
    /// - `SENTINEL_LMDB_PATH`: LMDB directory (default: "./data/investigations")
    /// - `SENTINEL_LMDB_MAX_SIZE_MB`: LMDB map size in MB (default: 100)
    pub fn from_env() -> Self {
        let backend = match std::env::var("SENTINEL_STORAGE_BACKEND")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "lmdb" => {
                let path = std::env::var("SENTINEL_LMDB_PATH")
                    .unwrap_or_else(|_| "./data/investigations".to_string());
                let max_size_mb = std::env::var("SENTINEL_LMDB_MAX_SIZE_MB")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(100);
                StorageBackend::Lmdb {
                    path: PathBuf::from(path),
                    max_size_mb,
                }
            }
            _ => StorageBackend::Memory,
        };

        Self { backend }
    }
}

// ============================================================================
// PROVIDER CONFIGURATION
// ============================================================================

/// Collaborator provider selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderMode {
    /// Deterministic in-process mocks (dev/test)
    Mock,
    /// Weaviate retrieval + Gemini synthesis over HTTP
    Live,
}

/// Collaborator provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub mode: ProviderMode,
    /// Weaviate instance URL
    pub weaviate_url: String,
    /// Maximum log entries retrieved per query
    pub search_limit: usize,
    /// Google API key for Gemini (required in live mode)
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    pub gemini_model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            mode: ProviderMode::Mock,
            weaviate_url: "http://localhost:8080".to_string(),
            search_limit: 15,
            gemini_api_key: None,
            gemini_model: "gemini-pro".to_string(),
        }
    }
}

impl ProviderConfig {
    /// Create ProviderConfig from environment variables.
    ///
    /// Environment variables:
    /// - `SENTINEL_PROVIDERS`: "mock" (default) or "live"
    /// - `SENTINEL_WEAVIATE_URL`: Weaviate URL (default: "http://localhost:8080")
    /// - `SENTINEL_SEARCH_LIMIT`: Max retrieved entries (default: 15)
    /// - `SENTINEL_GEMINI_API_KEY`: Google API key (required for live mode)
    /// - `SENTINEL_GEMINI_MODEL`: Gemini model (default: "gemini-pro")
    pub fn from_env() -> Self {
        let mode = match std::env::var("SENTINEL_PROVIDERS")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "live" => ProviderMode::Live,
            _ => ProviderMode::Mock,
        };

        let weaviate_url = std::env::var("SENTINEL_WEAVIATE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let search_limit = std::env::var("SENTINEL_SEARCH_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(15);

        let gemini_api_key = std::env::var("SENTINEL_GEMINI_API_KEY").ok();

        let gemini_model =
            std::env::var("SENTINEL_GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());

        Self {
            mode,
            weaviate_url,
            search_limit,
            gemini_api_key,
            gemini_model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        let config = ApiConfig::default();
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.worker_count, 2);
    }

    #[test]
    fn test_default_storage_config_is_memory() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_default_provider_config_is_mock() {
        let config = ProviderConfig::default();
        assert_eq!(config.mode, ProviderMode::Mock);
        assert_eq!(config.search_limit, 15);
        assert_eq!(config.gemini_model, "gemini-pro");
        assert!(config.gemini_api_key.is_none());
    }
}
