//! Telemetry Initialization
//!
//! Sets up the tracing subscriber with env-filter based log levels and an
//! optional JSON output format for log aggregation pipelines.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ApiError, ApiResult};

/// Telemetry configuration from environment variables.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name included in startup logging
    pub service_name: String,
    /// Emit logs as JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: std::env::var("SENTINEL_SERVICE_NAME")
                .unwrap_or_else(|_| "sentinel-api".to_string()),
            json_logs: std::env::var("SENTINEL_LOG_JSON")
                .map(|s| s == "true" || s == "1")
                .unwrap_or(false),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// This function should be called once at application startup before any
/// tracing occurs. The filter is taken from `RUST_LOG` when set, with a
/// development-friendly default otherwise.
pub fn init_telemetry(config: &TelemetryConfig) -> ApiResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sentinel=debug,tower_http=debug,info"));

    let result = if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    result.map_err(|e| ApiError::internal_error(format!("Failed to init subscriber: {}", e)))?;

    tracing::info!(
        service_name = config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_config_default_service_name() {
        let config = TelemetryConfig {
            service_name: "sentinel-api".to_string(),
            json_logs: false,
        };
        assert_eq!(config.service_name, "sentinel-api");
        assert!(!config.json_logs);
    }
}
