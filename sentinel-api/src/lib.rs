//! Sentinel API - Request Service
//!
//! Thin synchronous facade over the investigation pipeline: submission
//! creates the status record and enqueues a task, lookups serve the
//! record's current snapshot. The same binary hosts the worker pool; the
//! two sides meet only at the status record store.

pub mod config;
pub mod error;
pub mod macros;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, ProviderConfig, ProviderMode, StorageBackend, StorageConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
#[cfg(feature = "openapi")]
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use state::AppState;
pub use telemetry::{init_telemetry, TelemetryConfig};
pub use types::{CreateInvestigationRequest, InvestigationResponse};
