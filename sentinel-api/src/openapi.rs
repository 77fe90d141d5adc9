//! OpenAPI documentation for the Sentinel API.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes;
use crate::types::{CreateInvestigationRequest, InvestigationResponse};
use sentinel_core::{Investigation, InvestigationStatus};

/// Top-level OpenAPI document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sentinel API",
        description = "Security log investigation pipeline: submit a query, poll the status record for the synthesized summary."
    ),
    paths(
        routes::investigation::submit_investigation,
        routes::investigation::get_investigation,
        routes::health::ping,
        routes::health::liveness,
        routes::health::readiness,
    ),
    components(schemas(
        CreateInvestigationRequest,
        InvestigationResponse,
        Investigation,
        InvestigationStatus,
        ApiError,
        ErrorCode,
        routes::health::HealthResponse,
        routes::health::HealthStatus,
        routes::health::HealthDetails,
        routes::health::ComponentHealth,
    )),
    tags(
        (name = "Investigations", description = "Submit and poll investigations"),
        (name = "Health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("/api/v1/investigations"));
        assert!(json.contains("Sentinel API"));
    }
}
