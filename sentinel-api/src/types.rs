//! Request and response types for the Sentinel API

use sentinel_core::{Investigation, InvestigationId, InvestigationStatus, Timestamp};
use serde::{Deserialize, Serialize};

/// Request body for submitting a new investigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateInvestigationRequest {
    /// The natural-language query to investigate
    pub query: String,
}

/// An investigation record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InvestigationResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Uuid))]
    pub id: InvestigationId,
    pub query: String,
    pub status: InvestigationStatus,
    pub summary: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub created_at: Timestamp,
}

impl From<Investigation> for InvestigationResponse {
    fn from(investigation: Investigation) -> Self {
        Self {
            id: investigation.investigation_id,
            query: investigation.query,
            status: investigation.status,
            summary: investigation.summary,
            created_at: investigation.created_at,
        }
    }
}
