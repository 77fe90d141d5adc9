//! Core entity structures

use crate::{new_entity_id, InvestigationId, InvestigationStatus, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Investigation - the persisted status record for one submitted query.
///
/// Created by the request service with status Pending, then mutated only by
/// the worker that owns the corresponding task message. `summary` stays
/// unset until a terminal state is written; on Failed it carries the error
/// description instead of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Investigation {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Uuid))]
    pub investigation_id: InvestigationId,
    pub query: String,
    pub status: InvestigationStatus,
    pub summary: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub created_at: Timestamp,
}

impl Investigation {
    /// Create a new pending investigation for the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            investigation_id: new_entity_id(),
            query: query.into(),
            status: InvestigationStatus::Pending,
            summary: None,
            created_at: Utc::now(),
        }
    }

    /// Check if this investigation has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_investigation_is_pending() {
        let inv = Investigation::new("failed logins from 10.0.0.5");
        assert_eq!(inv.status, InvestigationStatus::Pending);
        assert!(inv.summary.is_none());
        assert_eq!(inv.query, "failed logins from 10.0.0.5");
        assert!(!inv.is_terminal());
    }

    #[test]
    fn test_new_investigations_get_distinct_ids() {
        let a = Investigation::new("a");
        let b = Investigation::new("b");
        assert_ne!(a.investigation_id, b.investigation_id);
    }

    #[test]
    fn test_investigation_wire_format() {
        let inv = Investigation::new("query");
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["status"], "PENDING");
        assert!(json["summary"].is_null());
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn test_investigation_round_trip() {
        let mut inv = Investigation::new("query");
        inv.status = InvestigationStatus::Failed;
        inv.summary = Some("An error occurred during analysis: timeout".to_string());

        let json = serde_json::to_string(&inv).unwrap();
        let parsed: Investigation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inv);
        assert!(parsed.is_terminal());
    }
}
