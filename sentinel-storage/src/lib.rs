//! Sentinel Storage - Status Record Store
//!
//! Defines the storage abstraction for investigation status records and two
//! implementations: an in-memory store for tests and development, and an
//! LMDB-backed store for durable single-node deployments.

pub mod lmdb;
pub mod memory;

pub use lmdb::{LmdbInvestigationStore, LmdbStoreError};
pub use memory::MemoryInvestigationStore;

use async_trait::async_trait;
use sentinel_core::{
    Investigation, InvestigationId, InvestigationStatus, SentinelResult, StorageError,
};

// ============================================================================
// UPDATE TYPES
// ============================================================================

/// Update payload for investigations.
///
/// Terminal updates always carry a summary: the result text on Completed,
/// the error description on Failed.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestigationUpdate {
    /// New status
    pub status: InvestigationStatus,
    /// New summary, if the transition produces one
    pub summary: Option<String>,
}

impl InvestigationUpdate {
    /// Mark the record as picked up by a worker.
    pub fn in_progress() -> Self {
        Self {
            status: InvestigationStatus::InProgress,
            summary: None,
        }
    }

    /// Mark the record completed with the generated summary.
    pub fn completed(summary: impl Into<String>) -> Self {
        Self {
            status: InvestigationStatus::Completed,
            summary: Some(summary.into()),
        }
    }

    /// Mark the record failed with an error description.
    pub fn failed(summary: impl Into<String>) -> Self {
        Self {
            status: InvestigationStatus::Failed,
            summary: Some(summary.into()),
        }
    }
}

/// Apply an update to a current record, enforcing the forward-only
/// transition invariant. Returns the new record snapshot.
///
/// Enforcement lives here rather than in each backend so that both backends
/// reject exactly the same writes, and so a re-delivered terminal write is
/// a rejected no-op.
pub fn apply_update(
    current: &Investigation,
    update: &InvestigationUpdate,
) -> Result<Investigation, StorageError> {
    if !current.status.can_transition_to(update.status) {
        return Err(StorageError::InvalidTransition {
            id: current.investigation_id,
            from: current.status,
            to: update.status,
        });
    }

    let mut next = current.clone();
    next.status = update.status;
    if let Some(summary) = &update.summary {
        next.summary = Some(summary.clone());
    }
    Ok(next)
}

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Async storage trait for investigation status records.
///
/// Implementations must be safe for concurrent access: the request service
/// and every worker share one store instance.
#[async_trait]
pub trait InvestigationStore: Send + Sync {
    /// Create a new pending investigation for the given query and persist it.
    async fn create(&self, query: &str) -> SentinelResult<Investigation>;

    /// Get an investigation by ID. Returns `None` for unknown IDs.
    async fn get(&self, id: InvestigationId) -> SentinelResult<Option<Investigation>>;

    /// Update status (and optionally summary) for an existing investigation.
    ///
    /// Returns the new record snapshot. Fails with
    /// `StorageError::NotFound` for unknown IDs and
    /// `StorageError::InvalidTransition` for writes that would move the
    /// status backwards or out of a terminal state.
    async fn update(
        &self,
        id: InvestigationId,
        update: InvestigationUpdate,
    ) -> SentinelResult<Investigation>;

    /// Check if the storage backend is healthy.
    async fn health_check(&self) -> SentinelResult<bool>;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_forward() {
        let inv = Investigation::new("query");
        let next = apply_update(&inv, &InvestigationUpdate::in_progress()).unwrap();
        assert_eq!(next.status, InvestigationStatus::InProgress);
        assert!(next.summary.is_none());

        let done = apply_update(&next, &InvestigationUpdate::completed("summary text")).unwrap();
        assert_eq!(done.status, InvestigationStatus::Completed);
        assert_eq!(done.summary.as_deref(), Some("summary text"));
    }

    #[test]
    fn test_apply_update_rejects_skip_to_terminal() {
        let inv = Investigation::new("query");
        let err = apply_update(&inv, &InvestigationUpdate::completed("s")).unwrap_err();
        assert!(matches!(err, StorageError::InvalidTransition { .. }));
    }

    #[test]
    fn test_apply_update_rejects_writes_to_terminal() {
        let inv = Investigation::new("query");
        let running = apply_update(&inv, &InvestigationUpdate::in_progress()).unwrap();
        let failed = apply_update(&running, &InvestigationUpdate::failed("boom")).unwrap();

        for update in [
            InvestigationUpdate::in_progress(),
            InvestigationUpdate::completed("late result"),
            InvestigationUpdate::failed("boom again"),
        ] {
            let err = apply_update(&failed, &update).unwrap_err();
            assert!(matches!(err, StorageError::InvalidTransition { .. }));
        }
        // The rejected writes left the record untouched
        assert_eq!(failed.summary.as_deref(), Some("boom"));
    }

    #[test]
    fn test_apply_update_preserves_immutable_fields() {
        let inv = Investigation::new("the original query");
        let next = apply_update(&inv, &InvestigationUpdate::in_progress()).unwrap();
        assert_eq!(next.investigation_id, inv.investigation_id);
        assert_eq!(next.query, inv.query);
        assert_eq!(next.created_at, inv.created_at);
    }
}
