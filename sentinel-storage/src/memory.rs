//! In-memory status record store.
//!
//! Backs tests and development runs. All records live in a single
//! RwLock-guarded map; the transition invariant is enforced through
//! [`apply_update`](crate::apply_update) exactly as in the LMDB backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use sentinel_core::{
    Investigation, InvestigationId, SentinelResult, StorageError,
};

use crate::{apply_update, InvestigationStore, InvestigationUpdate};

/// In-memory investigation store.
#[derive(Debug, Default, Clone)]
pub struct MemoryInvestigationStore {
    records: Arc<RwLock<HashMap<InvestigationId, Investigation>>>,
}

impl MemoryInvestigationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get count of stored investigations.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored records.
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.write() {
            records.clear();
        }
    }
}

#[async_trait]
impl InvestigationStore for MemoryInvestigationStore {
    async fn create(&self, query: &str) -> SentinelResult<Investigation> {
        let investigation = Investigation::new(query);
        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        records.insert(investigation.investigation_id, investigation.clone());
        Ok(investigation)
    }

    async fn get(&self, id: InvestigationId) -> SentinelResult<Option<Investigation>> {
        let records = self
            .records
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(records.get(&id).cloned())
    }

    async fn update(
        &self,
        id: InvestigationId,
        update: InvestigationUpdate,
    ) -> SentinelResult<Investigation> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        let current = records
            .get(&id)
            .ok_or(StorageError::NotFound { id })?;
        let next = apply_update(current, &update)?;
        records.insert(id, next.clone());
        Ok(next)
    }

    async fn health_check(&self) -> SentinelResult<bool> {
        Ok(self.records.read().is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::{new_entity_id, InvestigationStatus};

    #[tokio::test]
    async fn test_create_returns_pending_record() {
        let store = MemoryInvestigationStore::new();
        let inv = store.create("failed logins from 10.0.0.5").await.unwrap();
        assert_eq!(inv.status, InvestigationStatus::Pending);
        assert!(inv.summary.is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = MemoryInvestigationStore::new();
        assert!(store.get(new_entity_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_walks_the_state_machine() {
        let store = MemoryInvestigationStore::new();
        let inv = store.create("query").await.unwrap();
        let id = inv.investigation_id;

        let running = store
            .update(id, InvestigationUpdate::in_progress())
            .await
            .unwrap();
        assert_eq!(running.status, InvestigationStatus::InProgress);

        let done = store
            .update(id, InvestigationUpdate::completed("3 suspicious entries"))
            .await
            .unwrap();
        assert_eq!(done.status, InvestigationStatus::Completed);

        // The stored snapshot reflects the terminal write
        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.summary.as_deref(), Some("3 suspicious entries"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryInvestigationStore::new();
        let err = store
            .update(new_entity_id(), InvestigationUpdate::in_progress())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            sentinel_core::SentinelError::Storage(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_terminal_record_rejects_second_run() {
        let store = MemoryInvestigationStore::new();
        let inv = store.create("query").await.unwrap();
        let id = inv.investigation_id;

        store
            .update(id, InvestigationUpdate::in_progress())
            .await
            .unwrap();
        store
            .update(id, InvestigationUpdate::failed("An error occurred during analysis: timeout"))
            .await
            .unwrap();

        // A re-delivered task would try to set IN_PROGRESS again
        let err = store
            .update(id, InvestigationUpdate::in_progress())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            sentinel_core::SentinelError::Storage(StorageError::InvalidTransition { .. })
        ));

        // The terminal write stayed intact
        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.status, InvestigationStatus::Failed);
        assert_eq!(
            fetched.summary.as_deref(),
            Some("An error occurred during analysis: timeout")
        );
    }
}
