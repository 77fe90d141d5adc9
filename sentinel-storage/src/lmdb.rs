//! LMDB-backed status record store.
//!
//! Uses the heed crate (Rust bindings for LMDB) for a memory-mapped,
//! transactional key-value store. Keys are the raw investigation UUID
//! bytes; values are the serde_json encoding of the record.
//!
//! LMDB gives single-writer transactions, which is all the granularity the
//! store contract needs: each `update` reads the current record and writes
//! the validated successor inside one write transaction.

use std::path::Path;

use async_trait::async_trait;
use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};
use sentinel_core::{
    Investigation, InvestigationId, SentinelResult, StorageError,
};

use crate::{apply_update, InvestigationStore, InvestigationUpdate};

/// Error type for LMDB store operations.
#[derive(Debug, thiserror::Error)]
pub enum LmdbStoreError {
    /// Failed to open or create the LMDB environment.
    #[error("Failed to open LMDB environment: {0}")]
    EnvOpen(String),

    /// Failed to open the database within the environment.
    #[error("Failed to open database: {0}")]
    DbOpen(String),

    /// Transaction error.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LmdbStoreError> for sentinel_core::SentinelError {
    fn from(e: LmdbStoreError) -> Self {
        match e {
            LmdbStoreError::Serialization(reason) => {
                sentinel_core::SentinelError::Storage(StorageError::Serialization { reason })
            }
            other => sentinel_core::SentinelError::Storage(StorageError::Backend {
                reason: other.to_string(),
            }),
        }
    }
}

/// LMDB-backed investigation store.
///
/// # Example
///
/// ```ignore
/// use sentinel_storage::{InvestigationStore, LmdbInvestigationStore};
///
/// let store = LmdbInvestigationStore::new("/var/lib/sentinel", 100)?;
/// let record = store.create("failed logins from 10.0.0.5").await?;
/// let fetched = store.get(record.investigation_id).await?;
/// ```
pub struct LmdbInvestigationStore {
    /// The LMDB environment.
    env: Env,
    /// The main database (single unnamed database).
    db: Database<Bytes, Bytes>,
}

impl LmdbInvestigationStore {
    /// Create a new LMDB investigation store.
    ///
    /// # Arguments
    ///
    /// * `path` - Directory where LMDB files will be stored
    /// * `max_size_mb` - Maximum size of the database in megabytes
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the LMDB
    /// environment cannot be opened, or the database cannot be created.
    pub fn new<P: AsRef<Path>>(path: P, max_size_mb: usize) -> Result<Self, LmdbStoreError> {
        std::fs::create_dir_all(&path)?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(max_size_mb * 1024 * 1024)
                .max_dbs(1)
                .open(path.as_ref())
        }
        .map_err(|e| LmdbStoreError::EnvOpen(e.to_string()))?;

        let mut wtxn = env
            .write_txn()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;

        let db: Database<Bytes, Bytes> = env
            .create_database(&mut wtxn, None)
            .map_err(|e| LmdbStoreError::DbOpen(e.to_string()))?;

        wtxn.commit()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;

        Ok(Self { env, db })
    }

    fn encode(record: &Investigation) -> Result<Vec<u8>, LmdbStoreError> {
        serde_json::to_vec(record).map_err(|e| LmdbStoreError::Serialization(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<Investigation, LmdbStoreError> {
        serde_json::from_slice(bytes).map_err(|e| LmdbStoreError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl InvestigationStore for LmdbInvestigationStore {
    async fn create(&self, query: &str) -> SentinelResult<Investigation> {
        let investigation = Investigation::new(query);
        let bytes = Self::encode(&investigation)?;

        let mut wtxn = self
            .env
            .write_txn()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;
        self.db
            .put(&mut wtxn, investigation.investigation_id.as_bytes(), &bytes)
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;
        wtxn.commit()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;

        Ok(investigation)
    }

    async fn get(&self, id: InvestigationId) -> SentinelResult<Option<Investigation>> {
        let rtxn = self
            .env
            .read_txn()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;

        match self
            .db
            .get(&rtxn, id.as_bytes())
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?
        {
            Some(bytes) => Ok(Some(Self::decode(bytes)?)),
            None => Ok(None),
        }
    }

    async fn update(
        &self,
        id: InvestigationId,
        update: InvestigationUpdate,
    ) -> SentinelResult<Investigation> {
        let mut wtxn = self
            .env
            .write_txn()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;

        let current = match self
            .db
            .get(&wtxn, id.as_bytes())
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?
        {
            Some(bytes) => Self::decode(bytes)?,
            None => return Err(StorageError::NotFound { id }.into()),
        };

        let next = apply_update(&current, &update)?;
        let bytes = Self::encode(&next)?;
        self.db
            .put(&mut wtxn, id.as_bytes(), &bytes)
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;
        wtxn.commit()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;

        Ok(next)
    }

    async fn health_check(&self) -> SentinelResult<bool> {
        let rtxn = self
            .env
            .read_txn()
            .map_err(|e| LmdbStoreError::Transaction(e.to_string()))?;
        drop(rtxn);
        Ok(true)
    }
}

impl std::fmt::Debug for LmdbInvestigationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LmdbInvestigationStore")
            .field("path", &self.env.path())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::{new_entity_id, InvestigationStatus, SentinelError};

    fn open_store() -> (tempfile::TempDir, LmdbInvestigationStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LmdbInvestigationStore::new(dir.path(), 10).expect("open store");
        (dir, store)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (_dir, store) = open_store();
        let inv = store.create("failed logins from 10.0.0.5").await.unwrap();
        assert_eq!(inv.status, InvestigationStatus::Pending);

        let fetched = store.get(inv.investigation_id).await.unwrap().unwrap();
        assert_eq!(fetched, inv);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let (_dir, store) = open_store();
        assert!(store.get(new_entity_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_persists_terminal_state() {
        let (_dir, store) = open_store();
        let inv = store.create("query").await.unwrap();
        let id = inv.investigation_id;

        store
            .update(id, InvestigationUpdate::in_progress())
            .await
            .unwrap();
        store
            .update(id, InvestigationUpdate::completed("summary text"))
            .await
            .unwrap();

        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.status, InvestigationStatus::Completed);
        assert_eq!(fetched.summary.as_deref(), Some("summary text"));
    }

    #[tokio::test]
    async fn test_update_enforces_transitions() {
        let (_dir, store) = open_store();
        let inv = store.create("query").await.unwrap();

        let err = store
            .update(
                inv.investigation_id,
                InvestigationUpdate::completed("skipped in-progress"),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SentinelError::Storage(StorageError::InvalidTransition { .. })
        ));

        // Rejected write must not have touched the record
        let fetched = store.get(inv.investigation_id).await.unwrap().unwrap();
        assert_eq!(fetched.status, InvestigationStatus::Pending);
        assert!(fetched.summary.is_none());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let id = {
            let store = LmdbInvestigationStore::new(dir.path(), 10).expect("open store");
            store.create("query").await.unwrap().investigation_id
        };

        let store = LmdbInvestigationStore::new(dir.path(), 10).expect("reopen store");
        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.query, "query");
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_dir, store) = open_store();
        assert!(store.health_check().await.unwrap());
    }
}
