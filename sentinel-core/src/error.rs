//! Error types for Sentinel operations

use crate::{InvestigationId, InvestigationStatus};
use thiserror::Error;

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Investigation not found: {id}")]
    NotFound { id: InvestigationId },

    #[error("Insert failed for investigation {id}: {reason}")]
    InsertFailed {
        id: InvestigationId,
        reason: String,
    },

    #[error("Update failed for investigation {id}: {reason}")]
    UpdateFailed {
        id: InvestigationId,
        reason: String,
    },

    #[error("Invalid status transition for investigation {id}: {from} -> {to}")]
    InvalidTransition {
        id: InvestigationId,
        from: InvestigationStatus,
        to: InvestigationStatus,
    },

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    #[error("Storage backend error: {reason}")]
    Backend { reason: String },
}

/// Task queue errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("Task queue is closed, message could not be enqueued")]
    Closed,
}

/// Collaborator (retrieval/synthesis) errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("No provider configured for {role}")]
    ProviderNotConfigured { role: String },

    #[error("Request to {provider} failed with status {status}: {message}")]
    RequestFailed {
        provider: String,
        status: i32,
        message: String,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Retrieval failed: {reason}")]
    RetrievalFailed { reason: String },

    #[error("Synthesis failed: {reason}")]
    SynthesisFailed { reason: String },
}

/// Master error type for all Sentinel errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SentinelError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Collaborator error: {0}")]
    Llm(#[from] LlmError),
}

/// Result type alias for Sentinel operations.
pub type SentinelResult<T> = Result<T, SentinelError>;

// =============================================================================
// TESTS
// =============================================================================
