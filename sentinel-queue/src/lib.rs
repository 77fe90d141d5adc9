//! Sentinel Queue - Task Queue Contract
//!
//! The channel decoupling submission from processing. A task message
//! carries nothing but an investigation id and the agent kind used for
//! routing; the payload semantics live entirely in the status record.
//!
//! The abstract contract is at-least-once delivery to exactly one worker
//! per delivery. [`MemoryTaskQueue`] is the in-process implementation: an
//! unbounded tokio channel whose receiver is shareable across a worker
//! pool. An external broker can be substituted behind the [`TaskQueue`]
//! trait without touching the request service or the worker.

use std::sync::Arc;

use async_trait::async_trait;
use sentinel_core::{AgentKind, InvestigationId, QueueError, SentinelResult};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex};

// ============================================================================
// TASK MESSAGE
// ============================================================================

/// One queued unit of work: a reference to an investigation row plus the
/// kind of agent that should handle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMessage {
    /// Agent kind used for routing to the correct worker handler
    pub kind: AgentKind,
    /// The investigation this task belongs to
    pub investigation_id: InvestigationId,
}

impl TaskMessage {
    /// Create a log-analysis task for the given investigation.
    pub fn log_analysis(investigation_id: InvestigationId) -> Self {
        Self {
            kind: AgentKind::LogAnalyst,
            investigation_id,
        }
    }
}

// ============================================================================
// QUEUE TRAIT
// ============================================================================

/// Producer side of the task queue.
///
/// `enqueue` is fire-and-forget: it never waits for processing, and its
/// only failure mode is the channel being unreachable, surfaced as
/// `QueueError::Closed` so the caller can distinguish it from storage
/// faults.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Enqueue a task message for asynchronous processing.
    async fn enqueue(&self, task: TaskMessage) -> SentinelResult<()>;
}

// ============================================================================
// IN-PROCESS IMPLEMENTATION
// ============================================================================

/// In-process task queue backed by an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct MemoryTaskQueue {
    tx: mpsc::UnboundedSender<TaskMessage>,
}

impl MemoryTaskQueue {
    /// Create a connected queue/receiver pair.
    pub fn channel() -> (Self, TaskReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self { tx },
            TaskReceiver {
                rx: Arc::new(Mutex::new(rx)),
            },
        )
    }
}

#[async_trait]
impl TaskQueue for MemoryTaskQueue {
    async fn enqueue(&self, task: TaskMessage) -> SentinelResult<()> {
        self.tx.send(task).map_err(|_| QueueError::Closed)?;
        Ok(())
    }
}

/// Consumer side of the in-process queue.
///
/// Cloneable so a pool of workers can share one receiver; the mutex
/// guarantees each message is handed to exactly one of them.
#[derive(Debug, Clone)]
pub struct TaskReceiver {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<TaskMessage>>>,
}

impl TaskReceiver {
    /// Receive the next task. Returns `None` once the queue is closed and
    /// drained, which tells a worker loop to exit.
    pub async fn recv(&self) -> Option<TaskMessage> {
        self.rx.lock().await.recv().await
    }
}

// =============================================================================
// TESTS
// =============================================================================
