//! Worker metrics.
//!
//! Counters track processing activity across the worker pool and can be
//! exposed through diagnostics endpoints.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for investigation processing.
#[derive(Debug, Default)]
pub struct WorkerMetrics {
    /// Total task messages received since startup
    pub tasks_received: AtomicU64,

    /// Investigations that reached Completed
    pub investigations_completed: AtomicU64,

    /// Investigations that reached Failed
    pub investigations_failed: AtomicU64,

    /// Messages dropped: missing record or rejected transition
    pub tasks_dropped: AtomicU64,
}

impl WorkerMetrics {
    /// Create new metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current snapshot of all metrics.
    pub fn snapshot(&self) -> WorkerMetricsSnapshot {
        WorkerMetricsSnapshot {
            tasks_received: self.tasks_received.load(Ordering::Relaxed),
            investigations_completed: self.investigations_completed.load(Ordering::Relaxed),
            investigations_failed: self.investigations_failed.load(Ordering::Relaxed),
            tasks_dropped: self.tasks_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of worker metrics at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerMetricsSnapshot {
    pub tasks_received: u64,
    pub investigations_completed: u64,
    pub investigations_failed: u64,
    pub tasks_dropped: u64,
}
