//! Worker run loop and the per-task state machine.

use std::sync::Arc;

use sentinel_core::SentinelError;
use sentinel_queue::{TaskMessage, TaskReceiver};
use sentinel_storage::{InvestigationStore, InvestigationUpdate};
use std::sync::atomic::Ordering;
use tokio::sync::watch;

use crate::dispatcher::Dispatcher;
use crate::metrics::WorkerMetrics;

/// Shared dependencies of a worker task, constructed once at startup and
/// injected into every worker in the pool.
#[derive(Clone)]
pub struct WorkerContext {
    pub store: Arc<dyn InvestigationStore>,
    pub dispatcher: Arc<Dispatcher>,
    pub metrics: Arc<WorkerMetrics>,
}

/// Run one worker until the queue closes or shutdown is signalled.
///
/// Multiple workers may run concurrently against the same receiver; each
/// message is delivered to exactly one of them. A worker never lets a task
/// error escape this loop: every outcome lands in the status record.
pub async fn run_worker(
    ctx: WorkerContext,
    receiver: TaskReceiver,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tracing::info!("Investigation worker started");

    loop {
        tokio::select! {
            _ = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    tracing::info!("Investigation worker shutting down");
                    break;
                }
            }
            task = receiver.recv() => {
                match task {
                    Some(task) => {
                        ctx.metrics.tasks_received.fetch_add(1, Ordering::Relaxed);
                        process_task(&ctx, task).await;
                    }
                    None => {
                        tracing::info!("Task queue closed, worker exiting");
                        break;
                    }
                }
            }
        }
    }
}

/// Drive one investigation through its state machine.
///
/// Pending -> InProgress -> Completed on success, Failed on any
/// collaborator error. Exactly one attempt; collaborator failures are
/// recorded in-band in the summary field and never re-raised, so the queue
/// sees no poison messages.
pub async fn process_task(ctx: &WorkerContext, task: TaskMessage) {
    let id = task.investigation_id;

    // Step 1: load the record. Without one there is nothing to update.
    let investigation = match ctx.store.get(id).await {
        Ok(Some(investigation)) => investigation,
        Ok(None) => {
            tracing::warn!(investigation_id = %id, "Task references a missing investigation, dropping");
            ctx.metrics.tasks_dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        Err(e) => {
            tracing::error!(investigation_id = %id, error = %e, "Failed to load investigation, dropping task");
            ctx.metrics.tasks_dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };

    // Step 2: claim the record so concurrent status polls observe progress.
    // The store rejects this write if another delivery already advanced the
    // record, which makes a duplicate a logged no-op.
    let investigation = match ctx
        .store
        .update(id, InvestigationUpdate::in_progress())
        .await
    {
        Ok(investigation) => investigation,
        Err(e) => {
            tracing::warn!(
                investigation_id = %id,
                status = %investigation.status,
                error = %e,
                "Could not move investigation to IN_PROGRESS, dropping task"
            );
            ctx.metrics.tasks_dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };

    tracing::info!(
        investigation_id = %id,
        query = %investigation.query,
        "Investigation started"
    );

    // Steps 3-4: route to the agent and run retrieval + synthesis.
    let outcome = match ctx.dispatcher.agent_for(task.kind) {
        Some(agent) => agent.run(&investigation).await,
        None => {
            tracing::warn!(investigation_id = %id, kind = %task.kind, "No agent registered for kind");
            Err(SentinelError::Llm(sentinel_core::LlmError::ProviderNotConfigured {
                role: format!("agent kind {}", task.kind),
            }))
        }
    };

    // Steps 5-6: exactly one terminal write, always carrying a summary.
    match outcome {
        Ok(summary) => {
            match ctx
                .store
                .update(id, InvestigationUpdate::completed(summary))
                .await
            {
                Ok(_) => {
                    ctx.metrics
                        .investigations_completed
                        .fetch_add(1, Ordering::Relaxed);
                    tracing::info!(investigation_id = %id, "Investigation completed");
                }
                Err(e) => {
                    ctx.metrics.tasks_dropped.fetch_add(1, Ordering::Relaxed);
                    tracing::error!(investigation_id = %id, error = %e, "Failed to persist completion");
                }
            }
        }
        Err(e) => {
            let summary = format!("An error occurred during analysis: {}", e);
            match ctx
                .store
                .update(id, InvestigationUpdate::failed(summary))
                .await
            {
                Ok(_) => {
                    ctx.metrics
                        .investigations_failed
                        .fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(investigation_id = %id, error = %e, "Investigation failed");
                }
                Err(persist_err) => {
                    ctx.metrics.tasks_dropped.fetch_add(1, Ordering::Relaxed);
                    tracing::error!(
                        investigation_id = %id,
                        error = %persist_err,
                        "Failed to persist failure state"
                    );
                }
            }
        }
    }
}
