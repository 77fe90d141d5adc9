//! Investigation REST API Routes
//!
//! Submit creates the status record and enqueues the background task;
//! fetch serves read-only status lookups. Submission never waits for the
//! worker - clients poll the record until it reaches a terminal state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use sentinel_queue::{TaskMessage, TaskQueue};
use sentinel_storage::InvestigationStore;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateInvestigationRequest, InvestigationResponse},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/investigations - Submit a new investigation
#[utoipa::path(
    post,
    path = "/api/v1/investigations",
    tag = "Investigations",
    request_body = CreateInvestigationRequest,
    responses(
        (status = 201, description = "Investigation created and task enqueued", body = InvestigationResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 503, description = "Task queue unavailable", body = ApiError),
    ),
)]
pub async fn submit_investigation(
    State(store): State<Arc<dyn InvestigationStore>>,
    State(queue): State<Arc<dyn TaskQueue>>,
    Json(req): Json<CreateInvestigationRequest>,
) -> ApiResult<impl IntoResponse> {
    // Validate required fields
    if req.query.trim().is_empty() {
        return Err(ApiError::missing_field("query"));
    }

    let investigation = store.create(&req.query).await?;

    if let Err(e) = queue
        .enqueue(TaskMessage::log_analysis(investigation.investigation_id))
        .await
    {
        // The record exists but will never progress; the caller learns the
        // submission did not take, the record stays visible as PENDING.
        tracing::error!(
            investigation_id = %investigation.investigation_id,
            error = %e,
            "Failed to enqueue investigation task, record remains PENDING"
        );
        return Err(e.into());
    }

    tracing::info!(
        investigation_id = %investigation.investigation_id,
        "Investigation submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(InvestigationResponse::from(investigation)),
    ))
}

/// GET /api/v1/investigations/{id} - Get investigation status and result
#[utoipa::path(
    get,
    path = "/api/v1/investigations/{id}",
    tag = "Investigations",
    params(
        ("id" = Uuid, Path, description = "Investigation ID")
    ),
    responses(
        (status = 200, description = "Investigation record", body = InvestigationResponse),
        (status = 404, description = "Investigation not found", body = ApiError),
    ),
)]
pub async fn get_investigation(
    State(store): State<Arc<dyn InvestigationStore>>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let investigation = store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::investigation_not_found(id))?;

    Ok(Json(InvestigationResponse::from(investigation)))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the investigation routes router.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::post(submit_investigation))
        .route("/:id", axum::routing::get(get_investigation))
}
