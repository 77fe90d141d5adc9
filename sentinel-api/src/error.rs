//! Error Types for the Sentinel API
//!
//! Defines error handling for the HTTP layer:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! All errors are serialized as JSON with appropriate HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sentinel_core::{QueueError, SentinelError, StorageError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each error code maps to a specific HTTP status code and represents
/// a category of error that can occur during API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Validation Errors (400)
    // ========================================================================
    /// Request contains invalid input data
    InvalidInput,

    /// Required field is missing from request
    MissingField,

    // ========================================================================
    // Not Found Errors (404)
    // ========================================================================
    /// Requested investigation does not exist
    InvestigationNotFound,

    // ========================================================================
    // Conflict Errors (409)
    // ========================================================================
    /// Operation conflicts with the record's current state
    StateConflict,

    // ========================================================================
    // Server Errors (500, 503)
    // ========================================================================
    /// Internal server error
    InternalError,

    /// Storage operation failed
    DatabaseError,

    /// Task queue or another dependency is unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput | ErrorCode::MissingField => StatusCode::BAD_REQUEST,

            ErrorCode::InvestigationNotFound => StatusCode::NOT_FOUND,

            ErrorCode::StateConflict => StatusCode::CONFLICT,

            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            ErrorCode::InternalError | ErrorCode::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input data",
            ErrorCode::MissingField => "Required field is missing",
            ErrorCode::InvestigationNotFound => "Investigation not found",
            ErrorCode::StateConflict => "Operation conflicts with current state",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Storage operation failed",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details (field errors, backend diagnostics, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a new API error with the given code, using the default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            details: None,
        }
    }

    /// Add additional details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors for common errors
    // ========================================================================

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a MissingField error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Required field '{}' is missing", field),
        )
    }

    /// Create an InvestigationNotFound error.
    pub fn investigation_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvestigationNotFound,
            format!("Investigation {} not found", id),
        )
    }

    /// Create a StateConflict error.
    pub fn state_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StateConflict, message)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a DatabaseError.
    pub fn database_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Create a ServiceUnavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

impl From<SentinelError> for ApiError {
    fn from(e: SentinelError) -> Self {
        match e {
            SentinelError::Storage(StorageError::NotFound { id }) => {
                ApiError::investigation_not_found(id)
            }
            SentinelError::Storage(StorageError::InvalidTransition { .. }) => {
                ApiError::state_conflict(e.to_string())
            }
            SentinelError::Storage(other) => ApiError::database_error(other.to_string()),
            SentinelError::Queue(QueueError::Closed) => {
                ApiError::service_unavailable("Task queue unavailable")
            }
            SentinelError::Llm(other) => ApiError::internal_error(other.to_string()),
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::{new_entity_id, InvestigationStatus};

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(
            ErrorCode::MissingField.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvestigationNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::StateConflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::ServiceUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::DatabaseError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_serialization_uses_screaming_snake_case() {
        let err = ApiError::from_code(ErrorCode::InvestigationNotFound);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"INVESTIGATION_NOT_FOUND\""));
    }

    #[test]
    fn test_missing_field_message() {
        let err = ApiError::missing_field("query");
        assert_eq!(err.code, ErrorCode::MissingField);
        assert!(err.message.contains("'query'"));
    }

    #[test]
    fn test_api_error_with_details() {
        let details = serde_json::json!({"field": "query"});
        let err = ApiError::missing_field("query").with_details(details.clone());
        assert_eq!(err.details, Some(details));

        // details are omitted from the wire format when absent
        let bare = ApiError::from_code(ErrorCode::InternalError);
        let json = serde_json::to_string(&bare).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_from_storage_not_found() {
        let id = new_entity_id();
        let err: ApiError = SentinelError::Storage(StorageError::NotFound { id }).into();
        assert_eq!(err.code, ErrorCode::InvestigationNotFound);
        assert!(err.message.contains(&id.to_string()));
    }

    #[test]
    fn test_from_invalid_transition() {
        let err: ApiError = SentinelError::Storage(StorageError::InvalidTransition {
            id: new_entity_id(),
            from: InvestigationStatus::Completed,
            to: InvestigationStatus::InProgress,
        })
        .into();
        assert_eq!(err.code, ErrorCode::StateConflict);
    }

    #[test]
    fn test_from_queue_closed() {
        let err: ApiError = SentinelError::Queue(QueueError::Closed).into();
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
    }
}
