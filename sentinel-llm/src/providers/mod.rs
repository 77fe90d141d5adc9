//! Collaborator provider implementations
//!
//! This module contains concrete implementations of the RetrievalProvider
//! and SynthesisProvider traits for external services.

pub mod gemini;
pub mod weaviate;

pub use gemini::{GeminiClient, GeminiSynthesisProvider};
pub use weaviate::{WeaviateClient, WeaviateRetrievalProvider};

use sentinel_core::{LlmError, SentinelError};

/// Build a RequestFailed error for a provider.
pub(crate) fn request_failed(
    provider: &str,
    status: i32,
    message: impl Into<String>,
) -> SentinelError {
    SentinelError::Llm(LlmError::RequestFailed {
        provider: provider.to_string(),
        status,
        message: message.into(),
    })
}

/// Build an InvalidResponse error for a provider.
pub(crate) fn invalid_response(provider: &str, reason: impl Into<String>) -> SentinelError {
    SentinelError::Llm(LlmError::InvalidResponse {
        provider: provider.to_string(),
        reason: reason.into(),
    })
}
