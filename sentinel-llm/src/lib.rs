//! Sentinel LLM - Collaborator Abstraction Layer
//!
//! Provider-agnostic traits for the two external collaborators of an
//! investigation: semantic log retrieval and summary synthesis. Concrete
//! providers live under [`providers`]; deterministic mocks ship here so
//! the worker and API can be exercised without network access.

pub mod prompt;
pub mod providers;

pub use providers::{GeminiClient, GeminiSynthesisProvider, WeaviateClient, WeaviateRetrievalProvider};

use async_trait::async_trait;
use sentinel_core::{LlmError, SentinelResult};

/// Context text returned when a search matches nothing. Retrieval coming
/// back empty is a success case, not a failure: the synthesis step still
/// runs and reports the absence of evidence.
pub const NO_RESULTS_SENTINEL: &str = "No relevant log entries found.";

// ============================================================================
// RETRIEVAL PROVIDER TRAIT
// ============================================================================

/// Trait for semantic log retrieval providers.
/// Implementations must be thread-safe (Send + Sync).
///
/// # Example
/// ```ignore
/// struct WeaviateRetrievalProvider { /* ... */ }
///
/// #[async_trait]
/// impl RetrievalProvider for WeaviateRetrievalProvider {
///     async fn search(&self, query: &str) -> SentinelResult<String> {
///         // Vector search, formatted into a context blob
///     }
/// }
/// ```
#[async_trait]
pub trait RetrievalProvider: Send + Sync {
    /// Search for log entries relevant to the query.
    ///
    /// # Returns
    /// * `Ok(String)` - A formatted context blob; [`NO_RESULTS_SENTINEL`]
    ///   when nothing matched
    /// * `Err(SentinelError::Llm)` - If the search itself failed
    async fn search(&self, query: &str) -> SentinelResult<String>;

    /// Identifier of this provider for logging and error messages.
    fn provider_id(&self) -> &str;
}

// ============================================================================
// SYNTHESIS PROVIDER TRAIT
// ============================================================================

/// Trait for summary synthesis providers.
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait SynthesisProvider: Send + Sync {
    /// Produce an incident summary from the query and retrieved context.
    ///
    /// # Returns
    /// * `Ok(String)` - The generated summary
    /// * `Err(SentinelError::Llm)` - If generation failed
    async fn summarize(&self, query: &str, context: &str) -> SentinelResult<String>;

    /// Identifier of this provider for logging and error messages.
    fn provider_id(&self) -> &str;
}

// ============================================================================
// MOCK PROVIDERS FOR TESTING
// ============================================================================

/// Mock retrieval provider returning a fixed context blob.
#[derive(Debug, Clone)]
pub struct MockRetrievalProvider {
    context: String,
}

impl MockRetrievalProvider {
    /// Create a mock that returns the given context for every query.
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// Create a mock whose searches never match anything.
    pub fn empty() -> Self {
        Self {
            context: NO_RESULTS_SENTINEL.to_string(),
        }
    }
}

#[async_trait]
impl RetrievalProvider for MockRetrievalProvider {
    async fn search(&self, _query: &str) -> SentinelResult<String> {
        Ok(self.context.clone())
    }

    fn provider_id(&self) -> &str {
        "mock-retrieval"
    }
}

/// Mock synthesis provider producing a deterministic summary.
#[derive(Debug, Clone, Default)]
pub struct MockSynthesisProvider;

impl MockSynthesisProvider {
    /// Create a new mock synthesis provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SynthesisProvider for MockSynthesisProvider {
    async fn summarize(&self, query: &str, context: &str) -> SentinelResult<String> {
        if context == NO_RESULTS_SENTINEL {
            Ok(format!(
                "No relevant log entries were found for \"{}\".",
                query
            ))
        } else {
            Ok(format!("Summary for \"{}\": {}", query, context))
        }
    }

    fn provider_id(&self) -> &str {
        "mock-synthesis"
    }
}

/// Mock provider whose calls always fail. Used to exercise the worker's
/// failure path.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    /// Create a failing provider with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RetrievalProvider for FailingProvider {
    async fn search(&self, _query: &str) -> SentinelResult<String> {
        Err(LlmError::RetrievalFailed {
            reason: self.message.clone(),
        }
        .into())
    }

    fn provider_id(&self) -> &str {
        "failing"
    }
}

#[async_trait]
impl SynthesisProvider for FailingProvider {
    async fn summarize(&self, _query: &str, _context: &str) -> SentinelResult<String> {
        Err(LlmError::SynthesisFailed {
            reason: self.message.clone(),
        }
        .into())
    }

    fn provider_id(&self) -> &str {
        "failing"
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_retrieval_returns_context() {
        let provider = MockRetrievalProvider::with_context("- entry one (IP: 10.0.0.5)");
        let context = provider.search("failed logins").await.unwrap();
        assert_eq!(context, "- entry one (IP: 10.0.0.5)");
    }

    #[tokio::test]
    async fn test_mock_retrieval_empty_yields_sentinel() {
        let provider = MockRetrievalProvider::empty();
        let context = provider.search("gibberish query").await.unwrap();
        assert_eq!(context, NO_RESULTS_SENTINEL);
    }

    #[tokio::test]
    async fn test_mock_synthesis_is_deterministic() {
        let provider = MockSynthesisProvider::new();
        let a = provider.summarize("q", "ctx").await.unwrap();
        let b = provider.summarize("q", "ctx").await.unwrap();
        assert_eq!(a, b);
        assert!(a.contains("q"));
    }

    #[tokio::test]
    async fn test_mock_synthesis_reflects_no_results() {
        let provider = MockSynthesisProvider::new();
        let summary = provider
            .summarize("gibberish", NO_RESULTS_SENTINEL)
            .await
            .unwrap();
        assert!(summary.contains("No relevant log entries"));
    }

    #[tokio::test]
    async fn test_failing_provider_errors() {
        let provider = FailingProvider::new("synthesis timeout");
        let err = SynthesisProvider::summarize(&provider, "q", "ctx")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("synthesis timeout"));

        let err = RetrievalProvider::search(&provider, "q").await.unwrap_err();
        assert!(err.to_string().contains("synthesis timeout"));
    }
}
