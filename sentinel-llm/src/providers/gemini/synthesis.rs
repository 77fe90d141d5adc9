//! Gemini synthesis provider implementation

use super::client::GeminiClient;
use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::prompt::build_analysis_prompt;
use crate::providers::invalid_response;
use crate::SynthesisProvider;
use async_trait::async_trait;
use sentinel_core::SentinelResult;

/// Gemini summary synthesis provider.
pub struct GeminiSynthesisProvider {
    client: GeminiClient,
    model: String,
}

impl GeminiSynthesisProvider {
    /// Create a new synthesis provider.
    ///
    /// # Arguments
    /// * `client` - Configured Gemini client
    /// * `model` - Model name (e.g. "gemini-pro")
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Create a provider with the default gemini-pro model.
    pub fn with_default_model(client: GeminiClient) -> Self {
        Self::new(client, "gemini-pro")
    }
}

#[async_trait]
impl SynthesisProvider for GeminiSynthesisProvider {
    async fn summarize(&self, query: &str, context: &str) -> SentinelResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_analysis_prompt(query, context),
                }],
            }],
            // Deterministic output for incident reports
            generation_config: Some(GenerationConfig { temperature: 0.0 }),
        };

        let response = self.client.generate(&self.model, request).await?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| invalid_response("gemini", "No candidate in response"))
    }

    fn provider_id(&self) -> &str {
        "gemini"
    }
}

impl std::fmt::Debug for GeminiSynthesisProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSynthesisProvider")
            .field("model", &self.model)
            .finish()
    }
}
