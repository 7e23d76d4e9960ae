// rulecheck-core/src/ports/model.rs

// The outbound seam towards the remote generative model. The application layer
// only knows this contract; the HTTP details live in the Gemini adapter.

use crate::error::RuleCheckError;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    /// JSON schema the response text must satisfy.
    pub response_schema: serde_json::Value,
    pub max_tokens: u32,
    pub temperature: f32,
    pub include_thoughts: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationResponse {
    /// Raw answer text, expected to be a JSON document.
    pub text: String,
    pub thinking_trace: Option<String>,
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
    -> Result<GenerationResponse, RuleCheckError>;
}
