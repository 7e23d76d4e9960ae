// rulecheck-core/src/infrastructure/adapters/gemini.rs

// HTTP adapter for the Gemini `generateContent` endpoint.
// One request per call; no retry, no local timeout.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::domain::error::DomainError;
use crate::error::RuleCheckError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::model::{GenerationRequest, GenerationResponse, GenerativeModel};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

// --- WIRE FORMAT (request) ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
    max_output_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    include_thoughts: bool,
}

// --- WIRE FORMAT (response) ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thought: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GenerateContentResponse {
    /// Splits the first candidate into answer text and thought summary.
    /// Parts flagged `thought: true` form the trace; everything else is the answer.
    pub fn into_generation_response(self) -> GenerationResponse {
        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();

        let mut text = String::new();
        let mut thoughts: Vec<String> = Vec::new();

        for part in parts {
            let Some(part_text) = part.text else {
                continue;
            };
            if part.thought.unwrap_or(false) {
                thoughts.push(part_text);
            } else {
                text.push_str(&part_text);
            }
        }

        let trace = thoughts.join("\n").trim().to_string();
        GenerationResponse {
            text,
            thinking_trace: (!trace.is_empty()).then_some(trace),
        }
    }
}

fn describe_api_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => format!(
            "{} {}: {}",
            status.as_u16(),
            envelope.error.status.unwrap_or_default(),
            envelope.error.message
        ),
        Err(_) => format!("{}: {}", status, body.chars().take(200).collect::<String>()),
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rulecheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    #[instrument(skip(self, request), fields(model = %request.model, prompt.len = request.prompt.len()))]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, RuleCheckError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
                thinking_config: request
                    .include_thoughts
                    .then_some(ThinkingConfig {
                        include_thoughts: true,
                    }),
            },
        };

        let start = Instant::now();
        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        let status = response.status();
        let raw = response.text().await.map_err(InfrastructureError::Http)?;
        debug!(status = %status, elapsed = ?start.elapsed(), bytes = raw.len(), "Gemini responded");

        if !status.is_success() {
            return Err(DomainError::ReviewFailed(describe_api_error(status, &raw)).into());
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(InfrastructureError::JsonError)?;

        if let Some(reason) = envelope
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .filter(|r| *r != "STOP")
        {
            warn!(finish_reason = reason, "Generation did not finish normally");
        }

        Ok(envelope.into_generation_response())
    }
}
