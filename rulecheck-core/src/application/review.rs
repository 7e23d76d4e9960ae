// rulecheck-core/src/application/review.rs

use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::application::ports::TemplateEngine;
use crate::application::prompt::build_review_prompt;
use crate::application::response::{parse_review_payload, review_response_schema};
use crate::domain::error::DomainError;
use crate::domain::review::{ReviewResult, SourceFile};
use crate::error::RuleCheckError;
use crate::ports::model::{GenerationRequest, GenerativeModel};

#[derive(Debug, Clone)]
pub struct ReviewOptions {
    pub model: String,
    /// Advisory: asks the service for a thought summary when supported.
    pub enable_deep_thinking: bool,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Reviews `files` with one call to `model` and decodes the answer.
///
/// Transport and service failures come back as [`DomainError::ReviewFailed`];
/// a malformed answer keeps its parse/validation error.
#[instrument(skip_all, fields(model = %options.model, files = files.len()))]
pub async fn review_code(
    model: &dyn GenerativeModel,
    engine: &dyn TemplateEngine,
    files: &[SourceFile],
    rules_prompt: &str,
    options: &ReviewOptions,
) -> Result<ReviewResult, RuleCheckError> {
    let prompt = build_review_prompt(engine, files, rules_prompt)?;

    if options.enable_deep_thinking {
        info!("Deep thinking enabled");
    } else {
        debug!("Deep thinking disabled");
    }

    let request = GenerationRequest {
        model: options.model.clone(),
        prompt,
        response_schema: review_response_schema(),
        max_tokens: options.max_tokens,
        temperature: options.temperature,
        include_thoughts: options.enable_deep_thinking,
    };

    let start = Instant::now();
    let response = model.generate(&request).await.map_err(|e| match e {
        RuleCheckError::Domain(DomainError::ReviewFailed(_)) => e,
        other => RuleCheckError::Domain(DomainError::ReviewFailed(other.to_string())),
    })?;
    info!(elapsed = ?start.elapsed(), bytes = response.text.len(), "Model answered");

    let payload = parse_review_payload(&response.text)?;

    Ok(ReviewResult {
        issues: payload.issues,
        summary: payload.summary,
        overall_score: payload.overall_score,
        thinking_trace: response.thinking_trace,
        files_reviewed: files.iter().map(|f| f.path.clone()).collect(),
        total_lines: files.iter().map(SourceFile::line_count).sum(),
        model: options.model.clone(),
        reviewed_at: Utc::now().to_rfc3339(),
    })
}
