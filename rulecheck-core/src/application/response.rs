// rulecheck-core/src/application/response.rs

// The response contract: the schema declared to the model and the strict
// decoding of what comes back.

use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::OnceLock;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::review::{IssueCategory, ReviewIssue, Severity};

pub const MISSING_SUMMARY: &str = "No summary provided";
pub const PREVIEW_CHARS: usize = 200;

fn re_code_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*[ \t]*\r?\n(.*?)\s*```\s*$").unwrap_or_else(|_| {
            // Hardcoded pattern; the fallback matches nothing.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

/// Decoded model answer before local bookkeeping is added.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPayload {
    pub issues: Vec<ReviewIssue>,
    pub summary: String,
    pub overall_score: f64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    #[serde(default)]
    #[validate(nested)]
    issues: Option<Vec<ReviewIssue>>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "overallScore must be within 0..=100"))]
    overall_score: Option<f64>,
}

/// Schema sent as `responseSchema` (OpenAPI subset understood by Gemini).
pub fn review_response_schema() -> Value {
    let issue = json!({
        "type": "OBJECT",
        "properties": {
            "severity": { "type": "STRING", "enum": Severity::ALL_NAMES },
            "category": { "type": "STRING", "enum": IssueCategory::ALL_NAMES },
            "file": { "type": "STRING" },
            "line": { "type": "INTEGER", "nullable": true },
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "reasoning": { "type": "STRING" },
            "suggestion": { "type": "STRING", "nullable": true },
            "ruleId": { "type": "STRING", "nullable": true }
        },
        "required": ["severity", "category", "file", "title", "description", "reasoning"],
        "propertyOrdering": [
            "severity", "category", "file", "line", "title",
            "description", "reasoning", "suggestion", "ruleId"
        ]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "issues": { "type": "ARRAY", "items": issue },
            "summary": { "type": "STRING" },
            "overallScore": { "type": "NUMBER" }
        },
        "required": ["issues", "summary", "overallScore"],
        "propertyOrdering": ["issues", "summary", "overallScore"]
    })
}

/// First `PREVIEW_CHARS` characters of `raw`, marked when cut.
pub fn preview(raw: &str) -> String {
    let mut out: String = raw.chars().take(PREVIEW_CHARS).collect();
    if raw.chars().count() > PREVIEW_CHARS {
        out.push('…');
    }
    out
}

fn strip_code_fence(raw: &str) -> &str {
    match re_code_fence().captures(raw).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => raw.trim(),
    }
}

/// Parses and validates the raw answer text.
///
/// Invalid JSON is a [`DomainError::ResponseParse`]; valid JSON that breaks the
/// issue contract (unknown enum value, missing field, blank text, score out of
/// range) is a [`DomainError::ResponseValidation`].
pub fn parse_review_payload(raw: &str) -> Result<ReviewPayload, DomainError> {
    let value: Value =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| DomainError::ResponseParse {
            message: e.to_string(),
            preview: preview(raw),
        })?;

    let payload: RawPayload = serde_json::from_value(value)
        .map_err(|e| DomainError::ResponseValidation(e.to_string()))?;

    payload
        .validate()
        .map_err(|e| DomainError::ResponseValidation(e.to_string()))?;

    let issues = payload
        .issues
        .unwrap_or_default()
        .into_iter()
        .map(|mut issue| {
            issue.rule_id = issue
                .rule_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty() && id != "null");
            issue
        })
        .collect();

    Ok(ReviewPayload {
        issues,
        summary: payload
            .summary
            .unwrap_or_else(|| MISSING_SUMMARY.to_string()),
        overall_score: payload.overall_score.unwrap_or(0.0),
    })
}
