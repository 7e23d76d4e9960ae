// rulecheck-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Failed to parse model response as JSON: {message}\n--- response preview ---\n{preview}")]
    #[diagnostic(
        code(rulecheck::domain::response_parse),
        help("The model did not return valid JSON. Try another model or a smaller file.")
    )]
    ResponseParse { message: String, preview: String },

    #[error("Model response does not match the review schema: {0}")]
    #[diagnostic(
        code(rulecheck::domain::response_validation),
        help("Every issue needs severity, category, file, title, description and reasoning.")
    )]
    ResponseValidation(String),

    #[error("Code review failed: {0}")]
    #[diagnostic(
        code(rulecheck::domain::review_failed),
        help("Check your API key, network access and the model identifier.")
    )]
    ReviewFailed(String),

    #[error("Invalid rule in {path}: {reason}")]
    #[diagnostic(code(rulecheck::domain::invalid_rule))]
    InvalidRule { path: String, reason: String },
}
