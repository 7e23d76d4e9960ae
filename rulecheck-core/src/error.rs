// rulecheck-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum RuleCheckError {
    // --- DOMAIN ERRORS (response contract, rules) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, parsing, HTTP) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    #[diagnostic(code(rulecheck::internal))]
    InternalError(String),
}

// Shortcut for `?` on std::io calls
impl From<std::io::Error> for RuleCheckError {
    fn from(err: std::io::Error) -> Self {
        RuleCheckError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl RuleCheckError {
    /// Configuration problems are detected before any remote call.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RuleCheckError::Infrastructure(
                InfrastructureError::MissingCredential(_)
                    | InfrastructureError::RulesDirNotFound(_)
                    | InfrastructureError::SourceFileNotFound(_)
                    | InfrastructureError::ConfigError(_)
                    | InfrastructureError::YamlError(_)
            )
        )
    }
}
