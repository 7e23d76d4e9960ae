// rulecheck-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(rulecheck::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(rulecheck::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(rulecheck::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Missing API credential: set the {0} environment variable")]
    #[diagnostic(
        code(rulecheck::infra::credential_missing),
        help("Create an API key in Google AI Studio and export it before running rulecheck.")
    )]
    MissingCredential(String),

    #[error("Rules directory not found at '{0}'")]
    #[diagnostic(
        code(rulecheck::infra::rules_dir_missing),
        help("Pass --rules-dir or create a 'rules/' folder with markdown rule files.")
    )]
    RulesDirNotFound(String),

    #[error("Source file not found at '{0}'")]
    #[diagnostic(code(rulecheck::infra::source_missing))]
    SourceFileNotFound(String),

    // --- HTTP ---
    #[error("HTTP Error: {0}")]
    #[diagnostic(code(rulecheck::infra::http))]
    Http(#[from] reqwest::Error),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(rulecheck::infra::template),
        help("Check the Jinja syntax of the review prompt template.")
    )]
    TemplateError(#[from] minijinja::Error),
}
