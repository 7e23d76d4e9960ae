// rulecheck-core/src/domain/review/issue.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// Ascending declaration order gives `Severity::Low < Severity::Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Order in which severity buckets are always presented.
    pub const DISPLAY_ORDER: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub const ALL_NAMES: [&'static str; 4] = ["low", "medium", "high", "critical"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Low => "🔵",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Correctness,
    Performance,
    Maintainability,
    BestPractice,
}

impl IssueCategory {
    pub const ALL_NAMES: [&'static str; 4] = [
        "correctness",
        "performance",
        "maintainability",
        "best-practice",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correctness => "correctness",
            Self::Performance => "performance",
            Self::Maintainability => "maintainability",
            Self::BestPractice => "best-practice",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One finding returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewIssue {
    pub severity: Severity,
    pub category: IssueCategory,
    #[validate(length(min = 1, message = "file cannot be empty"))]
    pub file: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "reasoning cannot be empty"))]
    pub reasoning: String,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub rule_id: Option<String>,
}

impl ReviewIssue {
    /// `file:line`, or just the file when no line was reported.
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file, line),
            None => self.file.clone(),
        }
    }
}
