// rulecheck-core/src/domain/rules/rule.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// How a rule is applied by the reviewer.
///
/// Principles steer issue discovery, requirements are checked strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum RuleType {
    #[default]
    Principle,
    Requirement,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principle => "principle",
            Self::Requirement => "requirement",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "principle" => Ok(Self::Principle),
            "requirement" => Ok(Self::Requirement),
            _ => Err(format!("Unknown rule type: {}", s)),
        }
    }
}

impl TryFrom<String> for RuleType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleType> for String {
    fn from(value: RuleType) -> Self {
        value.as_str().to_string()
    }
}

// Declared in ascending order so that `Impact::Low < Impact::Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Impact {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!("Unknown impact level: {}", s)),
        }
    }
}

impl TryFrom<String> for Impact {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Impact> for String {
    fn from(value: Impact) -> Self {
        value.as_str().to_string()
    }
}

pub const DEFAULT_CATEGORY: &str = "general";

/// One rule extracted from a markdown document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub impact: Impact,
    pub category: String,
    pub tags: BTreeSet<String>,
    pub content: String,
    #[serde(skip)]
    pub source: PathBuf,
}

impl Rule {
    pub fn is_principle(&self) -> bool {
        self.rule_type == RuleType::Principle
    }

    pub fn is_requirement(&self) -> bool {
        self.rule_type == RuleType::Requirement
    }

    /// True when at least one of `tags` is carried by this rule.
    pub fn matches_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| self.tags.contains(t.as_ref()))
    }
}
