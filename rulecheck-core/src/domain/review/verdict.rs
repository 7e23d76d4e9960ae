// rulecheck-core/src/domain/review/verdict.rs

use super::issue::Severity;
use super::result::ReviewResult;

/// Process-level decision derived from the issue severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No high or critical issue.
    Passed,
    /// High issues but nothing critical: succeed with a warning banner.
    Warning,
    /// At least one critical issue.
    Failed,
}

impl Verdict {
    pub fn from_result(result: &ReviewResult) -> Self {
        if result.has_severity(Severity::Critical) {
            Self::Failed
        } else if result.has_severity(Severity::High) {
            Self::Warning
        } else {
            Self::Passed
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed | Self::Warning => 0,
            Self::Failed => 1,
        }
    }
}
