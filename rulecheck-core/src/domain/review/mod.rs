// rulecheck-core/src/domain/review/mod.rs

pub mod issue;
pub mod result;
pub mod source;
pub mod verdict;

pub use issue::{IssueCategory, ReviewIssue, Severity};
pub use result::{IssueOrigin, ReviewResult, SeverityCounts, group_by_severity};
pub use source::SourceFile;
pub use verdict::Verdict;
