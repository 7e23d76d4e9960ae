// rulecheck-core/src/domain/review/result.rs

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use super::issue::{ReviewIssue, Severity};

/// Outcome of one review call, consumed by the report renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    /// Issues in the order the model returned them.
    pub issues: Vec<ReviewIssue>,
    pub summary: String,
    pub overall_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_trace: Option<String>,
    pub files_reviewed: BTreeSet<String>,
    pub total_lines: usize,
    pub model: String,
    pub reviewed_at: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Where a finding comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueOrigin {
    /// `ruleId` names a loaded rule.
    RuleBased,
    /// No `ruleId`: found by the model on its own.
    AiDiscovered,
    /// `ruleId` is set but matches none of the loaded rules.
    UnknownRule,
}

impl IssueOrigin {
    pub fn classify(issue: &ReviewIssue, known_rule_ids: &HashSet<String>) -> Self {
        match issue.rule_id.as_deref() {
            None => Self::AiDiscovered,
            Some(id) if known_rule_ids.contains(id) => Self::RuleBased,
            Some(_) => Self::UnknownRule,
        }
    }
}

impl ReviewResult {
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for issue in &self.issues {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }

    pub fn has_severity(&self, severity: Severity) -> bool {
        self.issues.iter().any(|i| i.severity == severity)
    }

    /// Issues sharing `origin`, original order preserved.
    pub fn issues_from<'a>(
        &'a self,
        origin: IssueOrigin,
        known_rule_ids: &HashSet<String>,
    ) -> Vec<&'a ReviewIssue> {
        self.issues
            .iter()
            .filter(|i| IssueOrigin::classify(i, known_rule_ids) == origin)
            .collect()
    }
}

/// Buckets `issues` by severity, critical first. Every bucket is present even
/// when empty, and each issue lands in exactly one bucket.
pub fn group_by_severity<'a, I>(issues: I) -> Vec<(Severity, Vec<&'a ReviewIssue>)>
where
    I: IntoIterator<Item = &'a ReviewIssue>,
{
    let mut buckets: Vec<(Severity, Vec<&'a ReviewIssue>)> = Severity::DISPLAY_ORDER
        .iter()
        .map(|s| (*s, Vec::new()))
        .collect();

    for issue in issues {
        if let Some((_, bucket)) = buckets.iter_mut().find(|(s, _)| *s == issue.severity) {
            bucket.push(issue);
        }
    }
    buckets
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::review::issue::IssueCategory;

    pub(crate) fn issue(severity: Severity, rule_id: Option<&str>) -> ReviewIssue {
        ReviewIssue {
            severity,
            category: IssueCategory::Correctness,
            file: "src/lib.rs".into(),
            line: Some(1),
            title: format!("{} issue", severity),
            description: "desc".into(),
            reasoning: "why".into(),
            suggestion: None,
            rule_id: rule_id.map(str::to_string),
        }
    }

    pub(crate) fn result_with(issues: Vec<ReviewIssue>) -> ReviewResult {
        ReviewResult {
            issues,
            summary: "ok".into(),
            overall_score: 80.0,
            thinking_trace: None,
            files_reviewed: BTreeSet::from(["src/lib.rs".to_string()]),
            total_lines: 10,
            model: "test-model".into(),
            reviewed_at: "2026-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_grouping_partitions_exhaustively() {
        let result = result_with(vec![
            issue(Severity::Low, None),
            issue(Severity::Critical, Some("r1")),
            issue(Severity::High, None),
            issue(Severity::Low, Some("r2")),
            issue(Severity::Medium, None),
        ]);

        let groups = group_by_severity(&result.issues);
        let order: Vec<Severity> = groups.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Severity::DISPLAY_ORDER.to_vec());

        let total: usize = groups.iter().map(|(_, b)| b.len()).sum();
        assert_eq!(total, result.issues.len());
        for (severity, bucket) in &groups {
            assert!(bucket.iter().all(|i| i.severity == *severity));
        }
        assert_eq!(result.severity_counts().low, 2);
        assert_eq!(result.severity_counts().total(), 5);
    }

    #[test]
    fn test_origin_classification() {
        let known: HashSet<String> = ["r1".to_string()].into_iter().collect();
        let result = result_with(vec![
            issue(Severity::High, Some("r1")),
            issue(Severity::High, None),
            issue(Severity::Low, Some("ghost")),
        ]);

        assert_eq!(result.issues_from(IssueOrigin::RuleBased, &known).len(), 1);
        assert_eq!(result.issues_from(IssueOrigin::AiDiscovered, &known).len(), 1);
        let unknown = result.issues_from(IssueOrigin::UnknownRule, &known);
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].rule_id.as_deref(), Some("ghost"));
    }
}
