// rulecheck-core/src/application/report.rs

// Console rendering of a review. Pure: builds strings, never prints or exits.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use std::collections::HashSet;

use crate::domain::review::{
    IssueOrigin, ReviewIssue, ReviewResult, Severity, Verdict, group_by_severity,
};
use crate::error::RuleCheckError;

const RULE: &str = "────────────────────────────────────────────────────────────";

fn summary_table(result: &ReviewResult) -> Table {
    let counts = result.severity_counts();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);

    table.add_row(vec![Cell::new("Total issues"), Cell::new(counts.total())]);
    for severity in Severity::DISPLAY_ORDER {
        table.add_row(vec![
            Cell::new(format!("{} {}", severity.icon(), severity.as_str().to_uppercase())),
            Cell::new(counts.get(severity)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Overall score"),
        Cell::new(format!("{:.0}/100", result.overall_score)),
    ]);
    table.add_row(vec![
        Cell::new("Files reviewed"),
        Cell::new(result.files_reviewed.len()),
    ]);
    table.add_row(vec![Cell::new("Lines reviewed"), Cell::new(result.total_lines)]);
    table.add_row(vec![Cell::new("Model"), Cell::new(&result.model)]);
    table
}

fn render_issue(out: &mut String, issue: &ReviewIssue, origin: IssueOrigin) {
    out.push_str(&format!("    ▸ {}\n", issue.title));
    out.push_str(&format!("      📍 {} · {}\n", issue.location(), issue.category));
    out.push_str(&format!("      {}\n", issue.description));
    out.push_str(&format!("      💭 Reasoning: {}\n", issue.reasoning));
    if let Some(suggestion) = issue.suggestion.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!("      💡 Suggestion: {}\n", suggestion));
    }
    match (origin, issue.rule_id.as_deref()) {
        (IssueOrigin::RuleBased, Some(id)) => out.push_str(&format!("      📏 Rule: {}\n", id)),
        (IssueOrigin::UnknownRule, Some(id)) => {
            out.push_str(&format!("      ❓ Unknown rule: {}\n", id))
        }
        _ => out.push_str("      🤖 AI insight\n"),
    }
    out.push('\n');
}

fn render_group(out: &mut String, heading: &str, issues: &[&ReviewIssue], origin: IssueOrigin) {
    out.push_str(&format!("\n{} ({})\n{}\n", heading, issues.len(), RULE));

    if issues.is_empty() {
        out.push_str("  None.\n");
        return;
    }

    for (severity, bucket) in group_by_severity(issues.iter().copied()) {
        if bucket.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n  {} {} ({})\n\n",
            severity.icon(),
            severity.as_str().to_uppercase(),
            bucket.len()
        ));
        for issue in bucket {
            render_issue(out, issue, origin);
        }
    }
}

/// Full human-readable report.
///
/// Issues are split by origin (rule-based, AI-discovered, unknown rule id) and,
/// inside each group, by severity from critical down to low.
pub fn render_report(result: &ReviewResult, known_rule_ids: &HashSet<String>) -> String {
    let mut out = String::new();

    out.push_str("\n📊 Review Summary\n");
    out.push_str(&summary_table(result).to_string());
    out.push('\n');

    if let Some(trace) = result.thinking_trace.as_deref() {
        out.push_str(&format!("\n🧠 Model reasoning\n{}\n{}\n", RULE, trace.trim()));
    }

    if result.issues.is_empty() {
        out.push_str("\n✅ No issues found.\n");
    } else {
        let rule_based = result.issues_from(IssueOrigin::RuleBased, known_rule_ids);
        let discovered = result.issues_from(IssueOrigin::AiDiscovered, known_rule_ids);
        let unknown = result.issues_from(IssueOrigin::UnknownRule, known_rule_ids);

        render_group(&mut out, "📏 Rule-based findings", &rule_based, IssueOrigin::RuleBased);
        render_group(
            &mut out,
            "🤖 AI-discovered issues",
            &discovered,
            IssueOrigin::AiDiscovered,
        );
        if !unknown.is_empty() {
            render_group(
                &mut out,
                "❓ Findings citing unknown rules",
                &unknown,
                IssueOrigin::UnknownRule,
            );
        }
    }

    out.push_str(&format!("\n📝 Summary\n{}\n{}\n", RULE, result.summary));
    out
}

/// Closing banner matching the exit decision.
pub fn render_verdict(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Passed => "✨ No high or critical issues found.",
        Verdict::Warning => "⚠️  High-severity issues found. Review them before merging.",
        Verdict::Failed => "❌ Critical issues found. Fix them before merging.",
    }
}

/// Machine-readable report for `--format json`.
pub fn render_json(result: &ReviewResult) -> Result<String, RuleCheckError> {
    serde_json::to_string_pretty(result).map_err(|e| RuleCheckError::InternalError(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::review::IssueCategory;
    use anyhow::Result;
    use std::collections::BTreeSet;

    fn issue(severity: Severity, title: &str, rule_id: Option<&str>) -> ReviewIssue {
        ReviewIssue {
            severity,
            category: IssueCategory::Maintainability,
            file: "src/app.ts".into(),
            line: Some(7),
            title: title.into(),
            description: "Description.".into(),
            reasoning: "Reasoning.".into(),
            suggestion: Some("Do this instead.".into()),
            rule_id: rule_id.map(str::to_string),
        }
    }

    fn result(issues: Vec<ReviewIssue>) -> ReviewResult {
        ReviewResult {
            issues,
            summary: "Decent code.".into(),
            overall_score: 77.0,
            thinking_trace: None,
            files_reviewed: BTreeSet::from(["src/app.ts".to_string()]),
            total_lines: 42,
            model: "gemini-test".into(),
            reviewed_at: "2026-01-01T00:00:00+00:00".into(),
        }
    }

    fn known(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_groups_by_origin_then_severity() {
        let report = render_report(
            &result(vec![
                issue(Severity::Low, "low-ai", None),
                issue(Severity::Critical, "crit-rule", Some("no-eval")),
                issue(Severity::High, "high-ai", None),
                issue(Severity::Medium, "ghost-rule", Some("made-up")),
            ]),
            &known(&["no-eval"]),
        );

        let rule_section = report.find("📏 Rule-based findings (1)").unwrap();
        let ai_section = report.find("🤖 AI-discovered issues (2)").unwrap();
        let unknown_section = report.find("❓ Findings citing unknown rules (1)").unwrap();
        assert!(rule_section < ai_section && ai_section < unknown_section);

        let crit = report.find("crit-rule").unwrap();
        let high = report.find("high-ai").unwrap();
        let low = report.find("low-ai").unwrap();
        assert!(rule_section < crit && crit < ai_section);
        assert!(ai_section < high && high < low && low < unknown_section);

        assert!(report.contains("📏 Rule: no-eval"));
        assert!(report.contains("❓ Unknown rule: made-up"));
        assert!(report.contains("🤖 AI insight"));
        assert!(report.contains("📍 src/app.ts:7 · maintainability"));
        assert!(report.contains("💡 Suggestion: Do this instead."));
    }

    #[test]
    fn test_summary_table_counts() {
        let report = render_report(
            &result(vec![
                issue(Severity::High, "a", None),
                issue(Severity::High, "b", None),
            ]),
            &known(&[]),
        );
        assert!(report.contains("Total issues"));
        assert!(report.contains("77/100"));
        assert!(report.contains("Decent code."));
        assert!(!report.contains("unknown rules"));
    }

    #[test]
    fn test_empty_result_and_trace() {
        let mut empty = result(vec![]);
        empty.thinking_trace = Some("Checked the loops first.".into());
        let report = render_report(&empty, &known(&[]));
        assert!(report.contains("✅ No issues found."));
        assert!(report.contains("🧠 Model reasoning"));
        assert!(report.contains("Checked the loops first."));
    }

    #[test]
    fn test_render_json_uses_camel_case() -> Result<()> {
        let json = render_json(&result(vec![issue(Severity::Low, "x", Some("r"))]))?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["overallScore"], 77.0);
        assert_eq!(value["issues"][0]["ruleId"], "r");
        assert_eq!(value["totalLines"], 42);
        assert!(value.get("thinkingTrace").is_none());
        Ok(())
    }

    #[test]
    fn test_verdict_banners() {
        assert!(render_verdict(Verdict::Failed).contains("Critical"));
        assert!(render_verdict(Verdict::Warning).contains("High-severity"));
    }
}
