// rulecheck-core/src/application/prompt.rs

use serde_json::json;

use crate::application::ports::TemplateEngine;
use crate::domain::ports::RuleCatalog;
use crate::domain::review::{IssueCategory, Severity, SourceFile};
use crate::domain::rules::Rule;
use crate::error::RuleCheckError;

/// Returned instead of an empty rules section.
pub const NO_RULES_FALLBACK: &str = "No specific rules were provided for this review. \
Rely on general software engineering best practices: correctness, performance, \
maintainability and idiomatic use of the language.";

const PRINCIPLES_HEADER: &str = "## Guiding Principles";
const PRINCIPLES_INSTRUCTION: &str = "Use these principles to guide what you look for. \
They describe good practice; apply judgement instead of treating them as strict checks.";

const REQUIREMENTS_HEADER: &str = "## Mandatory Requirements";
const REQUIREMENTS_INSTRUCTION: &str = "These requirements MUST be strictly enforced. \
Report every violation and set ruleId to the rule's ID.";

const REVIEW_TEMPLATE: &str = r#"You are a senior software engineer performing a careful, constructive code review.
Review the files below against the project rules and report concrete, actionable issues.
Focus on real problems: bugs, performance pitfalls, maintainability risks and departures from best practice. Do not report purely cosmetic preferences.

# Project Rules

{{ rules }}

# Files To Review
{% for file in files %}
## File: {{ file.path }} ({{ file.language }}, {{ file.lines }} lines)

```{{ file.language }}
{{ file.content }}
```
{% endfor %}
# Output Format

Respond with a single JSON object that follows the declared response schema:
- "issues": array of issues. Each issue has:
  - "severity": one of {{ severities | join(", ") }}
  - "category": one of {{ categories | join(", ") }}
  - "file": the path of the file, exactly as shown above
  - "line": the line number the issue starts on, or null
  - "title": short headline, at most 80 characters
  - "description": what is wrong, at most 300 characters
  - "reasoning": why it matters, at most 300 characters
  - "suggestion": a concrete fix, at most 300 characters, or null
  - "ruleId": the ID of the rule that directly covers this issue. Use null when no loaded rule covers it; never invent an ID.
- "summary": two or three sentences on the overall state of the code
- "overallScore": a number from 0 (unusable) to 100 (exemplary)

Return an empty "issues" array when you find nothing worth reporting.
"#;

/// Compiles the rules section of the prompt from `catalog`.
///
/// `None` uses every loaded rule; `Some(tags)` keeps rules sharing at least one tag.
pub fn compile_rules_for_prompt<C: RuleCatalog + ?Sized>(
    catalog: &C,
    tags: Option<&[String]>,
) -> String {
    let rules: Vec<&Rule> = match tags {
        None => catalog.get_rules().iter().collect(),
        Some(tags) => catalog.get_rules_by_tags(tags),
    };
    compile_rules(&rules)
}

/// Renders principles first, then requirements. Sections with no rules are left out.
pub fn compile_rules(rules: &[&Rule]) -> String {
    if rules.is_empty() {
        return NO_RULES_FALLBACK.to_string();
    }

    let (principles, requirements): (Vec<&Rule>, Vec<&Rule>) =
        rules.iter().copied().partition(|r| r.is_principle());

    let mut sections = Vec::with_capacity(2);

    if !principles.is_empty() {
        let mut out = format!("{}\n\n{}\n", PRINCIPLES_HEADER, PRINCIPLES_INSTRUCTION);
        for rule in principles {
            out.push_str(&format!(
                "\n### {}\nCategory: {} | Impact: {}\n\n{}\n",
                rule.title, rule.category, rule.impact, rule.content
            ));
        }
        sections.push(out);
    }

    if !requirements.is_empty() {
        let mut out = format!("{}\n\n{}\n", REQUIREMENTS_HEADER, REQUIREMENTS_INSTRUCTION);
        for rule in requirements {
            out.push_str(&format!(
                "\n### {} (Rule ID: {})\nImpact: {}\n\n{}\n",
                rule.title, rule.id, rule.impact, rule.content
            ));
        }
        sections.push(out);
    }

    sections.join("\n").trim_end().to_string()
}

/// Builds the complete outbound prompt: persona, rules, files and output contract.
pub fn build_review_prompt(
    engine: &dyn TemplateEngine,
    files: &[SourceFile],
    rules_prompt: &str,
) -> Result<String, RuleCheckError> {
    let files: Vec<serde_json::Value> = files
        .iter()
        .map(|f| {
            json!({
                "path": f.path,
                "language": f.language,
                "lines": f.line_count(),
                "content": f.content,
            })
        })
        .collect();

    let context = json!({
        "rules": rules_prompt,
        "files": files,
        "severities": Severity::ALL_NAMES,
        "categories": IssueCategory::ALL_NAMES,
    });

    engine.render(REVIEW_TEMPLATE, &context)
}
