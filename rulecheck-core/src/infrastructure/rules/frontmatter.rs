// rulecheck-core/src/infrastructure/rules/frontmatter.rs

use serde::Deserialize;
use std::path::Path;

use crate::domain::error::DomainError;
use crate::domain::rules::{DEFAULT_CATEGORY, Impact, Rule, RuleType};

const FRONTMATTER_DELIM: &str = "---";

/// Header block of a rule file. Everything is optional at this stage so that
/// missing `id`/`title` can be reported as a rule problem, not a YAML one.
#[derive(Debug, Default, Deserialize)]
pub struct RuleFrontmatter {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: Option<RuleType>,
    pub impact: Option<Impact>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Splits `---` delimited frontmatter from the markdown body.
/// Returns `None` when the text has no complete frontmatter block.
pub fn split_frontmatter(text: &str) -> Option<(String, String)> {
    let text = text.trim_start_matches('\u{feff}');
    let mut lines = text.lines();

    if lines.next()?.trim() != FRONTMATTER_DELIM {
        return None;
    }

    let mut header = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim() == FRONTMATTER_DELIM {
            closed = true;
            break;
        }
        header.push(line);
    }

    if !closed {
        return None;
    }

    let body: Vec<&str> = lines.collect();
    Some((header.join("\n"), body.join("\n")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses one markdown document into a [`Rule`].
pub fn parse_rule(text: &str, source: &Path) -> Result<Rule, DomainError> {
    let invalid = |reason: String| DomainError::InvalidRule {
        path: source.display().to_string(),
        reason,
    };

    let (header, body) =
        split_frontmatter(text).ok_or_else(|| invalid("missing '---' frontmatter block".into()))?;

    let front: RuleFrontmatter = if header.trim().is_empty() {
        RuleFrontmatter::default()
    } else {
        serde_yaml::from_str(&header).map_err(|e| invalid(format!("bad frontmatter: {}", e)))?
    };

    let id = non_blank(front.id).ok_or_else(|| invalid("missing required field 'id'".into()))?;
    let title =
        non_blank(front.title).ok_or_else(|| invalid("missing required field 'title'".into()))?;

    Ok(Rule {
        id,
        title,
        rule_type: front.rule_type.unwrap_or_default(),
        impact: front.impact.unwrap_or_default(),
        category: non_blank(front.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        tags: front
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        content: body.trim().to_string(),
        source: source.to_path_buf(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_minimal_rule_uses_defaults() -> Result<()> {
        let text = "---\nid: x\ntitle: \"T\"\n---\nBody text.\n";
        let rule = parse_rule(text, Path::new("x.md"))?;

        assert_eq!(rule.id, "x");
        assert_eq!(rule.title, "T");
        assert_eq!(rule.rule_type, RuleType::Principle);
        assert_eq!(rule.impact, Impact::Medium);
        assert_eq!(rule.category, "general");
        assert!(rule.tags.is_empty());
        assert_eq!(rule.content, "Body text.");
        Ok(())
    }

    #[test]
    fn test_full_frontmatter() -> Result<()> {
        let text = "---\n\
id: no-unwrap\n\
title: Avoid unwrap\n\
type: requirement\n\
impact: high\n\
category: error-handling\n\
tags: [rust, safety]\n\
---\n\n\
Never call `unwrap()` outside tests.\n\n";
        let rule = parse_rule(text, Path::new("rules/no-unwrap.md"))?;

        assert!(rule.is_requirement());
        assert_eq!(rule.impact, Impact::High);
        assert_eq!(rule.category, "error-handling");
        assert!(rule.tags.contains("rust") && rule.tags.contains("safety"));
        assert_eq!(rule.content, "Never call `unwrap()` outside tests.");
        Ok(())
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let err = parse_rule("---\nid: x\n---\nbody", Path::new("x.md")).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = parse_rule("---\ntitle: T\n---\nbody", Path::new("x.md")).unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_unterminated_frontmatter() {
        assert!(split_frontmatter("---\nid: x\nbody").is_none());
        assert!(split_frontmatter("# Just markdown").is_none());
    }

    #[test]
    fn test_split_keeps_inner_rulers_in_body() -> Result<()> {
        let (header, body) =
            split_frontmatter("---\nid: a\n---\nintro\n---\noutro").ok_or(anyhow::anyhow!("split"))?;
        assert_eq!(header, "id: a");
        assert_eq!(body, "intro\n---\noutro");
        Ok(())
    }
}
