// rulecheck-core/src/infrastructure/rules/loader.rs

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use super::frontmatter::parse_rule;
use crate::domain::ports::RuleCatalog;
use crate::domain::rules::Rule;
use crate::error::RuleCheckError;
use crate::infrastructure::error::InfrastructureError;

/// Discovers markdown rule files under a directory and keeps the parsed rules
/// for the rest of the invocation.
#[derive(Debug)]
pub struct RuleLoader {
    root: PathBuf,
    rules: Vec<Rule>,
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

impl RuleLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rules: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rebuilds the collection from disk and returns the number of rules kept.
    ///
    /// Unreadable entries and invalid rule files are skipped with a warning;
    /// only a missing root directory aborts the load.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load_rules(&mut self) -> Result<usize, InfrastructureError> {
        self.rules.clear();

        if !self.root.is_dir() {
            return Err(InfrastructureError::RulesDirNotFound(
                self.root.display().to_string(),
            ));
        }

        let mut rules: Vec<Rule> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        // Sorted walk: a duplicated id resolves to the first file by name.
        for entry in WalkDir::new(&self.root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry in rules directory");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown(path) {
                continue;
            }

            match Self::parse_rule_file(path) {
                Ok(rule) => {
                    if let Some(&kept) = by_id.get(&rule.id) {
                        warn!(
                            id = %rule.id,
                            path = ?rule.source,
                            kept = ?rules[kept].source,
                            "Duplicate rule id, skipping file"
                        );
                        continue;
                    }
                    debug!(id = %rule.id, rule_type = %rule.rule_type, "Rule parsed");
                    by_id.insert(rule.id.clone(), rules.len());
                    rules.push(rule);
                }
                Err(e) => warn!(path = ?path, "Skipping rule file: {}", e),
            }
        }

        self.rules = rules;
        info!(count = self.rules.len(), "Rules loaded");
        eprintln!(
            "📚 Loaded {} rules from {}",
            self.rules.len(),
            self.root.display()
        );

        Ok(self.rules.len())
    }

    fn parse_rule_file(path: &Path) -> Result<Rule, RuleCheckError> {
        let text = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
        Ok(parse_rule(&text, path)?)
    }

    pub fn known_rule_ids(&self) -> HashSet<String> {
        self.rules.iter().map(|r| r.id.clone()).collect()
    }
}

impl RuleCatalog for RuleLoader {
    fn get_rules(&self) -> &[Rule] {
        &self.rules
    }
}
