// rulecheck-core/src/domain/review/source.rs

use serde::Serialize;

/// A file handed to the reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
    pub language: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            language: language.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
