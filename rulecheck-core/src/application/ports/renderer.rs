use crate::error::RuleCheckError;

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, RuleCheckError>;
}
