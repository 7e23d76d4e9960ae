// rulecheck-core/src/infrastructure/compiler/jinja.rs

// Renders the outbound review prompt. Rule content and source code are passed
// as values, never spliced into the template itself.

use crate::application::ports::TemplateEngine;
use crate::error::RuleCheckError;
use crate::infrastructure::error::InfrastructureError;
use minijinja::Environment;

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Prompt text, not HTML
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
        env.set_keep_trailing_newline(true);

        Self { env }
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, RuleCheckError> {
        self.env
            .render_str(template, context)
            .map_err(|e| RuleCheckError::Infrastructure(InfrastructureError::TemplateError(e)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_render_values_verbatim() -> Result<()> {
        let renderer = JinjaRenderer::new();
        let result = renderer.render(
            "Rules:\n{{ rules }}",
            &json!({ "rules": "<b>{{ not a tag }}</b> & more" }),
        )?;
        assert_eq!(result, "Rules:\n<b>{{ not a tag }}</b> & more");
        Ok(())
    }

    #[test]
    fn test_render_loop_with_builtin_filter() -> Result<()> {
        let renderer = JinjaRenderer::new();
        let template = "{% for f in files %}[{{ f.language | upper }}] {{ f.path }}\n{% endfor %}";
        let result = renderer.render(
            template,
            &json!({ "files": [
                { "path": "a.rs", "language": "rust" },
                { "path": "b.py", "language": "python" }
            ]}),
        )?;
        assert_eq!(result, "[RUST] a.rs\n[PYTHON] b.py\n");
        Ok(())
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let renderer = JinjaRenderer::new();
        let err = renderer.render("{% for %}", &json!({})).unwrap_err();
        assert!(err.to_string().contains("Template"));
    }
}
