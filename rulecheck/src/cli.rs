// rulecheck/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Grouped console report
    #[default]
    Human,
    /// The review result as JSON on stdout
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "rulecheck")]
#[command(about = "🔎 Reviews a source file against your project rules with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source file to review
    pub file: PathBuf,

    /// Model name (default: GEMINI_MODEL, rulecheck.yaml or gemini-2.5-flash)
    #[arg(long)]
    pub model: Option<String>,

    /// Do not ask the model for its reasoning trace
    #[arg(long)]
    pub no_thinking: bool,

    /// Only use rules carrying one of these tags (ex: "security,typescript")
    #[arg(long, value_delimiter = ',', conflicts_with = "all_rules")]
    pub tags: Option<Vec<String>>,

    /// Use every loaded rule, ignoring tags
    #[arg(long)]
    pub all_rules: bool,

    /// Rules directory (default: RULECHECK_RULES_DIR, rulecheck.yaml or "rules")
    #[arg(long)]
    pub rules_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Upper bound on generated tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long)]
    pub temperature: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};

    #[test]
    fn test_cli_parse_defaults() -> Result<()> {
        let args = Cli::try_parse_from(["rulecheck", "src/app.ts"])?;
        assert_eq!(args.file.to_string_lossy(), "src/app.ts");
        assert_eq!(args.model, None);
        assert!(!args.no_thinking);
        assert!(!args.all_rules);
        assert_eq!(args.tags, None);
        assert_eq!(args.format, OutputFormat::Human);
        Ok(())
    }

    #[test]
    fn test_cli_parse_tags_are_comma_separated() -> Result<()> {
        let args = Cli::try_parse_from([
            "rulecheck",
            "main.rs",
            "--tags",
            "security,rust",
            "--model",
            "gemini-2.5-pro",
            "--no-thinking",
        ])?;
        match args.tags {
            Some(tags) => assert_eq!(tags, vec!["security", "rust"]),
            None => bail!("Expected tags"),
        }
        assert_eq!(args.model.as_deref(), Some("gemini-2.5-pro"));
        assert!(args.no_thinking);
        Ok(())
    }

    #[test]
    fn test_cli_parse_format_and_limits() -> Result<()> {
        let args = Cli::try_parse_from([
            "rulecheck",
            "main.rs",
            "--format",
            "json",
            "--max-tokens",
            "2048",
            "--temperature",
            "0.5",
            "--rules-dir",
            "/tmp/rules",
        ])?;
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.5));
        assert_eq!(args.rules_dir, Some(PathBuf::from("/tmp/rules")));
        Ok(())
    }

    #[test]
    fn test_cli_rejects_tags_with_all_rules() {
        let parsed = Cli::try_parse_from(["rulecheck", "main.rs", "--all-rules", "--tags", "a"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["rulecheck"]).is_err());
    }
}
