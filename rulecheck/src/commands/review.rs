// rulecheck/src/commands/review.rs
//
// USE CASE: review one source file against the loaded rules.

use std::path::Path;
use std::time::Instant;
use tracing::debug;

use rulecheck_core::RuleCheckError;
use rulecheck_core::application::{
    ReviewOptions, compile_rules_for_prompt, render_json, render_report, render_verdict,
    review_code,
};
use rulecheck_core::domain::review::Verdict;
use rulecheck_core::infrastructure::adapters::gemini::GeminiClient;
use rulecheck_core::infrastructure::compiler::jinja::JinjaRenderer;
use rulecheck_core::infrastructure::config::{SettingsOverrides, load_settings};
use rulecheck_core::infrastructure::fs::read_source_file;
use rulecheck_core::infrastructure::rules::RuleLoader;

use crate::cli::{Cli, OutputFormat};

pub async fn execute(cli: Cli) -> Result<Verdict, RuleCheckError> {
    let start = Instant::now();

    // 1. Resolve configuration (fails fast on a missing API key)
    let overrides = SettingsOverrides {
        model: cli.model,
        rules_dir: cli.rules_dir,
        tags: cli.tags,
        max_tokens: cli.max_tokens,
        temperature: cli.temperature,
    };
    let settings = load_settings(Path::new("."), overrides)?;

    // 2. Load rules and the file under review
    let mut loader = RuleLoader::new(settings.rules_dir.clone());
    let loaded = loader.load_rules()?;
    debug!(loaded, root = ?loader.root(), "Rules ready");

    let source = read_source_file(&cli.file)?;
    eprintln!(
        "🔎 Reviewing {} ({}, {} lines) with {}",
        source.path,
        source.language,
        source.line_count(),
        settings.model
    );

    // 3. Compile the rules section
    let rules_prompt = if cli.all_rules {
        eprintln!("   Using all rules");
        compile_rules_for_prompt(&loader, None)
    } else {
        eprintln!("   Tags: {}", settings.tags.join(", "));
        compile_rules_for_prompt(&loader, Some(&settings.tags))
    };

    // 4. One model call
    let client = GeminiClient::new(settings.api_key.clone(), settings.api_base.clone())?;
    let engine = JinjaRenderer::new();
    let options = ReviewOptions {
        model: settings.model.clone(),
        enable_deep_thinking: !cli.no_thinking,
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    };

    let result = review_code(&client, &engine, &[source], &rules_prompt, &options).await?;
    let verdict = Verdict::from_result(&result);

    // 5. Output
    match cli.format {
        OutputFormat::Json => println!("{}", render_json(&result)?),
        OutputFormat::Human => println!("{}", render_report(&result, &loader.known_rule_ids())),
    }
    eprintln!("{}", render_verdict(verdict));
    eprintln!("   Finished in {:.2?}", start.elapsed());

    Ok(verdict)
}
