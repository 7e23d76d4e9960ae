// rulecheck-core/src/infrastructure/config/settings.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const API_BASE_ENV: &str = "GEMINI_API_BASE";
pub const RULES_DIR_ENV: &str = "RULECHECK_RULES_DIR";

pub const CONFIG_FILE: &str = "rulecheck.yaml";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_RULES_DIR: &str = "rules";
pub const DEFAULT_TAGS: [&str; 2] = ["general", "best-practices"];
pub const DEFAULT_MAX_TOKENS: u32 = 8192;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Optional `rulecheck.yaml` found in the working directory.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub model: Option<String>,
    pub rules_dir: Option<PathBuf>,
    pub tags: Option<Vec<String>>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub rules_dir: Option<PathBuf>,
    pub tags: Option<Vec<String>>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Effective configuration for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub rules_dir: PathBuf,
    pub tags: Vec<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Resolves settings from the process environment.
/// Precedence: CLI > environment > `rulecheck.yaml` > defaults.
pub fn load_settings(
    project_dir: &Path,
    overrides: SettingsOverrides,
) -> Result<Settings, InfrastructureError> {
    load_settings_with(project_dir, overrides, |key| std::env::var(key).ok())
}

#[instrument(skip(overrides, env))]
pub fn load_settings_with<F>(
    project_dir: &Path,
    overrides: SettingsOverrides,
    env: F,
) -> Result<Settings, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let env_var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    // The credential is checked first: nothing else matters without it.
    let api_key =
        env_var(API_KEY_ENV).ok_or_else(|| InfrastructureError::MissingCredential(API_KEY_ENV.into()))?;

    let file = load_file_config(project_dir)?.unwrap_or_default();

    let model = overrides
        .model
        .or_else(|| env_var(MODEL_ENV))
        .or(file.model)
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let rules_dir = overrides
        .rules_dir
        .or_else(|| env_var(RULES_DIR_ENV).map(PathBuf::from))
        .or(file.rules_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RULES_DIR));

    let tags = overrides
        .tags
        .or(file.tags)
        .map(normalize_tags)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TAGS.iter().map(|t| t.to_string()).collect());

    let temperature = overrides
        .temperature
        .or(file.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        return Err(InfrastructureError::ConfigError(format!(
            "temperature must be between 0.0 and 2.0, got {}",
            temperature
        )));
    }

    let settings = Settings {
        api_key,
        api_base: env_var(API_BASE_ENV).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        model,
        rules_dir,
        tags,
        max_tokens: overrides
            .max_tokens
            .or(file.max_tokens)
            .unwrap_or(DEFAULT_MAX_TOKENS),
        temperature,
    };

    info!(model = %settings.model, rules_dir = ?settings.rules_dir, "Settings resolved");
    Ok(settings)
}

fn load_file_config(project_dir: &Path) -> Result<Option<FileConfig>, InfrastructureError> {
    let path = project_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    info!(path = ?path, "Loading rulecheck.yaml");
    let content = fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_yaml::from_str(&content)?))
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key() -> Result<()> {
        let dir = tempdir()?;
        let err = load_settings_with(dir.path(), SettingsOverrides::default(), env_from(&[]))
            .unwrap_err();
        assert!(matches!(err, InfrastructureError::MissingCredential(_)));

        let err = load_settings_with(
            dir.path(),
            SettingsOverrides::default(),
            env_from(&[(API_KEY_ENV, "   ")]),
        )
        .unwrap_err();
        assert!(matches!(err, InfrastructureError::MissingCredential(_)));
        Ok(())
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let dir = tempdir()?;
        let settings = load_settings_with(
            dir.path(),
            SettingsOverrides::default(),
            env_from(&[(API_KEY_ENV, "key")]),
        )?;

        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.rules_dir, PathBuf::from("rules"));
        assert_eq!(settings.tags, vec!["general", "best-practices"]);
        assert_eq!(settings.max_tokens, DEFAULT_MAX_TOKENS);
        Ok(())
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join(CONFIG_FILE),
            "model: file-model\ntags: [security]\nmax_tokens: 1024\n",
        )?;

        let from_file = load_settings_with(
            dir.path(),
            SettingsOverrides::default(),
            env_from(&[(API_KEY_ENV, "key")]),
        )?;
        assert_eq!(from_file.model, "file-model");
        assert_eq!(from_file.tags, vec!["security"]);
        assert_eq!(from_file.max_tokens, 1024);

        let from_env = load_settings_with(
            dir.path(),
            SettingsOverrides::default(),
            env_from(&[(API_KEY_ENV, "key"), (MODEL_ENV, "env-model")]),
        )?;
        assert_eq!(from_env.model, "env-model");

        let from_cli = load_settings_with(
            dir.path(),
            SettingsOverrides {
                model: Some("cli-model".into()),
                tags: Some(vec![" rust ".into(), "".into()]),
                ..Default::default()
            },
            env_from(&[(API_KEY_ENV, "key"), (MODEL_ENV, "env-model")]),
        )?;
        assert_eq!(from_cli.model, "cli-model");
        assert_eq!(from_cli.tags, vec!["rust"]);
        Ok(())
    }

    #[test]
    fn test_invalid_temperature() -> Result<()> {
        let dir = tempdir()?;
        let err = load_settings_with(
            dir.path(),
            SettingsOverrides {
                temperature: Some(3.5),
                ..Default::default()
            },
            env_from(&[(API_KEY_ENV, "key")]),
        )
        .unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigError(_)));
        Ok(())
    }

    #[test]
    fn test_unknown_config_key_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join(CONFIG_FILE), "modle: typo\n")?;
        let err = load_settings_with(
            dir.path(),
            SettingsOverrides::default(),
            env_from(&[(API_KEY_ENV, "key")]),
        )
        .unwrap_err();
        assert!(matches!(err, InfrastructureError::YamlError(_)));
        Ok(())
    }
}
