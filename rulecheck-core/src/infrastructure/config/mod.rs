// rulecheck-core/src/infrastructure/config/mod.rs

pub mod settings;

pub use settings::{FileConfig, Settings, SettingsOverrides, load_settings, load_settings_with};
