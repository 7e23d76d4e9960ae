// rulecheck-core/src/domain/rules/mod.rs

pub mod rule;

pub use rule::{DEFAULT_CATEGORY, Impact, Rule, RuleType};
