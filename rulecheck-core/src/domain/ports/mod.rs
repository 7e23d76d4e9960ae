// rulecheck-core/src/domain/ports/mod.rs

pub mod rules;

pub use rules::RuleCatalog;
