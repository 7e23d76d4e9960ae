// rulecheck/src/commands/mod.rs

pub mod review;
