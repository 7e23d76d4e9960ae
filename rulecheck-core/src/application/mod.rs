// rulecheck-core/src/application/mod.rs

pub mod ports;
pub mod prompt;
pub mod report;
pub mod response;
pub mod review;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use rulecheck_core::application::{review_code, render_report};`

pub use prompt::{NO_RULES_FALLBACK, build_review_prompt, compile_rules_for_prompt};
pub use report::{render_json, render_report, render_verdict};
pub use response::{parse_review_payload, review_response_schema};
pub use review::{ReviewOptions, review_code};
