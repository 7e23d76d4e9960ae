// rulecheck-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports: outbound contracts (remote generative model)
pub mod ports;

// 2. Domain: rules, review issues, verdict. Depends on nothing else.
pub mod domain;

// 3. Infrastructure: rule files, settings, Gemini HTTP adapter, templating
pub mod infrastructure;

// 4. Application: prompt compilation, review use case, report rendering
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::RuleCheckError;
