pub mod frontmatter;
pub mod loader;

pub use loader::RuleLoader;
