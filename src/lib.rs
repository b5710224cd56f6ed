//! pipegen - GitHub Actions workflow generator
//!
//! Assembles workflow YAML files by concatenating a base header
//! template with per-language step templates, then hands the result
//! to an external YAML linter.

pub mod cli;
pub mod core;
pub mod generator;
pub mod linter;
pub mod template;

// Re-export commonly used types
pub use crate::core::config::GeneratorConfig;
pub use crate::core::document::Document;
pub use crate::core::registry::{registered_steps, Language, MANDATORY_STEP};
pub use crate::generator::{GenerateReport, GenerateRequest, Generator, GeneratorError};
pub use crate::linter::{LintOutcome, YamlLinter};
pub use crate::template::TemplateStore;
