//! Per-language step registry
//!
//! Maps every supported language to its ordered set of valid step
//! names. Adding a language or a step is a data change here, not a
//! code change anywhere else.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported project ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Node,
}

impl Language {
    /// Directory name holding this language's step templates
    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Node => "node",
        }
    }

    /// All supported languages, in registry order
    pub fn all() -> &'static [Language] {
        &[Language::Python, Language::Node]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// The step every generated pipeline must start with
pub const MANDATORY_STEP: &str = "build";

/// Ordered valid step names per language
const REGISTRY: &[(Language, &[&str])] = &[
    (Language::Python, &["build", "test", "deploy"]),
    (Language::Node, &["build", "test", "deploy"]),
];

/// The ordered registered steps for a language
pub fn registered_steps(lang: Language) -> &'static [&'static str] {
    REGISTRY
        .iter()
        .find(|(candidate, _)| *candidate == lang)
        .map(|(_, steps)| *steps)
        .unwrap_or(&[])
}
