//! CLI command definitions

use crate::core::registry::Language;
use clap::Args;

/// Generate workflow files for a project
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Project language
    #[arg(long, value_enum)]
    pub lang: Language,

    /// Name of the project directory under the projects root
    #[arg(long)]
    pub project: String,

    /// Requested steps, comma separated (defaults to build,test)
    #[arg(long)]
    pub steps: Option<String>,

    /// Output a JSON summary of the run
    #[arg(long)]
    pub json: bool,
}

/// List registered steps per language
#[derive(Debug, Args, Clone)]
pub struct StepsCommand {
    /// Restrict to one language
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Check a workflow file
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Path to the workflow YAML file
    #[arg(short, long)]
    pub file: String,
}
