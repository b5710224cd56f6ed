//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{CheckCommand, GenerateCommand, StepsCommand};

/// GitHub Actions workflow generator
#[derive(Debug, Parser, Clone)]
#[command(name = "pipegen")]
#[command(author = "Pipegen Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Generates GitHub Actions workflows from per-language step templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to generator configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate workflow files for a project
    Generate(GenerateCommand),

    /// List registered steps per language
    Steps(StepsCommand),

    /// Check a workflow file for well-formedness and lint problems
    Check(CheckCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
