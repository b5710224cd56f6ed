mod cli;
mod core;
mod generator;
mod linter;
mod template;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::commands::{CheckCommand, GenerateCommand, StepsCommand};
use crate::cli::output::*;
use crate::cli::{Cli, Command};
use crate::core::config::GeneratorConfig;
use crate::core::registry::{registered_steps, Language};
use crate::core::steps::parse_step_list;
use crate::generator::{GenerateRequest, Generator};
use crate::linter::YamlLinter;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let config = GeneratorConfig::discover(cli.config.as_deref().map(Path::new))?;

    match &cli.command {
        Command::Generate(cmd) => generate(cmd, config)?,
        Command::Steps(cmd) => list_steps(cmd)?,
        Command::Check(cmd) => check_workflow(cmd, &config)?,
    }

    Ok(())
}

fn generate(cmd: &GenerateCommand, config: GeneratorConfig) -> Result<()> {
    println!(
        "{} Generating {} workflow for project {}",
        PACKAGE,
        style(cmd.lang).bold(),
        style(&cmd.project).bold()
    );

    let steps = cmd.steps.as_deref().map(parse_step_list).unwrap_or_default();
    let request = GenerateRequest {
        lang: cmd.lang,
        project: cmd.project.clone(),
        steps,
    };

    let generator = Generator::new(config);
    let report = match generator.generate(&request) {
        Ok(report) => report,
        Err(err) => {
            println!("{} {}", CROSS, style(&err).red());
            std::process::exit(1);
        }
    };

    println!("{}", format_report(&report));

    if cmd.json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("\n{}", json);
    }

    Ok(())
}

fn list_steps(cmd: &StepsCommand) -> Result<()> {
    let languages: Vec<Language> = match cmd.lang {
        Some(lang) => vec![lang],
        None => Language::all().to_vec(),
    };

    if cmd.json {
        let entries: Vec<_> = languages
            .iter()
            .map(|lang| {
                serde_json::json!({
                    "language": lang.to_string(),
                    "steps": registered_steps(*lang),
                })
            })
            .collect();
        let data = serde_json::json!({ "languages": entries });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{} Registered steps:", INFO);
    for lang in languages {
        println!(
            "  {}: {}",
            style(lang).bold(),
            style(registered_steps(lang).join(", ")).cyan()
        );
    }

    Ok(())
}

fn check_workflow(cmd: &CheckCommand, config: &GeneratorConfig) -> Result<()> {
    println!("{} Checking {}", INFO, style(&cmd.file).bold());

    let content = std::fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file))?;

    match serde_yaml::from_str::<serde_yaml::Value>(&content) {
        Ok(_) => println!("{} Well-formed YAML", CHECK),
        Err(err) => {
            println!("{} Not valid YAML: {}", CROSS, style(&err).red());
            std::process::exit(1);
        }
    }

    let linter = YamlLinter::new(config.linter.clone());
    let outcome = linter.lint(Path::new(&cmd.file));
    println!("{}", format_lint_outcome(&outcome));

    Ok(())
}
