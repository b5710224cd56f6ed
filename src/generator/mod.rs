//! Workflow generation engine
//!
//! Drives one generation run: resolve the project, normalize the
//! requested steps, assemble the custom and default documents, write
//! them out and hand each written file to the external linter.
//!
//! Two documents are produced per run: `custom.yml` carries exactly
//! the requested steps, `default.yml` carries every registered step
//! for the language under a rewritten pull_request trigger.

use crate::core::config::GeneratorConfig;
use crate::core::document::Document;
use crate::core::header::{inject_env, project_env_lines, rewrite_triggers};
use crate::core::registry::{registered_steps, Language};
use crate::core::steps::{is_valid_step_name, normalize_steps};
use crate::linter::{LintOutcome, YamlLinter};
use crate::template::TemplateStore;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fatal generation errors. Non-fatal conditions (missing step
/// template, lint problems) surface in the report instead.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Project '{project}' not found in '{projects_dir}'")]
    ProjectNotFound {
        project: String,
        projects_dir: String,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One generation request
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub lang: Language,

    /// Name of the project directory under the projects root
    pub project: String,

    /// Raw requested steps, order as given; empty means defaults
    pub steps: Vec<String>,
}

/// Why a requested step contributed nothing to the output
#[derive(Debug, Clone, Serialize)]
pub struct SkippedStep {
    pub step: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No template file for this (language, step) pair
    MissingTemplate,
    /// Token failed the step-name pattern
    InvalidName,
}

/// A workflow file produced by a run, with its lint outcome
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub lint: LintOutcome,
}

/// Everything a completed run produced
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// Normalized steps applied to the custom document
    pub steps: Vec<String>,

    /// Requested steps that contributed nothing
    pub skipped: Vec<SkippedStep>,

    /// Written files in write order: custom first, then default
    pub written: Vec<WrittenFile>,
}

impl GenerateReport {
    /// True when nothing was skipped and every lint pass came back clean
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.written.iter().all(|file| file.lint.is_passed())
    }
}

pub struct Generator {
    config: GeneratorConfig,
    store: TemplateStore,
    linter: YamlLinter,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let store = TemplateStore::new(config.templates_dir.clone());
        let linter = YamlLinter::new(config.linter.clone());
        Self {
            config,
            store,
            linter,
        }
    }

    /// Run one generation pass.
    ///
    /// Fails fast before any file I/O when the project directory is
    /// missing; every later problem is reported and skipped.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateReport, GeneratorError> {
        let project_path = self.config.projects_dir.join(&request.project);
        if !project_path.exists() {
            return Err(GeneratorError::ProjectNotFound {
                project: request.project.clone(),
                projects_dir: self.config.projects_dir.display().to_string(),
            });
        }

        let requested = if request.steps.is_empty() {
            info!(
                "No steps requested, using defaults: {}",
                self.config.default_steps.join(",")
            );
            self.config.default_steps.clone()
        } else {
            request.steps.clone()
        };
        let steps = normalize_steps(requested);
        debug!("Applying steps: {}", steps.join(","));

        let header = inject_env(&self.store.base(), &project_env_lines(&request.project));

        let (custom, skipped) = self.assemble(&header, request.lang, &steps);

        let default_header = rewrite_triggers(&header, &self.config.pull_request_branches);
        let registry_steps: Vec<String> = registered_steps(request.lang)
            .iter()
            .map(|step| step.to_string())
            .collect();
        let (default_doc, _) = self.assemble(&default_header, request.lang, &registry_steps);

        let mut written = Vec::new();
        let outputs = [
            (self.config.custom_workflow_path(), &custom),
            (self.config.default_workflow_path(), &default_doc),
        ];
        for (path, document) in outputs {
            document
                .write_to(&path)
                .map_err(|source| GeneratorError::Write {
                    path: path.display().to_string(),
                    source,
                })?;
            debug!("Workflow written to {}", path.display());
            let lint = self.linter.lint(&path);
            written.push(WrittenFile { path, lint });
        }

        Ok(GenerateReport {
            steps,
            skipped,
            written,
        })
    }

    /// Assemble one document: header first, then each resolvable step
    /// template in order. Unresolvable steps are collected, not fatal.
    fn assemble(
        &self,
        header: &str,
        lang: Language,
        steps: &[String],
    ) -> (Document, Vec<SkippedStep>) {
        let mut document = Document::new(header);
        let mut skipped = Vec::new();

        for step in steps {
            if !is_valid_step_name(step) {
                warn!("Step name '{}' is not a valid identifier. Ignored.", step);
                skipped.push(SkippedStep {
                    step: step.clone(),
                    reason: SkipReason::InvalidName,
                });
                continue;
            }
            match self.store.step(lang, step) {
                Some(content) => document.append_block(&content),
                None => {
                    warn!("Step '{}' not found for '{}'. Ignored.", step, lang);
                    skipped.push(SkippedStep {
                        step: step.clone(),
                        reason: SkipReason::MissingTemplate,
                    });
                }
            }
        }

        (document, skipped)
    }
}
