//! External YAML linter invocation
//!
//! The linter is a collaborator process (yamllint by default) run once
//! per written file. Lint problems are reported, never fatal: the
//! outcome is a value the caller inspects, distinct from the
//! generator's own error path, so "succeeded with warnings" and
//! "failed" stay distinguishable.

use serde::Serialize;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Result of linting one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintOutcome {
    /// Linter ran and reported no problems
    Passed,
    /// Linter ran and exited non-zero
    Failed { exit_code: i32, output: String },
    /// Linter could not be spawned (not installed, bad path)
    Unavailable { reason: String },
}

impl LintOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, LintOutcome::Passed)
    }
}

/// Invokes the external line-level YAML linter
#[derive(Debug, Clone)]
pub struct YamlLinter {
    binary: String,
}

impl YamlLinter {
    /// Create a linter around the given binary name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Lint one file, capturing stdout and stderr.
    pub fn lint(&self, path: &Path) -> LintOutcome {
        debug!("Linting {} with {}", path.display(), self.binary);

        let output = match Command::new(&self.binary).arg(path).output() {
            Ok(output) => output,
            Err(err) => {
                warn!("Could not spawn {}: {}", self.binary, err);
                return LintOutcome::Unavailable {
                    reason: err.to_string(),
                };
            }
        };

        if output.status.success() {
            return LintOutcome::Passed;
        }

        let exit_code = output.status.code().unwrap_or(-1);
        let mut combined = String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !combined.is_empty() {
                combined.push('\n');
            }
            combined.push_str(stderr.trim_end());
        }

        warn!(
            "{} exited with code {} for {}",
            self.binary,
            exit_code,
            path.display()
        );
        LintOutcome::Failed {
            exit_code,
            output: combined,
        }
    }
}
