//! Generator configuration from YAML
//!
//! Paths and tool settings for a generation run. Loaded from an
//! optional `pipegen.yml` (explicit `--config` path, then the working
//! directory, then the user config directory), falling back to
//! compiled defaults. The per-language step registry is compiled data
//! and deliberately not configurable here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name probed in the working directory
pub const CONFIG_FILE_NAME: &str = "pipegen.yml";

/// File name of the requested-steps document
pub const CUSTOM_WORKFLOW_FILE: &str = "custom.yml";

/// File name of the all-registered-steps document
pub const DEFAULT_WORKFLOW_FILE: &str = "default.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the header and per-language step templates
    pub templates_dir: PathBuf,

    /// Directory the generated workflow files are written to
    pub workflows_dir: PathBuf,

    /// Directory holding one sub-directory per project
    pub projects_dir: PathBuf,

    /// External YAML linter binary
    pub linter: String,

    /// Steps applied when the caller requests none
    pub default_steps: Vec<String>,

    /// Branch patterns for the default document's pull_request trigger
    pub pull_request_branches: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("pipeline/templates"),
            workflows_dir: PathBuf::from(".github/workflows"),
            projects_dir: PathBuf::from("projects"),
            linter: "yamllint".to_string(),
            default_steps: vec!["build".to_string(), "test".to_string()],
            pull_request_branches: vec![
                "main".to_string(),
                "develop".to_string(),
                "release/**".to_string(),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: GeneratorConfig =
            serde_yaml::from_str(yaml).context("Invalid generator configuration")?;
        Ok(config)
    }

    /// Resolve the active configuration: explicit path, `./pipegen.yml`,
    /// user config directory, compiled defaults, in that order.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let local = Path::new(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::from_file(local);
        }
        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::from_file(user);
            }
        }
        Ok(Self::default())
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pipegen").join(CONFIG_FILE_NAME))
    }

    /// Output path of the requested-steps document
    pub fn custom_workflow_path(&self) -> PathBuf {
        self.workflows_dir.join(CUSTOM_WORKFLOW_FILE)
    }

    /// Output path of the all-registered-steps document
    pub fn default_workflow_path(&self) -> PathBuf {
        self.workflows_dir.join(DEFAULT_WORKFLOW_FILE)
    }
}
