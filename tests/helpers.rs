//! Test utility functions for pipegen

use pipegen::core::config::GeneratorConfig;
use pipegen::generator::{GenerateReport, GenerateRequest, Generator, GeneratorError};
use pipegen::Language;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Base header used across tests, mirroring the real template layout:
/// a trigger block with a branches-ignore filter, an env block with an
/// unrelated key, and a trailing `jobs:` the step blocks hang off.
pub const BASE_HEADER: &str =
    "name: ci\n\non:\n  push:\n    branches-ignore:\n      - wip/**\n\nenv:\n  CI: \"true\"\n\njobs:\n";

pub const BUILD_STEP: &str =
    "  build:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n      - run: make build\n";
pub const TEST_STEP: &str =
    "  test:\n    runs-on: ubuntu-latest\n    needs: build\n    steps:\n      - run: make test\n";
pub const DEPLOY_STEP: &str =
    "  deploy:\n    runs-on: ubuntu-latest\n    needs: test\n    steps:\n      - run: make deploy\n";

/// A disposable workspace with a template tree, a projects directory
/// and an output directory, all under one temp dir.
pub struct Workspace {
    // Named so the backing directory outlives the config paths
    _dir: TempDir,
    pub config: GeneratorConfig,
}

impl Workspace {
    /// Workspace with the full python template tree and one project,
    /// linter stubbed to an always-passing binary.
    pub fn new() -> Self {
        Self::bare()
            .with_base(BASE_HEADER)
            .with_step(Language::Python, "build", BUILD_STEP)
            .with_step(Language::Python, "test", TEST_STEP)
            .with_step(Language::Python, "deploy", DEPLOY_STEP)
            .with_project("products")
    }

    /// Empty workspace: directories exist, no templates, no projects.
    pub fn bare() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        let config = GeneratorConfig {
            templates_dir: root.join("templates"),
            workflows_dir: root.join(".github/workflows"),
            projects_dir: root.join("projects"),
            linter: "true".to_string(),
            ..GeneratorConfig::default()
        };
        fs::create_dir_all(&config.templates_dir).expect("templates dir");
        fs::create_dir_all(&config.projects_dir).expect("projects dir");
        Self { _dir: dir, config }
    }

    pub fn with_base(self, content: &str) -> Self {
        fs::write(self.config.templates_dir.join("base.yml"), content).expect("write base");
        self
    }

    pub fn with_step(self, lang: Language, step: &str, content: &str) -> Self {
        let dir = self.config.templates_dir.join(lang.dir_name());
        fs::create_dir_all(&dir).expect("step dir");
        fs::write(dir.join(format!("{step}.yml")), content).expect("write step");
        self
    }

    pub fn with_project(self, name: &str) -> Self {
        fs::create_dir_all(self.config.projects_dir.join(name)).expect("project dir");
        self
    }

    pub fn with_linter(mut self, binary: &str) -> Self {
        self.config.linter = binary.to_string();
        self
    }

    /// Run one generation pass against this workspace.
    pub fn generate(
        &self,
        lang: Language,
        project: &str,
        steps: &[&str],
    ) -> Result<GenerateReport, GeneratorError> {
        let generator = Generator::new(self.config.clone());
        generator.generate(&GenerateRequest {
            lang,
            project: project.to_string(),
            steps: steps.iter().map(|step| step.to_string()).collect(),
        })
    }

    pub fn custom_path(&self) -> PathBuf {
        self.config.custom_workflow_path()
    }

    pub fn default_path(&self) -> PathBuf {
        self.config.default_workflow_path()
    }

    pub fn read_custom(&self) -> String {
        fs::read_to_string(self.custom_path()).expect("custom workflow exists")
    }

    pub fn read_default(&self) -> String {
        fs::read_to_string(self.default_path()).expect("default workflow exists")
    }
}

/// Assert `haystack` contains each needle, in the given order.
pub fn assert_contains_in_order(haystack: &str, needles: &[&str]) {
    let mut cursor = 0;
    for needle in needles {
        match haystack[cursor..].find(needle) {
            Some(offset) => cursor += offset + needle.len(),
            None => panic!(
                "expected to find {:?} (after byte {}) in:\n{}",
                needle, cursor, haystack
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_layout() {
        let workspace = Workspace::new();
        assert!(workspace.config.templates_dir.join("base.yml").exists());
        assert!(workspace
            .config
            .templates_dir
            .join("python/build.yml")
            .exists());
        assert!(workspace.config.projects_dir.join("products").exists());
    }

    #[test]
    fn test_assert_contains_in_order_accepts_ordered_needles() {
        assert_contains_in_order("a b c", &["a", "c"]);
    }

    #[test]
    #[should_panic(expected = "expected to find")]
    fn test_assert_contains_in_order_rejects_out_of_order_needles() {
        assert_contains_in_order("a b c", &["c", "a"]);
    }
}
