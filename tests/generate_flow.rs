//! Scenario tests for the custom workflow document

mod helpers;

use helpers::*;
use pipegen::generator::{GeneratorError, SkipReason};
use pipegen::{Language, LintOutcome};

#[test]
fn test_default_steps_when_none_requested() {
    let workspace = Workspace::new();

    let report = workspace
        .generate(Language::Python, "products", &[])
        .expect("generation succeeds");

    assert_eq!(report.steps, vec!["build", "test"]);
    let custom = workspace.read_custom();
    assert_contains_in_order(&custom, &["name: ci", "  build:", "  test:"]);
    assert!(!custom.contains("  deploy:"));
}

#[test]
fn test_requested_steps_keep_order_behind_build() {
    let workspace = Workspace::new();

    let report = workspace
        .generate(Language::Python, "products", &["test", "deploy"])
        .expect("generation succeeds");

    assert_eq!(report.steps, vec!["build", "test", "deploy"]);
    assert_contains_in_order(
        &workspace.read_custom(),
        &["name: ci", "jobs:", "  build:", "  test:", "  deploy:"],
    );
}

#[test]
fn test_build_is_moved_to_front() {
    let workspace = Workspace::new();

    let report = workspace
        .generate(Language::Python, "products", &["deploy", "build"])
        .expect("generation succeeds");

    assert_eq!(report.steps, vec!["build", "deploy"]);
}

#[test]
fn test_env_block_carries_project_and_image() {
    let workspace = Workspace::new();
    workspace
        .generate(Language::Python, "products", &["test"])
        .expect("generation succeeds");

    // Injected keys land right under env:, the pre-existing key survives
    assert_contains_in_order(
        &workspace.read_custom(),
        &[
            "env:",
            "  PROJECT_NAME: products",
            "  IMAGE_NAME: ghcr.io/${{ github.repository_owner }}/products:${{ github.sha }}",
            "  CI: \"true\"",
        ],
    );
}

#[test]
fn test_header_without_env_marker_gets_synthesized_block() {
    let workspace = Workspace::bare()
        .with_base("name: ci\njobs:\n")
        .with_step(Language::Python, "build", BUILD_STEP)
        .with_project("products");

    workspace
        .generate(Language::Python, "products", &["build"])
        .expect("generation succeeds");

    assert_contains_in_order(
        &workspace.read_custom(),
        &["env:\n  PROJECT_NAME: products", "name: ci\njobs:"],
    );
}

#[test]
fn test_missing_template_is_skipped_with_diagnostic() {
    let workspace = Workspace::new();

    let report = workspace
        .generate(Language::Python, "products", &["test", "fuzz"])
        .expect("generation succeeds");

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].step, "fuzz");
    assert_eq!(report.skipped[0].reason, SkipReason::MissingTemplate);

    let custom = workspace.read_custom();
    assert_contains_in_order(&custom, &["  build:", "  test:"]);
    assert!(!custom.contains("fuzz"));
}

#[test]
fn test_path_like_step_token_is_rejected() {
    let workspace = Workspace::new();

    let report = workspace
        .generate(Language::Python, "products", &["test", "../../etc/passwd"])
        .expect("generation succeeds");

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::InvalidName);
}

#[test]
fn test_missing_project_fails_before_any_write() {
    let workspace = Workspace::new();

    let err = workspace
        .generate(Language::Python, "ghost", &["test"])
        .expect_err("missing project is fatal");

    assert!(matches!(err, GeneratorError::ProjectNotFound { .. }));
    assert!(!workspace.custom_path().exists());
    assert!(!workspace.default_path().exists());
}

#[test]
fn test_blocks_are_separated_by_single_blank_line() {
    let workspace = Workspace::new();
    workspace
        .generate(Language::Python, "products", &["test"])
        .expect("generation succeeds");

    let custom = workspace.read_custom();
    assert!(custom.contains("jobs:\n\n  build:"));
    assert!(custom.contains("- run: make build\n\n  test:"));
    assert!(!custom.contains("\n\n\n"));
}

#[test]
fn test_crlf_templates_are_normalized() {
    let workspace = Workspace::bare()
        .with_base("name: ci\r\nenv:\r\njobs:\r\n")
        .with_step(Language::Node, "build", "  build:\r\n    steps: []\r\n")
        .with_project("users");

    workspace
        .generate(Language::Node, "users", &["build"])
        .expect("generation succeeds");

    assert!(!workspace.read_custom().contains('\r'));
    assert!(!workspace.read_default().contains('\r'));
}

#[test]
fn test_lint_failure_is_reported_not_fatal() {
    let workspace = Workspace::new().with_linter("false");

    let report = workspace
        .generate(Language::Python, "products", &["test"])
        .expect("lint problems never abort the run");

    assert_eq!(report.written.len(), 2);
    for file in &report.written {
        assert!(matches!(file.lint, LintOutcome::Failed { exit_code: 1, .. }));
        assert!(file.path.exists());
    }
}

#[test]
fn test_missing_linter_is_reported_not_fatal() {
    let workspace = Workspace::new().with_linter("no-such-linter-binary");

    let report = workspace
        .generate(Language::Python, "products", &["test"])
        .expect("an absent linter never aborts the run");

    for file in &report.written {
        assert!(matches!(file.lint, LintOutcome::Unavailable { .. }));
    }
    assert!(!report.is_clean());
}
