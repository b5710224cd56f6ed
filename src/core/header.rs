//! Header assembly: env injection and trigger rewriting
//!
//! Both transforms are narrow line-pattern edits over the base header
//! template. The header is never parsed as YAML, so it tolerates any
//! surrounding content, including env blocks that already carry other
//! keys.

use crate::core::editor::LineEditor;

/// Marker line introducing the header's environment block
const ENV_MARKER: &str = "env:";
/// Marker line introducing the header's trigger block
const ON_MARKER: &str = "on:";
/// Trigger filter dropped from the default document
const BRANCHES_IGNORE: &str = "branches-ignore";

/// Registry/owner fragment of the image reference. The `${{ ... }}`
/// placeholder is literal text for the CI engine, never evaluated here.
const IMAGE_REGISTRY_FRAGMENT: &str = "ghcr.io/${{ github.repository_owner }}/";
/// Tag fragment of the image reference, again a literal placeholder.
const IMAGE_TAG_FRAGMENT: &str = ":${{ github.sha }}";

/// Environment lines advertising the target project to every job.
pub fn project_env_lines(project: &str) -> Vec<String> {
    vec![
        format!("  PROJECT_NAME: {project}"),
        format!("  IMAGE_NAME: {IMAGE_REGISTRY_FRAGMENT}{project}{IMAGE_TAG_FRAGMENT}"),
    ]
}

/// Splice `env_lines` into `header`.
///
/// If a line whose trimmed content is exactly `env:` exists, the new
/// keys are inserted immediately after it and everything else is left
/// untouched. Otherwise a fresh `env:` block carrying the same keys is
/// prepended before the otherwise unmodified content.
pub fn inject_env(header: &str, env_lines: &[String]) -> String {
    let mut editor = LineEditor::new(header);
    match editor.find_marker(ENV_MARKER) {
        Some(index) => editor.insert_after(index, env_lines),
        None => {
            let mut block: Vec<String> = vec![ENV_MARKER.to_string()];
            block.extend(env_lines.iter().cloned());
            editor.prepend(&block);
        }
    }
    editor.render()
}

/// Rewrite the header triggers for the default document.
///
/// Every line carrying a `branches-ignore` filter is dropped, the
/// sub-block under the `on:` marker is removed in full, and a
/// `pull_request` trigger restricted to `branches` is inserted in its
/// place. A header without an `on:` marker only loses its
/// `branches-ignore` lines.
pub fn rewrite_triggers(header: &str, branches: &[String]) -> String {
    let mut editor = LineEditor::new(header);
    editor.remove_containing(BRANCHES_IGNORE);
    if let Some(index) = editor.find_marker(ON_MARKER) {
        editor.remove_indented_block(index);
        editor.insert_after(index, &pull_request_block(branches));
    }
    editor.render()
}

fn pull_request_block(branches: &[String]) -> Vec<String> {
    let mut lines = vec!["  pull_request:".to_string(), "    branches:".to_string()];
    for branch in branches {
        lines.push(format!("      - {branch}"));
    }
    lines
}
