//! Step list parsing and normalization

use crate::core::registry::MANDATORY_STEP;
use regex::Regex;
use std::sync::OnceLock;

/// Split a comma-separated step string, trimming whitespace around
/// each token. A blank input yields an empty list; interior empty
/// tokens are kept and skipped later at resolution time.
pub fn parse_step_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|token| token.trim().to_string()).collect()
}

/// Normalize a requested step list so `build` occupies position 0.
///
/// If `build` is absent it is prepended; if present, every occurrence
/// is removed and a single `build` is re-prepended. The relative order
/// of the remaining steps is untouched (stable partition, not a sort),
/// and non-`build` duplicates are kept as given.
pub fn normalize_steps(requested: Vec<String>) -> Vec<String> {
    let mut steps: Vec<String> = requested
        .into_iter()
        .filter(|step| step != MANDATORY_STEP)
        .collect();
    steps.insert(0, MANDATORY_STEP.to_string());
    steps
}

/// Check a step token against the conservative identifier pattern.
///
/// A token failing this never reaches the filesystem, so a crafted
/// name cannot address files outside the templates root.
pub fn is_valid_step_name(name: &str) -> bool {
    static STEP_NAME: OnceLock<Regex> = OnceLock::new();
    let pattern = STEP_NAME
        .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("step-name pattern compiles"));
    pattern.is_match(name)
}
