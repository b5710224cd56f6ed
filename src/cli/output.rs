//! CLI output formatting

use crate::generator::{GenerateReport, SkipReason};
use crate::linter::LintOutcome;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "> ");

/// Format a lint outcome for display
pub fn format_lint_outcome(outcome: &LintOutcome) -> String {
    match outcome {
        LintOutcome::Passed => format!("{} Lint {}", CHECK, style("passed").green()),
        LintOutcome::Failed { exit_code, output } => {
            let mut text = format!(
                "{} Lint {} (exit code {})",
                WARN,
                style("failed").yellow(),
                exit_code
            );
            for line in output.lines() {
                text.push_str(&format!("\n    {}", style(line).dim()));
            }
            text
        }
        LintOutcome::Unavailable { reason } => format!(
            "{} Linter unavailable: {}",
            WARN,
            style(reason).dim()
        ),
    }
}

/// Format the reason a step was skipped
pub fn format_skip_reason(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::MissingTemplate => "no template for this language",
        SkipReason::InvalidName => "not a valid step name",
    }
}

/// Format the full report of a generation run
pub fn format_report(report: &GenerateReport) -> String {
    let mut lines = vec![format!(
        "{} Steps applied: {}",
        INFO,
        style(report.steps.join(", ")).cyan()
    )];

    for skip in &report.skipped {
        lines.push(format!(
            "{} Skipped '{}': {}",
            WARN,
            style(&skip.step).yellow(),
            format_skip_reason(skip.reason)
        ));
    }

    for file in &report.written {
        lines.push(format!(
            "{} Workflow written to {}",
            CHECK,
            style(file.path.display()).bold()
        ));
        lines.push(format!("  {}", format_lint_outcome(&file.lint)));
    }

    lines.join("\n")
}
