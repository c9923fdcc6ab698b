//! CLI output formatting for conversion runs.
//!
//! # Output Format
//!
//! ```text
//! Structure
//!     guide/
//!         intro → /guide/intro.html
//!     index → /index.html
//!
//! Post index → site/posting/postMain.html (3 fragments, 2 categories)
//!
//! Converted 3 pages
//! ```
//!
//! Failures are reported separately so they can go to stderr, one line per
//! skipped entry:
//!
//! ```text
//! template not found: site/posting/postMain.html
//! convert error: content/bad.md: stream did not contain valid UTF-8
//! ```
//!
//! # Architecture
//!
//! Every report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout/stderr. Format
//! functions are pure: no I/O, no side effects.

use crate::convert::BuildOutcome;
use crate::posting::{IndexOutcome, IndexSummary};
use crate::types::TreeNode;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Build report (stdout)
// ============================================================================

/// Format the stdout report for one conversion run: structure tree, index
/// builds, and the trailing summary line.
pub fn format_build_output(outcome: &BuildOutcome) -> Vec<String> {
    let mut lines = Vec::new();

    if !outcome.tree.is_empty() {
        lines.push("Structure".to_string());
        format_tree_lines(&outcome.tree, 1, &mut lines);
        lines.push(String::new());
    }

    let built: Vec<&IndexSummary> = outcome
        .index_builds
        .iter()
        .filter_map(|build| match build {
            IndexOutcome::Built(summary) => Some(summary),
            IndexOutcome::TemplateMissing(_) => None,
        })
        .collect();
    if !built.is_empty() {
        for summary in built {
            lines.push(index_built_line(summary));
        }
        lines.push(String::new());
    }

    lines.push(summary_line(outcome));
    lines
}

fn format_tree_lines(nodes: &[TreeNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            TreeNode::Dir { name, children, .. } => {
                lines.push(format!("{}{}/", indent(depth), name));
                format_tree_lines(children, depth + 1, lines);
            }
            TreeNode::Page { name, path, .. } => {
                lines.push(format!("{}{} \u{2192} {}.html", indent(depth), name, path));
            }
        }
    }
}

fn index_built_line(summary: &IndexSummary) -> String {
    format!(
        "Post index \u{2192} {} ({} fragments, {} categories)",
        summary.template.display(),
        summary.fragments.len(),
        summary.categories.len()
    )
}

fn summary_line(outcome: &BuildOutcome) -> String {
    if outcome.failures.is_empty() {
        format!("Converted {} pages", outcome.written.len())
    } else {
        format!(
            "Converted {} pages, {} skipped",
            outcome.written.len(),
            outcome.failures.len()
        )
    }
}

/// Print a full build report: progress to stdout, failures to stderr.
pub fn print_build_output(outcome: &BuildOutcome) {
    for line in format_build_output(outcome) {
        println!("{}", line);
    }
    for line in format_failure_output(outcome) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Failure report (stderr)
// ============================================================================

/// Format the stderr report: missing templates first, then every skipped
/// entry with its stage and error.
pub fn format_failure_output(outcome: &BuildOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    for build in &outcome.index_builds {
        if let IndexOutcome::TemplateMissing(path) = build {
            lines.push(format!("template not found: {}", path.display()));
        }
    }
    for failure in &outcome.failures {
        lines.push(format!(
            "{} error: {}: {}",
            failure.stage.label(),
            failure.path.display(),
            failure.error
        ));
    }
    lines
}

// ============================================================================
// Standalone index report
// ============================================================================

/// Format the report for one standalone index build.
pub fn format_index_outcome(outcome: &IndexOutcome) -> Vec<String> {
    match outcome {
        IndexOutcome::Built(summary) => vec![index_built_line(summary)],
        IndexOutcome::TemplateMissing(path) => {
            vec![format!("template not found: {}", path.display())]
        }
    }
}

/// Print a standalone index report to stdout or stderr as appropriate.
pub fn print_index_outcome(outcome: &IndexOutcome) {
    match outcome {
        IndexOutcome::Built(_) => {
            for line in format_index_outcome(outcome) {
                println!("{}", line);
            }
        }
        IndexOutcome::TemplateMissing(_) => {
            for line in format_index_outcome(outcome) {
                eprintln!("{}", line);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
