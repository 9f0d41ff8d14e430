//! Render the final report as a markdown artifact.

use crate::error::Result;
use debrief_domain::{priority_rank, FinalReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const REPORT_TITLE: &str = "# Document Analysis Report";

/// Render the report as markdown.
///
/// Action items are sorted High before Medium before Low, with
/// unrecognized labels last; the sort is stable so items sharing a
/// priority keep the order synthesis returned them in. Labels are
/// rendered verbatim and a missing owner shows as "Unassigned".
pub fn to_markdown(report: &FinalReport) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        String::new(),
        "## Executive Summary".to_string(),
        String::new(),
        report.executive_summary.clone(),
        String::new(),
        "## Action Items".to_string(),
    ];

    if report.consolidated_action_items.is_empty() {
        lines.push("No immediate action items detected.".to_string());
    } else {
        lines.push("| Priority | Description | Owner |".to_string());
        lines.push("| :--- | :--- | :--- |".to_string());

        let mut items = report.consolidated_action_items.clone();
        items.sort_by_key(|item| priority_rank(&item.priority));

        for item in &items {
            let owner = match item.owner.as_deref() {
                Some(o) if !o.is_empty() => o,
                _ => "Unassigned",
            };
            // A pipe in the description would break the table row
            let description = item.description.replace('|', "-");
            lines.push(format!("| {} | {} | {} |", item.priority, description, owner));
        }
    }

    lines.join("\n")
}

/// Report location for a given input: `{stem}_report.md` beside it.
pub fn report_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!("{}_report.md", stem))
}

/// Render the report and write it beside the input document.
pub fn save_report(report: &FinalReport, input: &Path) -> Result<PathBuf> {
    let path = report_path(input);
    debug!("Writing report to {}", path.display());
    fs::write(&path, to_markdown(report))?;
    Ok(path)
}
