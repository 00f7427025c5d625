// ModSieve - core/report.rs
//
// Markdown report rendering for segmentation results.
// Core layer: produces strings, never touches the filesystem.
//
// Two reports per log: the errors/warnings report (one section per entry,
// fenced code block for entry content) and the tagged-messages report (flat
// list of tag-filter matches across all lines).

use crate::core::model::{Level, Segmentation};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Metadata rendered into report headers, supplied by the app layer.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Short log name, e.g. `latest` or `debug` (file stem).
    pub log_name: String,

    /// Full path to the source log file.
    pub log_path: PathBuf,

    /// When the parse ran.
    pub parsed_at: DateTime<Local>,

    /// The tag filter in effect, if any.
    pub tag_filter: Option<String>,
}

/// Render the errors/warnings report.
///
/// One `## Line N: LEVEL` section per entry with its full content in a
/// fenced code block, preceded by totals and a per-level breakdown.
pub fn render_entries_report(seg: &Segmentation, meta: &ReportMeta) -> String {
    let title = format!("# Minecraft Log Errors and Warnings ({})", meta.log_name);

    if seg.entries.is_empty() {
        return format!(
            "{title}\n\nNo warnings, errors, or fatal errors found in the log file.\n"
        );
    }

    let summary = seg.summary();
    let mut out: Vec<String> = Vec::new();

    out.push(format!("{title}\n"));
    out.push(format!("**Log File:** `{}`", meta.log_path.display()));
    out.push(format!(
        "**Parsed at:** {}",
        meta.parsed_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push(format!("**Total Issues:** {}", summary.total_entries));

    let breakdown: Vec<String> = Level::all()
        .iter()
        .filter(|level| summary.by_level.get(**level) > 0)
        .map(|level| format!("{level}: {}", summary.by_level.get(*level)))
        .collect();
    out.push(format!("**Breakdown:** {}", breakdown.join(", ")));

    if let Some(ref filter) = meta.tag_filter {
        out.push(format!(
            "**Tagged ({filter}):** {}",
            summary.tagged_entries
        ));
    }

    out.push("\n---\n".to_string());

    for entry in &seg.entries {
        let marker = if entry.tagged {
            match meta.tag_filter {
                Some(ref filter) => format!(" 🔧 **{filter}**"),
                None => String::new(),
            }
        } else {
            String::new()
        };

        out.push(format!(
            "## Line {}: {}{marker}",
            entry.line_number, entry.level
        ));
        out.push(format!("**Time:** {}", entry.timestamp));
        out.push(format!("**Thread/Category:** {}\n", entry.category));
        out.push("```".to_string());
        out.extend(entry.content.iter().cloned());
        out.push("```\n".to_string());
    }

    out.join("\n")
}

/// Render the tagged-messages report: every line (by original line number)
/// that matched the tag filter, regardless of severity or entry membership.
pub fn render_tagged_report(seg: &Segmentation, meta: &ReportMeta) -> String {
    let filter_label = meta.tag_filter.as_deref().unwrap_or("none");
    let title = format!("# Tagged Messages ({})", meta.log_name);

    if seg.tagged_lines.is_empty() {
        return format!(
            "{title}\n\nNo lines matched the tag filter `{filter_label}`.\n"
        );
    }

    let mut out: Vec<String> = Vec::new();
    out.push(format!("{title}\n"));
    out.push(format!("**Log File:** `{}`", meta.log_path.display()));
    out.push(format!(
        "**Parsed at:** {}",
        meta.parsed_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push(format!("**Filter:** `{filter_label}`"));
    out.push(format!("**Total Messages:** {}", seg.tagged_lines.len()));
    out.push("\n---\n".to_string());

    for tagged in &seg.tagged_lines {
        out.push(format!("**Line {}:**", tagged.line_number));
        out.push("```".to_string());
        out.push(tagged.content.clone());
        out.push("```\n".to_string());
    }

    out.join("\n")
}
