// ModSieve - core/segmenter.rs
//
// Single-pass log-entry segmentation and classification.
// Core layer: accepts in-memory content, never touches the filesystem.
//
// A Minecraft log is a sequence of records of the form
//
//   [<timestamp>] [<category>/<LEVEL>] <message...>
//       <optional continuation lines (stack traces, config dumps)...>
//
// Lines at WARN/ERROR/FATAL open an entry; following non-bracketed lines are
// appended to it until the next bracketed record. The pass is stateless
// between calls and deterministic for a given input.

use crate::core::model::{Level, LogEntry, Segmentation, TaggedLine};
use regex::Regex;
use std::sync::OnceLock;

/// Header pattern: `[timestamp] [category/LEVEL]` anchored at line start.
///
/// The level alternation is deliberately case-sensitive and closed -- INFO
/// and DEBUG records never open an entry (they still act as entry boundaries
/// via the bracket heuristic below, and the tag scan still sees them).
const HEADER_PATTERN: &str = r"^\[([^\]]+)\]\s*\[([^\]]+)/(WARN|ERROR|FATAL)\]";

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"))
}

/// Segment log content into classified multi-line entries, optionally
/// scanning every line against a case-insensitive substring tag filter.
///
/// The scan and the segmentation are independent: a tagged line lands in
/// `tagged_lines` whether or not it belongs to any entry, and an entry's
/// `tagged` flag is set when the filter matches its header line or any
/// appended continuation line.
///
/// Never fails. Malformed lines degrade to continuations or are ignored;
/// decode irregularities are the reading collaborator's concern and arrive
/// here already replaced.
pub fn segment(content: &str, tag_filter: Option<&str>) -> Segmentation {
    let header = header_regex();
    let filter_lower = tag_filter.map(str::to_lowercase);

    let mut entries: Vec<LogEntry> = Vec::new();
    let mut tagged_lines: Vec<TaggedLine> = Vec::new();
    let mut current: Option<LogEntry> = None;
    let mut lines_processed: u64 = 0;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_number = (idx as u64) + 1;
        lines_processed = line_number;
        let line = raw_line.trim_end();

        // Tag scan runs over ALL lines, unaffected by entry boundaries.
        let line_tagged = match &filter_lower {
            Some(filter) => line.to_lowercase().contains(filter),
            None => false,
        };
        if line_tagged {
            tagged_lines.push(TaggedLine {
                line_number,
                content: line.to_string(),
            });
        }

        if let Some(caps) = header.captures(line) {
            // A header line always starts a new entry, closing any prior one.
            if let Some(finished) = current.take() {
                entries.push(finished);
            }

            // The alternation in the pattern guarantees the level capture is
            // one of the three literals.
            let level = Level::from_header(&caps[3]).expect("level restricted by pattern");

            current = Some(LogEntry {
                line_number,
                timestamp: caps[1].to_string(),
                category: caps[2].to_string(),
                level,
                content: vec![line.to_string()],
                tagged: line_tagged,
            });
        } else if let Some(mut entry) = current.take() {
            if line.starts_with('[') && line.contains("] [") {
                // Some other bracketed record (e.g. an INFO line): close the
                // open entry. The boundary line itself is consumed -- it is
                // retained in no entry's content and opens nothing. This can
                // drop text that merely resembles a timestamped record; the
                // behaviour is preserved as-is from the original tooling.
                entries.push(entry);
            } else {
                entry.content.push(line.to_string());
                if line_tagged {
                    entry.tagged = true;
                }
                current = Some(entry);
            }
        }
        // No open entry and no header match: the line plays no part in
        // segmentation (the tag scan above already saw it).
    }

    // Input ended with an entry still open.
    if let Some(finished) = current.take() {
        entries.push(finished);
    }

    tracing::debug!(
        lines = lines_processed,
        entries = entries.len(),
        tagged = tagged_lines.len(),
        "Segmentation complete"
    );

    Segmentation {
        entries,
        tagged_lines,
        lines_processed,
    }
}
