// ModSieve - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no CLI,
// no platform dependencies (core depends on std + serde only).
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Level
// =============================================================================

/// Severity levels that open a log entry, ordered from most to least severe.
///
/// This set is closed by design: lines at other levels (INFO, DEBUG, TRACE)
/// never open an entry. The match against the raw level text is
/// case-sensitive and exact -- `warn` or `Warn` do not qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Fatal,
    Error,
    Warn,
}

impl Level {
    /// Returns all variants in display order (most severe first).
    pub fn all() -> &'static [Level] {
        &[Level::Fatal, Level::Error, Level::Warn]
    }

    /// The exact text this level carries in a log header line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
        }
    }

    /// Map raw header-line level text to a `Level`.
    ///
    /// Case-sensitive exact match; anything outside the closed set returns
    /// `None` and the line does not open an entry.
    pub fn from_header(raw: &str) -> Option<Level> {
        match raw {
            "FATAL" => Some(Level::Fatal),
            "ERROR" => Some(Level::Error),
            "WARN" => Some(Level::Warn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Log Entry (output of segmentation)
// =============================================================================

/// A single classified, possibly multi-line diagnostic record extracted
/// from a log.
///
/// Entries are constructed during one segmentation pass and never mutated
/// afterwards. `content` holds every raw line belonging to the entry in
/// original file order, starting with the header line that opened it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// 1-based line number of the header line that opened this entry.
    pub line_number: u64,

    /// Verbatim text captured between the first bracket pair.
    /// Kept as a string: the segmenter never interprets timestamps.
    pub timestamp: String,

    /// Verbatim thread/category text captured before the `/` in the second
    /// bracket pair (e.g. `Server thread`, `Render thread`).
    pub category: String,

    /// Classified severity.
    pub level: Level,

    /// All lines of this entry, trailing whitespace stripped, leading
    /// whitespace preserved. Always contains at least the header line.
    pub content: Vec<String>,

    /// True when the tag filter matched the header line or any continuation
    /// line appended to this entry. Always false when no filter was supplied.
    pub tagged: bool,
}

// =============================================================================
// Tagged line (output of the flat tag scan)
// =============================================================================

/// A raw line that matched the tag filter, independent of entry boundaries.
///
/// The tag scan covers every input line, including lines that belong to no
/// entry (INFO records, boundary lines the segmenter discards, free text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedLine {
    /// 1-based line number in the source file.
    pub line_number: u64,

    /// The line text, trailing whitespace stripped.
    pub content: String,
}

// =============================================================================
// Segmentation result
// =============================================================================

/// Complete output of one segmentation pass over a log file's lines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Segmentation {
    /// Classified entries in file order.
    pub entries: Vec<LogEntry>,

    /// Flat list of tag-filter matches across ALL lines.
    /// Empty when no filter was supplied.
    pub tagged_lines: Vec<TaggedLine>,

    /// Total input lines processed.
    pub lines_processed: u64,
}

impl Segmentation {
    /// Summary counts for reports and the JSON export.
    pub fn summary(&self) -> SegmentSummary {
        let mut by_level = LevelBreakdown::default();
        for entry in &self.entries {
            match entry.level {
                Level::Warn => by_level.warn += 1,
                Level::Error => by_level.error += 1,
                Level::Fatal => by_level.fatal += 1,
            }
        }
        SegmentSummary {
            total_entries: self.entries.len(),
            tagged_entries: self.entries.iter().filter(|e| e.tagged).count(),
            tagged_lines: self.tagged_lines.len(),
            by_level,
        }
    }
}

/// Summary statistics for a completed segmentation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    /// Total classified entries.
    pub total_entries: usize,

    /// Entries whose `tagged` flag is set.
    pub tagged_entries: usize,

    /// Matches in the flat tag scan (all lines, not just entries).
    pub tagged_lines: usize,

    /// Entries by severity level.
    pub by_level: LevelBreakdown,
}

/// Per-level entry counts, serialised under the literal level names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelBreakdown {
    #[serde(rename = "WARN")]
    pub warn: usize,

    #[serde(rename = "ERROR")]
    pub error: usize,

    #[serde(rename = "FATAL")]
    pub fatal: usize,
}

impl LevelBreakdown {
    /// Count for one level.
    pub fn get(&self, level: Level) -> usize {
        match level {
            Level::Warn => self.warn,
            Level::Error => self.error,
            Level::Fatal => self.fatal,
        }
    }
}
