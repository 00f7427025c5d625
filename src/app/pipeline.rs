// ModSieve - app/pipeline.rs
//
// Per-log processing pipeline: read the file (lossy), segment it, render
// the Markdown reports, and write the artifacts. This is the only layer
// that touches the filesystem around the core segmenter.
//
// Per-log failures are non-fatal to a multi-log run: the CLI invokes this
// once per requested log and aggregates the outcomes into its exit code.

use crate::core::export;
use crate::core::model::SegmentSummary;
use crate::core::report::{self, ReportMeta};
use crate::core::segmenter;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{ExportError, PipelineError};
use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};

/// Injected settings for one pipeline run. Constructed by the CLI from
/// config.toml and flag overrides; nothing here is read from globals.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Case-insensitive substring used to tag mod-specific lines.
    pub tag_filter: Option<String>,

    /// Directory artifacts are written into (created if absent).
    pub output_dir: PathBuf,
}

/// Paths of the artifacts written for one log, plus its summary counts.
#[derive(Debug)]
pub struct LogArtifacts {
    /// The errors/warnings Markdown report.
    pub entries_report: PathBuf,

    /// The tagged-messages Markdown report. None when no tag filter was set.
    pub tagged_report: Option<PathBuf>,

    /// The JSON export.
    pub json_export: PathBuf,

    /// Summary counts from the segmentation pass.
    pub summary: SegmentSummary,
}

/// Process a single log file end to end.
///
/// A missing file returns `PipelineError::SourceNotFound`, which callers
/// treat as a reportable condition rather than a fault (`debug.log` only
/// exists when the launcher has debug logging enabled).
pub fn process_log(log_path: &Path, config: &PipelineConfig) -> Result<LogArtifacts, PipelineError> {
    if !log_path.exists() {
        return Err(PipelineError::SourceNotFound {
            path: log_path.to_path_buf(),
        });
    }

    if let Ok(meta) = std::fs::metadata(log_path) {
        if meta.len() > constants::LARGE_LOG_THRESHOLD_BYTES {
            tracing::warn!(
                path = %log_path.display(),
                bytes = meta.len(),
                "Log file is unusually large; parsing may be slow"
            );
        }
    }

    let content = fs::read_file_lossy(log_path).map_err(|e| PipelineError::Io {
        path: log_path.to_path_buf(),
        operation: "read",
        source: e,
    })?;

    let seg = segmenter::segment(&content, config.tag_filter.as_deref());

    let log_name = log_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!(
        log = %log_name,
        entries = seg.entries.len(),
        tagged = seg.tagged_lines.len(),
        lines = seg.lines_processed,
        "Parsed log"
    );

    let meta = ReportMeta {
        log_name: log_name.clone(),
        log_path: log_path.to_path_buf(),
        parsed_at: Local::now(),
        tag_filter: config.tag_filter.clone(),
    };

    std::fs::create_dir_all(&config.output_dir).map_err(|e| PipelineError::Io {
        path: config.output_dir.clone(),
        operation: "create output directory",
        source: e,
    })?;

    // Errors/warnings report.
    let entries_report = config
        .output_dir
        .join(format!("{log_name}{}", constants::ENTRIES_REPORT_SUFFIX));
    write_text(&entries_report, &report::render_entries_report(&seg, &meta))?;
    tracing::info!(path = %entries_report.display(), "Saved errors/warnings report");

    // Tagged-messages report, only when a filter is in effect.
    let tagged_report = if config.tag_filter.is_some() {
        let path = config
            .output_dir
            .join(format!("{log_name}{}", constants::TAGGED_REPORT_SUFFIX));
        write_text(&path, &report::render_tagged_report(&seg, &meta))?;
        tracing::info!(path = %path.display(), "Saved tagged-messages report");
        Some(path)
    } else {
        None
    };

    // JSON export.
    let json_export = config
        .output_dir
        .join(format!("{log_name}{}", constants::JSON_EXPORT_SUFFIX));
    let file = std::fs::File::create(&json_export).map_err(|e| ExportError::Io {
        path: json_export.clone(),
        source: e,
    })?;
    export::export_json(&seg, &meta, io::BufWriter::new(file), &json_export)?;
    tracing::info!(path = %json_export.display(), "Saved JSON export");

    Ok(LogArtifacts {
        entries_report,
        tagged_report,
        json_export,
        summary: seg.summary(),
    })
}

fn write_text(path: &Path, content: &str) -> Result<(), PipelineError> {
    std::fs::write(path, content).map_err(|e| PipelineError::Io {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(output_dir: PathBuf, filter: Option<&str>) -> PipelineConfig {
        PipelineConfig {
            tag_filter: filter.map(str::to_string),
            output_dir,
        }
    }

    #[test]
    fn test_missing_source_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = process_log(
            &dir.path().join("logs/debug.log"),
            &config(dir.path().join("out"), None),
        )
        .unwrap_err();

        assert!(err.is_source_not_found());
        // No artifacts should have been created.
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_artifacts_written_with_filter() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("latest.log");
        std::fs::write(
            &log,
            "[12:00:00] [Server/WARN] biomepruner fallback triggered\n",
        )
        .unwrap();

        let artifacts = process_log(&log, &config(dir.path().join("out"), Some("biomepruner")))
            .unwrap();

        assert!(artifacts.entries_report.exists());
        assert!(artifacts.tagged_report.as_ref().unwrap().exists());
        assert!(artifacts.json_export.exists());
        assert_eq!(artifacts.summary.total_entries, 1);
        assert_eq!(artifacts.summary.tagged_entries, 1);

        let report = std::fs::read_to_string(&artifacts.entries_report).unwrap();
        assert!(report.contains("(latest)"));
    }

    #[test]
    fn test_no_tagged_report_without_filter() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("latest.log");
        std::fs::write(&log, "[12:00:00] [Server/ERROR] boom\n").unwrap();

        let artifacts = process_log(&log, &config(dir.path().join("out"), None)).unwrap();
        assert!(artifacts.tagged_report.is_none());
        assert!(artifacts.entries_report.exists());
    }
}
