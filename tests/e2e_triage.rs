// ModSieve - tests/e2e_triage.rs
//
// End-to-end tests for the triage pipeline.
//
// These tests exercise the real filesystem: a synthetic launcher instance
// is written to a temp directory, processed through the full pipeline, and
// the Markdown/JSON artifacts are read back and checked -- no mocks.

use modsieve::app::pipeline::{process_log, PipelineConfig};
use modsieve::core::segmenter::segment;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

/// A realistic slice of a launcher log: INFO noise, a WARN with a stack
/// trace terminated by an INFO boundary line, a tagged ERROR, and a FATAL
/// entry running to end of file.
const SAMPLE_LOG: &str = "\
[10:51:01] [main/INFO] [minecraft/Main]: Loading Minecraft 1.21.1\n\
[10:51:07] [Render thread/WARN] ModMesher detected overlapping geometry\n\
\tat com.example.modmesher.Mesher.merge(Mesher.java:88)\n\
\tat com.example.modmesher.Mesher.tick(Mesher.java:31)\n\
[10:51:08] [Render thread/INFO] Reloading textures\n\
[10:52:40] [Server thread/ERROR] ModMesher region cache inconsistent\n\
[10:53:12] [Server thread/FATAL] Unrecoverable world state\n\
\tcaused by: java.lang.IllegalStateException\n";

fn write_instance(root: &Path) -> PathBuf {
    let logs_dir = root.join("minecraft").join("logs");
    fs::create_dir_all(&logs_dir).unwrap();
    let log = logs_dir.join("latest.log");
    fs::write(&log, SAMPLE_LOG).unwrap();
    log
}

fn config(output_dir: PathBuf, tag: Option<&str>) -> PipelineConfig {
    PipelineConfig {
        tag_filter: tag.map(str::to_string),
        output_dir,
    }
}

// =============================================================================
// Pipeline E2E
// =============================================================================

/// Full run: artifacts exist and their content reflects the segmentation.
#[test]
fn e2e_artifacts_reflect_segmentation() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_instance(dir.path());
    let out = dir.path().join("log_output");

    let artifacts = process_log(&log, &config(out.clone(), Some("modmesher"))).unwrap();

    assert_eq!(artifacts.summary.total_entries, 3);
    assert_eq!(artifacts.summary.by_level.warn, 1);
    assert_eq!(artifacts.summary.by_level.error, 1);
    assert_eq!(artifacts.summary.by_level.fatal, 1);
    assert_eq!(artifacts.summary.tagged_entries, 2);

    // Markdown report.
    let report = fs::read_to_string(out.join("latest_errors_warnings.md")).unwrap();
    assert!(report.starts_with("# Minecraft Log Errors and Warnings (latest)"));
    assert!(report.contains("**Total Issues:** 3"));
    assert!(report.contains("## Line 2: WARN"));
    assert!(report.contains("Mesher.java:88"));
    assert!(report.contains("## Line 6: ERROR"));
    assert!(report.contains("## Line 7: FATAL"));
    // The INFO boundary line was discarded from entry content.
    assert!(!report.contains("Reloading textures"));

    // Tagged report sees all matching lines, including non-entry ones.
    let tagged = fs::read_to_string(out.join("latest_tagged_messages.md")).unwrap();
    assert!(tagged.contains("**Total Messages:** 4"));

    // JSON export.
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("latest_parsed_data.json")).unwrap())
            .unwrap();
    assert_eq!(json["log_name"], "latest");
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);
    assert_eq!(json["entries"][0]["category"], "Render thread");
    assert_eq!(json["entries"][0]["level"], "WARN");
    assert_eq!(json["entries"][0]["content"].as_array().unwrap().len(), 3);
    assert_eq!(json["entries"][2]["level"], "FATAL");
    assert_eq!(json["summary"]["by_level"]["FATAL"], 1);
    assert_eq!(json["summary"]["tagged_lines"], 4);
}

/// A missing log file is the reportable SourceNotFound condition; nothing
/// is written and no other error kind is produced.
#[test]
fn e2e_missing_log_reports_source_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("minecraft/logs/debug.log");
    let out = dir.path().join("log_output");

    let err = process_log(&missing, &config(out.clone(), None)).unwrap_err();
    assert!(err.is_source_not_found(), "got: {err:?}");
    assert!(!out.exists());
}

/// A log with invalid UTF-8 still parses: the lossy read substitutes
/// replacement characters and the segmentation proceeds.
#[test]
fn e2e_invalid_utf8_degrades_to_replacement_characters() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("latest.log");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"[10:00:00] [Server thread/ERROR] bad payload: ");
    bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
    bytes.extend_from_slice(b"\n\tcontinuation\n");
    fs::write(&log, bytes).unwrap();

    let artifacts = process_log(&log, &config(dir.path().join("out"), None)).unwrap();
    assert_eq!(artifacts.summary.total_entries, 1);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&artifacts.json_export).unwrap()).unwrap();
    let header = json["entries"][0]["content"][0].as_str().unwrap();
    assert!(header.contains('\u{FFFD}'));
}

// =============================================================================
// Reconstruction property
// =============================================================================

/// Concatenating every entry's content visits a subsequence of the original
/// lines in order, with no line claimed by two entries.
#[test]
fn e2e_entry_content_is_an_ordered_subsequence_of_input() {
    let seg = segment(SAMPLE_LOG, None);

    let input_lines: Vec<&str> = SAMPLE_LOG.lines().map(str::trim_end).collect();
    let mut cursor = 0usize;
    for entry in &seg.entries {
        for line in &entry.content {
            let found = input_lines[cursor..]
                .iter()
                .position(|input| *input == line.as_str())
                .expect("entry line must exist in remaining input");
            cursor += found + 1;
        }
    }
}
