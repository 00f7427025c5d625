// ModSieve - core/export.rs
//
// JSON export of segmentation results for machine consumption.
// Core layer: writes to any Write trait object.

use crate::core::model::{LogEntry, SegmentSummary, Segmentation, TaggedLine};
use crate::core::report::ReportMeta;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The serialised shape of one parsed log: provenance, every entry, every
/// tagged line, and summary counts.
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    log_file: String,
    log_name: &'a str,
    parsed_at: String,
    tag_filter: Option<&'a str>,
    entries: &'a [LogEntry],
    tagged_lines: &'a [TaggedLine],
    summary: SegmentSummary,
}

/// Export a segmentation result as pretty-printed JSON.
pub fn export_json<W: Write>(
    seg: &Segmentation,
    meta: &ReportMeta,
    writer: W,
    export_path: &Path,
) -> Result<(), ExportError> {
    let doc = JsonExport {
        log_file: meta.log_path.display().to_string(),
        log_name: &meta.log_name,
        parsed_at: meta.parsed_at.to_rfc3339(),
        tag_filter: meta.tag_filter.as_deref(),
        entries: &seg.entries,
        tagged_lines: &seg.tagged_lines,
        summary: seg.summary(),
    };

    serde_json::to_writer_pretty(writer, &doc).map_err(|e| ExportError::Json {
        path: PathBuf::from(export_path),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segmenter::segment;
    use chrono::Local;

    fn meta() -> ReportMeta {
        ReportMeta {
            log_name: "latest".to_string(),
            log_path: PathBuf::from("logs/latest.log"),
            parsed_at: Local::now(),
            tag_filter: Some("biomepruner".to_string()),
        }
    }

    #[test]
    fn test_json_export_shape() {
        let content = "[12:00:00] [Server/WARN] biomepruner fallback\n\
                       [12:00:01] [Server/ERROR] unrelated failure\n";
        let seg = segment(content, Some("biomepruner"));

        let mut buf = Vec::new();
        export_json(&seg, &meta(), &mut buf, Path::new("out.json")).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["log_name"], "latest");
        assert_eq!(value["tag_filter"], "biomepruner");
        assert_eq!(value["entries"].as_array().unwrap().len(), 2);
        assert_eq!(value["entries"][0]["level"], "WARN");
        assert_eq!(value["entries"][0]["tagged"], true);
        assert_eq!(value["entries"][0]["line_number"], 1);
        assert_eq!(value["tagged_lines"].as_array().unwrap().len(), 1);
        assert_eq!(value["summary"]["total_entries"], 2);
        assert_eq!(value["summary"]["tagged_entries"], 1);
        assert_eq!(value["summary"]["by_level"]["WARN"], 1);
        assert_eq!(value["summary"]["by_level"]["ERROR"], 1);
        assert_eq!(value["summary"]["by_level"]["FATAL"], 0);
    }

    #[test]
    fn test_json_export_empty_segmentation() {
        let seg = segment("", None);
        let mut buf = Vec::new();
        export_json(&seg, &meta(), &mut buf, Path::new("out.json")).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 0);
        assert_eq!(value["summary"]["total_entries"], 0);
    }
}
