// ModSieve - platform/fs.rs
//
// Filesystem access for the app layer. The core layer never reads files;
// content is read here, once, before segmentation begins.

use std::io;
use std::path::Path;

/// Read the full content of a file as a string.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD so a partially
/// corrupt log still parses; the segmenter treats replacement characters as
/// ordinary content.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file_lossy_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.log");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[12:00:00] [Server/WARN] ok\n\xff\xfe broken\n")
            .unwrap();
        drop(file);

        let content = read_file_lossy(&path).unwrap();
        assert!(content.contains("[Server/WARN] ok"));
        assert!(content.contains('\u{FFFD}'));
    }

    #[test]
    fn test_read_file_lossy_missing_file_is_io_error() {
        let err = read_file_lossy(Path::new("/nonexistent/modsieve-test.log")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
