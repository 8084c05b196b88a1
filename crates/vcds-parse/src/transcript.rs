//! Transcript and record file I/O

use std::path::Path;

use tracing::info;
use vcds_core::{DiagnosticRecord, VcdsError, VcdsResult};

use crate::record::parse;

/// Read a transcript file as text
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_transcript(path: impl AsRef<Path>) -> VcdsResult<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| VcdsError::read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read and parse a transcript file
pub fn parse_file(path: impl AsRef<Path>) -> VcdsResult<DiagnosticRecord> {
    let text = read_transcript(&path)?;
    Ok(parse(&text))
}

/// Write a record as its JSON artifact
pub fn write_record(path: impl AsRef<Path>, record: &DiagnosticRecord) -> VcdsResult<()> {
    let path = path.as_ref();
    let json = record.to_json()?;
    std::fs::write(path, json).map_err(|e| VcdsError::write(path, e))?;
    info!("Wrote diagnostic record to {}", path.display());
    Ok(())
}

/// Load a record from its JSON artifact
pub fn read_record(path: impl AsRef<Path>) -> VcdsResult<DiagnosticRecord> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| VcdsError::read(path, e))?;
    Ok(DiagnosticRecord::from_json(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transcript_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, VcdsError::Io { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.txt");
        std::fs::write(&path, b"VIN: ABC123\nTemp: 90\xB0C\n").unwrap();

        let text = read_transcript(&path).unwrap();
        assert!(text.contains("90\u{FFFD}C"));
        assert_eq!(
            parse(&text).vehicle_info.get(vcds_core::HeaderField::Vin),
            Some("ABC123")
        );
    }
}
