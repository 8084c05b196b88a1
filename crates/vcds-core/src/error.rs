//! Common error types for VCDS processing

use std::path::PathBuf;

use thiserror::Error;

/// Result type for VCDS operations
pub type VcdsResult<T> = Result<T, VcdsError>;

/// Errors that can occur around the transcript parser
///
/// The parser itself never fails on text: unmatched lines and malformed fault
/// sections are skipped. Only the I/O around it can fail.
#[derive(Debug, Error)]
pub enum VcdsError {
    /// Input file missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output artifact could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization of a record failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VcdsError {
    /// Build a read error for the given path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VcdsError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a write error for the given path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VcdsError::Write {
            path: path.into(),
            source,
        }
    }
}
