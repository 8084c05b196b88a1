//! Error types for measurement export handling

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while cleaning or loading exports
#[derive(Debug, Error)]
pub enum ConvError {
    /// Export or config file could not be read or written
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory could not be listed
    #[error("cannot list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Result type for export operations
pub type ConvResult<T> = Result<T, ConvError>;

impl ConvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvError::Io {
            path: path.into(),
            source,
        }
    }
}
