//! Scan error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors a scan can surface
///
/// There are exactly two: the resource could not be opened, or a read
/// failed after the resource was opened. Neither is retried internally.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Resource could not be opened; no lines were read
    #[error("cannot open resource {}: {source}", path.display())]
    ResourceUnavailable {
        /// The path that failed to open
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Read failed mid-scan; the remaining scan is aborted
    #[error("read failed at line {line}: {source}")]
    ReadFailure {
        /// 1-based number of the line being read when the error occurred
        line: u64,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl ScanError {
    /// True if the resource never opened
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, ScanError::ResourceUnavailable { .. })
    }

    /// True if the error occurred after a successful open
    pub fn is_read_failure(&self) -> bool {
        matches!(self, ScanError::ReadFailure { .. })
    }
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
