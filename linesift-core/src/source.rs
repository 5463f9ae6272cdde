//! Input abstraction for line scanning
//!
//! Provides a unified interface over the places a line sequence can come
//! from. Opening a source is the only point at which a handle is acquired;
//! everything after that is owned by the returned [`Lines`] iterator.

use crate::error::{Result, ScanError};
use crate::lines::Lines;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// Unified input abstraction for line sources
pub enum Source {
    /// File path to open and read from
    File(PathBuf),
    /// In-memory text
    Text(String),
    /// Reader stream (for stdin, sockets, test doubles, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => f.debug_tuple("File").field(path).finish(),
            Source::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Source::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Source {
    /// Create a source from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Source::File(path.into())
    }

    /// Create a source from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Source::Text(text.into())
    }

    /// Create a source from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Source::Reader(Box::new(reader))
    }

    /// Acquire the underlying handle and return the lazy line sequence
    ///
    /// For a file source this opens the file here and now; a file that
    /// cannot be opened fails with [`ScanError::ResourceUnavailable`]
    /// before any line is read. Text and reader sources cannot fail to
    /// open. The returned [`Lines`] owns the handle for the duration of
    /// the scan.
    pub fn open(self) -> Result<Lines> {
        let reader: Box<dyn Read + Send> = match self {
            Source::File(path) => {
                let file = File::open(&path)
                    .map_err(|source| ScanError::ResourceUnavailable { path: path.clone(), source })?;
                log::debug!("opened file source {}", path.display());
                Box::new(file)
            }
            Source::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            Source::Reader(reader) => reader,
        };
        Ok(Lines::new(reader))
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::File(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::File(path.to_path_buf())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}
