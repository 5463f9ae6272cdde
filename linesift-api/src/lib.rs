//! Predicate-driven line scanning
//!
//! This crate provides the public interface for linesift: feed it a
//! [`Source`] (a file path, in-memory text, or any reader) and a
//! [`Predicate`], and [`scan`] hands back a lazy iterator over the lines
//! that match, in original order. The underlying handle is owned by the
//! iterator and released exactly once — on exhaustion, on a read error,
//! or when the consumer simply stops pulling and drops it.
//!
//! ```
//! use linesift_api::{scan, Source, Substring};
//!
//! let source = Source::from_text("apple\nbanana\ncherry");
//! let matched: Vec<String> = scan(source, Substring::new("an"))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(matched, vec!["banana"]);
//! ```
//!
//! Scanning never prints or buffers ahead: each pull reads one line from
//! the resource, so arbitrarily large inputs are scanned in constant
//! memory. Errors come in exactly two kinds — see [`ScanError`].

#![warn(missing_docs)]

pub mod predicate;

use std::path::Path;

// Re-export the resource layer callers interact with.
pub use linesift_core::{Lines, Result, ScanError, Source};
pub use predicate::{Pattern, Predicate, Substring};

/// Lazy iterator over the matching lines of a scan
///
/// Produced by [`scan`]. Yields `Ok(line)` for each line satisfying the
/// predicate, in original order. A mid-scan read error is yielded once as
/// `Err(`[`ScanError::ReadFailure`]`)`, after which the iterator is fused;
/// the resource handle has already been released by that point.
pub struct Matches<P: Predicate> {
    lines: Lines,
    predicate: P,
}

impl<P: Predicate> Matches<P> {
    /// Number of lines read from the source so far (matching or not)
    pub fn lines_read(&self) -> u64 {
        self.lines.line_number()
    }
}

impl<P: Predicate> std::fmt::Debug for Matches<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matches").field("lines", &self.lines).finish()
    }
}

impl<P: Predicate> Iterator for Matches<P> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.lines.by_ref() {
            match item {
                Ok(line) => {
                    if self.predicate.matches(&line) {
                        return Some(Ok(line));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

impl<P: Predicate> std::iter::FusedIterator for Matches<P> {}

/// Scan a source for lines matching a predicate
///
/// Opens the resource immediately: a file that cannot be opened fails here
/// with [`ScanError::ResourceUnavailable`], before any line is read. The
/// returned [`Matches`] owns the handle and reads lazily as the caller
/// pulls; stopping early and dropping it releases the handle.
pub fn scan<P: Predicate>(source: Source, predicate: P) -> Result<Matches<P>> {
    let lines = source.open()?;
    Ok(Matches { lines, predicate })
}

/// Scan a file for lines matching a predicate
pub fn scan_file<P: AsRef<Path>, Q: Predicate>(path: P, predicate: Q) -> Result<Matches<Q>> {
    scan(Source::from_file(path.as_ref().to_path_buf()), predicate)
}

/// Scan in-memory text for lines matching a predicate
pub fn scan_text<S: Into<String>, Q: Predicate>(text: S, predicate: Q) -> Result<Matches<Q>> {
    scan(Source::from_text(text), predicate)
}
