//! Lazy, single-pass line iteration over an owned handle
//!
//! [`Lines`] is the scanner's resource scope: it owns the open handle from
//! the moment [`Source::open`](crate::Source::open) returns it until the
//! scan ends, and releases it exactly once on every exit path — exhaustion,
//! read error, or the consumer dropping the iterator early.

use crate::error::{Result, ScanError};
use std::io::{BufRead, BufReader, Read};

/// Forward-only, pull-based iterator over the lines of a source
///
/// Each call to `next` reads exactly one line, so at most one line is
/// materialized at a time. Lines are yielded in original order with the
/// trailing `\n` or `\r\n` stripped. After yielding a
/// [`ScanError::ReadFailure`] the iterator is fused: the handle has been
/// released and every further call returns `None`.
pub struct Lines {
    reader: Option<BufReader<Box<dyn Read + Send>>>,
    line_number: u64,
}

impl Lines {
    pub(crate) fn new(reader: Box<dyn Read + Send>) -> Self {
        Lines {
            reader: Some(BufReader::new(reader)),
            line_number: 0,
        }
    }

    /// Number of lines read so far
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// True once the handle has been released
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Release the handle; idempotent
    fn close(&mut self) {
        if self.reader.take().is_some() {
            log::debug!("released line source after {} lines", self.line_number);
        }
    }
}

impl std::fmt::Debug for Lines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lines")
            .field("line_number", &self.line_number)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let mut buf = String::new();
        match reader.read_line(&mut buf) {
            Ok(0) => {
                self.close();
                None
            }
            Ok(_) => {
                self.line_number += 1;
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                Some(Ok(buf))
            }
            Err(source) => {
                let line = self.line_number + 1;
                self.close();
                Some(Err(ScanError::ReadFailure { line, source }))
            }
        }
    }
}

impl std::iter::FusedIterator for Lines {}

impl Drop for Lines {
    fn drop(&mut self) {
        self.close();
    }
}
