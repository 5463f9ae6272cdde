//! Resource and iteration layer for linesift
//!
//! This crate owns the low-level pieces of line scanning: the [`Source`]
//! input abstraction, the lazy single-pass [`Lines`] iterator that holds
//! the open handle, and the [`ScanError`] type. The public matching API
//! lives in `linesift-api`.

#![warn(missing_docs)]

pub mod error;
pub mod lines;
pub mod source;

pub use error::{Result, ScanError};
pub use lines::Lines;
pub use source::Source;
