#![deny(missing_docs)]
//! Shared plumbing for the plume command-line tools: error types, whole-file
//! text I/O with atomic writes, and a line-oriented diff preview.

/// Line-oriented diff preview.
pub mod diff;
/// CLI error types.
pub mod error;
/// Whole-file text reading and atomic writing.
pub mod io;

pub use diff::unified_diff;
pub use error::{CliError, Result};
pub use io::{TextEncoding, read_text_utf8, read_text_with_fallback, write_backup, write_text_atomic};
