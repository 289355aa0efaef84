use std::path::PathBuf;

use plume_core::MaskError;
use thiserror::Error;

/// Result alias used throughout the CLI crates.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line tools.
#[derive(Debug, Error)]
pub enum CliError {
    /// The given path does not exist or is not a regular file.
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    /// The input file does not exist.
    #[error("input file not found: {0}")]
    NotFound(PathBuf),
    /// The file could not be decoded as UTF-8.
    #[error("could not decode {0} as UTF-8")]
    Encoding(PathBuf),
    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Masking failure from the typographic pipeline.
    #[error(transparent)]
    Mask(#[from] MaskError),
}
