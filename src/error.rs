//! Error types for RIP decoding and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RipError.
pub type Result<T> = std::result::Result<T, RipError>;

/// Main error type for RIP conversion operations.
#[derive(Error, Debug)]
pub enum RipError {
    /// File signature did not match the RIP magic constant.
    #[error("unrecognized file signature {found:#010x}, expected {expected:#010x}")]
    UnsupportedFormat { found: u32, expected: u32 },

    /// Short or malformed read while decoding a RIP stream.
    #[error("decode error: {0}")]
    Decode(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested export format is not supported.
    #[error("unsupported export format: {0}")]
    UnsupportedExportFormat(String),

    /// Directory scan produced no RIP files.
    #[error("no .rip files found in {0}")]
    NoInputFiles(PathBuf),

    /// Input or output path selection is missing or invalid.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}
