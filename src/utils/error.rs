//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Structural problems with the log file itself
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid magic in file header")]
    InvalidMagic,

    #[error("Failed to read header")]
    MissingHeader,

    #[error("Unexpected EOF while reading packet length")]
    TruncatedLength,

    #[error("Unexpected EOF while reading packet")]
    TruncatedPacket,
}

/// Errors that can occur while reading frames from a log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to decode message: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// True for magic, header and truncation failures
    pub fn is_format_error(&self) -> bool {
        matches!(self, ParseError::Format(_))
    }
}

/// Counter vectors that cannot be summed together
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("Counter vector length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Cannot merge samples of size {expected} and {found}")]
    KeyMismatch { expected: i32, found: i32 },

    #[error("Size {size}: target has {expected} counters, sample has {found}")]
    TargetLength {
        size: i32,
        expected: usize,
        found: usize,
    },

    #[error("Size {size}: expected {expected} pirates, sample has {found}")]
    PirateCount {
        size: i32,
        expected: usize,
        found: usize,
    },

    #[error("Size {size}: pirate {pirate} has {expected} counters, sample has {found}")]
    PirateLength {
        size: i32,
        pirate: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
