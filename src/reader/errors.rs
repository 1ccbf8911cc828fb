//! Source access errors
//!
//! Error codes:
//! - ROW_SOURCE_OPEN_FAILED
//! - ROW_SOURCE_READ_FAILED
//! - ROW_SOURCE_MISSING_HEADER
//! - schema codes, passed through
//!
//! Unlike decode diagnostics these are not recoverable: they end the
//! stream and propagate to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for stream operations
pub type ReadResult<T> = Result<T, ReadError>;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read data line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    #[error("input has no header line")]
    MissingHeader,

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ReadError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReadError::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(line: u64, source: io::Error) -> Self {
        ReadError::Read { line, source }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ReadError::Open { .. } => "ROW_SOURCE_OPEN_FAILED",
            ReadError::Read { .. } => "ROW_SOURCE_READ_FAILED",
            ReadError::MissingHeader => "ROW_SOURCE_MISSING_HEADER",
            ReadError::Schema(e) => e.code(),
        }
    }
}
