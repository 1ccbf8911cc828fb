//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero status.

use std::fmt;
use std::io;

use crate::reader::ReadError;
use crate::schema::SchemaError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Mapping file unreadable or invalid
    MappingError,
    /// Input file could not be opened or read
    InputError,
    /// Result could not be written
    OutputError,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MappingError => "ROW_CLI_MAPPING_ERROR",
            Self::InputError => "ROW_CLI_INPUT_ERROR",
            Self::OutputError => "ROW_CLI_OUTPUT_ERROR",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn mapping_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::MappingError, msg)
    }

    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InputError, msg)
    }

    pub fn output_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::OutputError, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::mapping_error(format!("[{}] {}", e.code(), e))
    }
}

impl From<ReadError> for CliError {
    fn from(e: ReadError) -> Self {
        Self::input_error(format!("[{}] {}", e.code(), e))
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::output_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::output_error(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code() {
        let err = CliError::input_error("missing header");
        assert_eq!(err.to_string(), "ROW_CLI_INPUT_ERROR: missing header");
    }

    #[test]
    fn test_read_error_keeps_inner_code() {
        let err: CliError = ReadError::MissingHeader.into();
        assert_eq!(err.code(), CliErrorCode::InputError);
        assert!(err.message().contains("ROW_SOURCE_MISSING_HEADER"));
    }

    #[test]
    fn test_schema_error_is_mapping_error() {
        let err: CliError = SchemaError::malformed_mapping("m.json", "bad").into();
        assert_eq!(err.code(), CliErrorCode::MappingError);
    }
}
