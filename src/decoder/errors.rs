//! Decode diagnostics
//!
//! Error codes:
//! - ROW_FIELD_CONVERSION_FAILED: one field kept its raw text
//! - ROW_RECORD_ASSEMBLY_FAILED: value count != schema arity, line dropped
//! - ROW_RECORD_REJECTED: strict mode dropped a partially converted line
//! - ROW_FIELD_ACCESS_FAILED: a consumer could not read a field
//!
//! None of these stop a stream. They are delivered to a `DiagnosticSink`
//! and the stream moves on to the next line.

use std::num::ParseIntError;

use thiserror::Error;

use crate::observability::Event;
use crate::schema::FieldType;

/// Why a single token could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("empty value")]
    Empty,

    #[error("invalid integer: {0}")]
    InvalidInt(#[from] ParseIntError),

    #[error("unrecognized date")]
    UnrecognizedDate,
}

/// A per-line problem reported while decoding or consuming a stream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("line {line}: field '{field}' expected {expected}, got '{raw}': {cause}")]
    FieldConversion {
        line: u64,
        field: String,
        expected: FieldType,
        raw: String,
        cause: String,
    },

    #[error("line {line}: expected {expected} values, found {actual}")]
    RecordAssembly {
        line: u64,
        expected: usize,
        actual: usize,
        values: Vec<String>,
        fields: Vec<String>,
    },

    #[error("line {line}: record rejected, unconverted fields: {}", .fields.join(", "))]
    RecordRejected { line: u64, fields: Vec<String> },

    #[error("line {line}: cannot read field '{field}': {cause}")]
    FieldAccess {
        line: u64,
        field: String,
        cause: String,
    },
}

impl DecodeError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::FieldConversion { .. } => "ROW_FIELD_CONVERSION_FAILED",
            DecodeError::RecordAssembly { .. } => "ROW_RECORD_ASSEMBLY_FAILED",
            DecodeError::RecordRejected { .. } => "ROW_RECORD_REJECTED",
            DecodeError::FieldAccess { .. } => "ROW_FIELD_ACCESS_FAILED",
        }
    }

    /// Event this diagnostic is logged as
    pub fn event(&self) -> Event {
        match self {
            DecodeError::FieldConversion { .. } => Event::FieldConversionFailed,
            DecodeError::RecordAssembly { .. } => Event::RecordAssemblyFailed,
            DecodeError::RecordRejected { .. } => Event::RecordRejected,
            DecodeError::FieldAccess { .. } => Event::FieldAccessFailed,
        }
    }

    /// 1-based data line the problem was found on
    pub fn line(&self) -> u64 {
        match self {
            DecodeError::FieldConversion { line, .. }
            | DecodeError::RecordAssembly { line, .. }
            | DecodeError::RecordRejected { line, .. }
            | DecodeError::FieldAccess { line, .. } => *line,
        }
    }

    /// Structured key/value pairs for the log line
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("code", self.code().to_string()),
            ("line", self.line().to_string()),
        ];

        match self {
            DecodeError::FieldConversion {
                field,
                expected,
                raw,
                cause,
                ..
            } => {
                fields.push(("field", field.clone()));
                fields.push(("expected", expected.to_string()));
                fields.push(("raw", raw.clone()));
                fields.push(("cause", cause.clone()));
            }
            DecodeError::RecordAssembly {
                expected,
                actual,
                values,
                fields: names,
                ..
            } => {
                fields.push(("cause", format!("expected {} values, found {}", expected, actual)));
                fields.push(("values", values.join(",")));
                fields.push(("fields", names.join(",")));
            }
            DecodeError::RecordRejected { fields: names, .. } => {
                fields.push(("fields", names.join(",")));
            }
            DecodeError::FieldAccess { field, cause, .. } => {
                fields.push(("field", field.clone()));
                fields.push(("cause", cause.clone()));
            }
        }

        fields
    }
}
