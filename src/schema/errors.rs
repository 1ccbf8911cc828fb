//! Schema error types
//!
//! Error codes:
//! - ROW_SCHEMA_EMPTY_HEADER
//! - ROW_SCHEMA_UNMAPPED_FIELD
//! - ROW_SCHEMA_DUPLICATE_FIELD
//! - ROW_SCHEMA_MALFORMED_MAPPING
//!
//! All schema errors surface when a stream is opened, before any data
//! line is read.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("header line declares no fields")]
    EmptyHeader,

    #[error("header field '{field}' has no declared type")]
    UnmappedField { field: String },

    #[error("header field '{field}' appears more than once")]
    DuplicateField { field: String },

    #[error("malformed type mapping '{source_name}': {reason}")]
    MalformedMapping { source_name: String, reason: String },
}

impl SchemaError {
    pub fn unmapped(field: impl Into<String>) -> Self {
        SchemaError::UnmappedField {
            field: field.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>) -> Self {
        SchemaError::DuplicateField {
            field: field.into(),
        }
    }

    pub fn malformed_mapping(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::MalformedMapping {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::EmptyHeader => "ROW_SCHEMA_EMPTY_HEADER",
            SchemaError::UnmappedField { .. } => "ROW_SCHEMA_UNMAPPED_FIELD",
            SchemaError::DuplicateField { .. } => "ROW_SCHEMA_DUPLICATE_FIELD",
            SchemaError::MalformedMapping { .. } => "ROW_SCHEMA_MALFORMED_MAPPING",
        }
    }
}
