//! rowstream - lazy, typed, error-tolerant decoding of comma-delimited files
//!
//! A header line plus a fixed field-to-type mapping gives a `Schema`; a
//! `RecordReader` then pulls one line at a time from the source and yields
//! one `Option<Record>` per data line. Bad fields and ragged lines are
//! reported to a `DiagnosticSink` and never end the stream.
//!
//! ```ignore
//! use rowstream::aggregate::count_violations;
//! use rowstream::observability::LogSink;
//! use rowstream::reader::RecordFile;
//!
//! let file = RecordFile::new("parking_violations.csv");
//! let by_make = count_violations(&file, LogSink)?;
//! ```

pub mod aggregate;
pub mod cli;
pub mod decoder;
pub mod observability;
pub mod reader;
pub mod schema;

pub use decoder::{DecodeMode, FieldValue, Record, Value};
pub use reader::{ReadError, ReadResult, RecordFile, RecordReader};
pub use schema::{build_schema, FieldType, Schema, TypeMapping};
