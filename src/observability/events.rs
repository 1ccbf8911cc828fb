//! Observable events in a rowstream run
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Stream lifecycle
    /// Header read and schema built
    StreamOpened,
    /// Line source exhausted
    StreamExhausted,
    /// Line source failed mid-stream
    SourceReadFailed,

    // Per-line diagnostics
    /// One field could not be converted to its declared type
    FieldConversionFailed,
    /// Value count did not match schema arity
    RecordAssemblyFailed,
    /// Strict mode dropped a record with unconverted fields
    RecordRejected,

    // Consumers
    /// A consumer could not read a field from a stream item
    FieldAccessFailed,
    /// Field counting finished
    CountComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StreamOpened => "STREAM_OPENED",
            Event::StreamExhausted => "STREAM_EXHAUSTED",
            Event::SourceReadFailed => "SOURCE_READ_FAILED",
            Event::FieldConversionFailed => "FIELD_CONVERSION_FAILED",
            Event::RecordAssemblyFailed => "RECORD_ASSEMBLY_FAILED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::FieldAccessFailed => "FIELD_ACCESS_FAILED",
            Event::CountComplete => "COUNT_COMPLETE",
        }
    }

    /// Default severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StreamOpened | Event::StreamExhausted | Event::CountComplete => Severity::Info,
            Event::SourceReadFailed => Severity::Error,
            Event::FieldConversionFailed
            | Event::RecordAssemblyFailed
            | Event::RecordRejected
            | Event::FieldAccessFailed => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
