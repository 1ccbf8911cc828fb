//! Observability subsystem for rowstream
//!
//! This module provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle and diagnostic events
//! - Diagnostic sinks the decoder reports into
//! - Per-stream counters
//!
//! # Principles
//!
//! 1. Observability never changes decode results
//! 2. Logging never fails the pipeline
//! 3. No background threads
//!
//! # Usage
//!
//! ```ignore
//! use rowstream::observability::{log_event, Event, MemorySink};
//!
//! log_event(Event::StreamOpened, &[("fields", "9".to_string())]);
//!
//! let sink = MemorySink::new();
//! // hand `sink.clone()` to a reader, inspect `sink.records()` afterwards
//! ```

mod events;
mod logger;
mod sink;
mod stats;

pub use events::Event;
pub use logger::{Logger, Severity, LOG_LEVEL_ENV};
pub use sink::{DiagnosticSink, LogSink, MemorySink};
pub use stats::StreamStats;

/// Log an event at its default severity with owned field values
pub fn log_event(event: Event, fields: &[(&'static str, String)]) {
    let borrowed: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    Logger::log(event.severity(), event, &borrowed);
}
