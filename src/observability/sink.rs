//! Diagnostic sinks
//!
//! The decoder never prints. Every per-line problem is handed to a
//! `DiagnosticSink`, so the run can log it and tests can capture it.

use std::sync::{Arc, Mutex};

use super::logger::Logger;
use crate::decoder::DecodeError;

/// Receiver for per-line diagnostics.
///
/// `report` must not fail or panic; a sink that cannot record a
/// diagnostic drops it.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &DecodeError);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &DecodeError) {
        (**self).report(diagnostic)
    }
}

/// Writes each diagnostic as one structured log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &DecodeError) {
        let owned = diagnostic.log_fields();
        let fields: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let event = diagnostic.event();
        Logger::log(event.severity(), event, &fields);
    }
}

/// Keeps diagnostics in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<DecodeError>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics reported so far, in report order
    pub fn records(&self) -> Vec<DecodeError> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }

    /// Diagnostics with the given code
    pub fn with_code(&self, code: &str) -> Vec<DecodeError> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.code() == code)
            .cloned()
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &DecodeError) {
        self.records.lock().unwrap().push(diagnostic.clone());
    }
}
