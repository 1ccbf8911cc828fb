//! Occurrence counting over a decoded stream

use std::collections::HashMap;

use crate::decoder::{DecodeError, Record};
use crate::observability::{log_event, DiagnosticSink, Event};
use crate::reader::{ReadResult, RecordFile};

/// Field counted by `count_violations`
pub const VEHICLE_MAKE: &str = "Vehicle_Make";

/// Counts how often each value of `field` occurs.
///
/// Pulls every item of the stream. A null marker or a record without the
/// field is reported as a field access failure and skipped. Keys are the
/// field's text rendering, so a field that failed conversion is counted
/// under its raw text.
///
/// # Errors
///
/// Source failures from the stream are returned as-is.
pub fn count_by_field<I, S>(records: I, field: &str, sink: &S) -> ReadResult<HashMap<String, usize>>
where
    I: IntoIterator<Item = ReadResult<Option<Record>>>,
    S: DiagnosticSink + ?Sized,
{
    let mut counts: HashMap<String, usize> = HashMap::new();

    for (index, item) in records.into_iter().enumerate() {
        let line = index as u64 + 1;

        let access_failure = |cause: &str| DecodeError::FieldAccess {
            line,
            field: field.to_string(),
            cause: cause.to_string(),
        };

        let Some(record) = item? else {
            sink.report(&access_failure("no record decoded"));
            continue;
        };

        match record.get(field) {
            Some(value) => *counts.entry(value.to_string()).or_insert(0) += 1,
            None => sink.report(&access_failure("record has no such field")),
        }
    }

    log_event(
        Event::CountComplete,
        &[
            ("distinct", counts.len().to_string()),
            ("field", field.to_string()),
        ],
    );

    Ok(counts)
}

/// Counts violations per vehicle make in a parking-violations file.
pub fn count_violations<S: DiagnosticSink>(
    file: &RecordFile,
    sink: S,
) -> ReadResult<HashMap<String, usize>> {
    let records = file.records(&sink)?;
    count_by_field(records, VEHICLE_MAKE, &sink)
}
