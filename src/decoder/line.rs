//! Single-line decoding
//!
//! 1. Split on `,` (no quoting)
//! 2. Pair tokens with schema fields up to the shorter length
//! 3. Convert each pair; a failure is reported and the raw text kept
//! 4. Assemble; a value count != arity is reported and yields `None`
//!
//! A malformed line never produces an `Err`. It degrades to `None` or to a
//! record carrying `FieldValue::Failed` slots.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::convert::convert;
use super::errors::DecodeError;
use super::record::Record;
use super::value::FieldValue;
use crate::observability::DiagnosticSink;
use crate::schema::Schema;

/// What to do with a line whose fields did not all convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Yield the record with failed fields tagged
    #[default]
    Lenient,
    /// Drop the record and report it as rejected
    Strict,
}

/// Result of decoding one line, with the count the reader's stats need
#[derive(Debug)]
pub(crate) struct DecodedLine {
    pub record: Option<Record>,
    pub field_errors: u64,
}

/// Splits a raw line into tokens.
///
/// Surrounding whitespace of the whole line is stripped; tokens themselves
/// are left untouched.
pub fn split_line(line: &str) -> Vec<&str> {
    line.trim().split(',').collect()
}

/// Decodes a raw text line.
pub fn decode_line<S: DiagnosticSink + ?Sized>(
    schema: &Arc<Schema>,
    line: &str,
    line_number: u64,
    mode: DecodeMode,
    sink: &S,
) -> Option<Record> {
    decode_tokens(schema, &split_line(line), line_number, mode, sink)
}

/// Decodes already-split tokens.
pub fn decode_tokens<S: DiagnosticSink + ?Sized>(
    schema: &Arc<Schema>,
    tokens: &[&str],
    line_number: u64,
    mode: DecodeMode,
    sink: &S,
) -> Option<Record> {
    decode(schema, tokens, line_number, mode, sink).record
}

pub(crate) fn decode<S: DiagnosticSink + ?Sized>(
    schema: &Arc<Schema>,
    tokens: &[&str],
    line_number: u64,
    mode: DecodeMode,
    sink: &S,
) -> DecodedLine {
    let mut field_errors = 0;

    let values: Vec<FieldValue> = schema
        .fields()
        .iter()
        .zip(tokens.iter())
        .map(|(field, raw)| match convert(raw, field.field_type) {
            Ok(value) => FieldValue::Converted(value),
            Err(cause) => {
                field_errors += 1;
                sink.report(&DecodeError::FieldConversion {
                    line: line_number,
                    field: field.name.clone(),
                    expected: field.field_type,
                    raw: (*raw).to_string(),
                    cause: cause.to_string(),
                });
                FieldValue::Failed {
                    raw: (*raw).to_string(),
                    cause: cause.to_string(),
                }
            }
        })
        .collect();

    if tokens.len() != schema.arity() {
        sink.report(&DecodeError::RecordAssembly {
            line: line_number,
            expected: schema.arity(),
            actual: tokens.len(),
            values: tokens.iter().map(|t| (*t).to_string()).collect(),
            fields: schema.field_names().into_iter().map(String::from).collect(),
        });
        return DecodedLine {
            record: None,
            field_errors,
        };
    }

    let record = Record::assemble(Arc::clone(schema), values);

    if mode == DecodeMode::Strict {
        if let Some(failed) = record.as_ref().map(Record::failed_fields) {
            if !failed.is_empty() {
                sink.report(&DecodeError::RecordRejected {
                    line: line_number,
                    fields: failed.into_iter().map(String::from).collect(),
                });
                return DecodedLine {
                    record: None,
                    field_errors,
                };
            }
        }
    }

    DecodedLine {
        record,
        field_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Value;
    use crate::observability::MemorySink;
    use crate::schema::FieldDef;
    use chrono::NaiveDate;

    fn schema() -> Arc<Schema> {
        Arc::new(Schema::new(vec![
            FieldDef::int("id"),
            FieldDef::text("name"),
            FieldDef::date("when"),
        ]))
    }

    #[test]
    fn test_successful_decode() {
        let sink = MemorySink::new();
        let record = decode_tokens(
            &schema(),
            &["1234567", "ABC123", "2023-05-15"],
            1,
            DecodeMode::Lenient,
            &sink,
        )
        .unwrap();

        assert_eq!(record.int("id"), Some(1234567));
        assert_eq!(record.text("name"), Some("ABC123"));
        assert_eq!(record.date("when"), NaiveDate::from_ymd_opt(2023, 5, 15));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_field_error_does_not_stop_remaining_fields() {
        let sink = MemorySink::new();
        let record = decode_tokens(
            &schema(),
            &["ABC", "XYZ789", "2023-05-16"],
            4,
            DecodeMode::Lenient,
            &sink,
        )
        .unwrap();

        assert_eq!(record.int("id"), None);
        assert_eq!(record.get("id").unwrap().to_string(), "ABC");
        assert_eq!(record.text("name"), Some("XYZ789"));
        assert_eq!(record.date("when"), NaiveDate::from_ymd_opt(2023, 5, 16));

        let diagnostics = sink.records();
        assert_eq!(diagnostics.len(), 1);
        match &diagnostics[0] {
            DecodeError::FieldConversion { line, field, raw, .. } => {
                assert_eq!(*line, 4);
                assert_eq!(field, "id");
                assert_eq!(raw, "ABC");
            }
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn test_every_bad_field_reported() {
        let sink = MemorySink::new();
        let record =
            decode_tokens(&schema(), &["x", "y", "z"], 2, DecodeMode::Lenient, &sink).unwrap();

        assert_eq!(record.failed_fields(), vec!["id", "when"]);
        assert_eq!(sink.with_code("ROW_FIELD_CONVERSION_FAILED").len(), 2);
    }

    #[test]
    fn test_short_line_yields_null_marker() {
        let sink = MemorySink::new();
        let record = decode_tokens(&schema(), &["1", "ABC"], 9, DecodeMode::Lenient, &sink);

        assert!(record.is_none());
        let diagnostics = sink.records();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0],
            DecodeError::RecordAssembly {
                line: 9,
                expected: 3,
                actual: 2,
                values: vec!["1".into(), "ABC".into()],
                fields: vec!["id".into(), "name".into(), "when".into()],
            }
        );
    }

    #[test]
    fn test_long_line_yields_null_marker() {
        let sink = MemorySink::new();
        let record = decode_line(
            &schema(),
            "1,ABC,2023-05-15,extra",
            1,
            DecodeMode::Lenient,
            &sink,
        );

        assert!(record.is_none());
        assert_eq!(sink.with_code("ROW_RECORD_ASSEMBLY_FAILED").len(), 1);
    }

    #[test]
    fn test_strict_mode_rejects_partial_record() {
        let sink = MemorySink::new();
        let record = decode_tokens(
            &schema(),
            &["ABC", "XYZ789", "2023-05-16"],
            3,
            DecodeMode::Strict,
            &sink,
        );

        assert!(record.is_none());
        assert_eq!(sink.with_code("ROW_FIELD_CONVERSION_FAILED").len(), 1);
        assert_eq!(
            sink.with_code("ROW_RECORD_REJECTED"),
            vec![DecodeError::RecordRejected {
                line: 3,
                fields: vec!["id".into()],
            }]
        );
    }

    #[test]
    fn test_strict_mode_keeps_clean_record() {
        let sink = MemorySink::new();
        let record = decode_tokens(
            &schema(),
            &["7", "XYZ789", "2023-05-16"],
            3,
            DecodeMode::Strict,
            &sink,
        );
        assert!(record.is_some());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_redecoding_is_idempotent() {
        let sink = MemorySink::new();
        let schema = schema();
        let line = "1234567,ABC123,2023-05-15";
        let first = decode_line(&schema, line, 1, DecodeMode::Lenient, &sink);
        let second = decode_line(&schema, line, 2, DecodeMode::Lenient, &sink);

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_split_line_strips_line_only() {
        assert_eq!(split_line("  a, b ,c\r\n"), vec!["a", " b ", "c"]);
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_text_field_keeps_inner_spacing() {
        let schema = Arc::new(Schema::new(vec![FieldDef::text("desc")]));
        let sink = MemorySink::new();
        let record = decode_line(&schema, "No Parking", 1, DecodeMode::Lenient, &sink).unwrap();
        assert_eq!(record.value("desc"), Some(&Value::Text("No Parking".into())));
    }
}
