//! Streaming record reader
//!
//! Pull-based: every `next()` reads exactly one line from the source,
//! decodes it, and yields one item. Nothing is read ahead.
//!
//! - `Ok(Some(record))`: the line decoded
//! - `Ok(None)`: the line was malformed, see the diagnostic sink
//! - `Err(e)`: the source failed; the iterator is exhausted afterwards
//!
//! The reader owns its source. Dropping it releases the file handle,
//! whether or not the stream was read to the end.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;
use std::sync::Arc;

use super::errors::{ReadError, ReadResult};
use super::source::LineSource;
use crate::decoder::{self, split_line, DecodeMode, Record};
use crate::observability::{log_event, DiagnosticSink, Event, LogSink, StreamStats};
use crate::schema::{build_schema, Schema, TypeMapping};

pub struct RecordReader<R, S = LogSink> {
    source: LineSource<R>,
    schema: Arc<Schema>,
    mode: DecodeMode,
    sink: S,
    /// Last data line handed out (1-based, header excluded)
    line_number: u64,
    stats: StreamStats,
    finished: bool,
}

impl<S: DiagnosticSink> RecordReader<BufReader<File>, S> {
    /// Opens a file and builds the schema from its header line.
    ///
    /// # Errors
    ///
    /// - `ROW_SOURCE_OPEN_FAILED` if the file cannot be opened
    /// - `ROW_SOURCE_MISSING_HEADER` if the file is empty
    /// - a schema error if a header field has no declared type
    pub fn open(path: &Path, mapping: &TypeMapping, sink: S) -> ReadResult<Self> {
        let file = File::open(path).map_err(|e| ReadError::open(path, e))?;
        Self::new(BufReader::new(file), mapping, sink)
    }
}

impl<R: BufRead, S: DiagnosticSink> RecordReader<R, S> {
    /// Reads the header line and builds the schema from it.
    pub fn new(reader: R, mapping: &TypeMapping, sink: S) -> ReadResult<Self> {
        let mut source = LineSource::new(reader);
        let header = source
            .read_line()
            .map_err(|e| ReadError::read(0, e))?
            .ok_or(ReadError::MissingHeader)?;

        let schema = build_schema(&header, mapping)?;
        Ok(Self::from_parts(source, Arc::new(schema), sink))
    }

    /// Streams records against a prebuilt schema.
    ///
    /// With `skip_header` the first line is consumed and never decoded.
    pub fn with_schema(
        reader: R,
        schema: impl Into<Arc<Schema>>,
        skip_header: bool,
        sink: S,
    ) -> ReadResult<Self> {
        let mut source = LineSource::new(reader);
        if skip_header {
            source.read_line().map_err(|e| ReadError::read(0, e))?;
        }
        Ok(Self::from_parts(source, schema.into(), sink))
    }

    fn from_parts(source: LineSource<R>, schema: Arc<Schema>, sink: S) -> Self {
        log_event(
            Event::StreamOpened,
            &[
                ("arity", schema.arity().to_string()),
                ("fields", schema.field_names().join(",")),
            ],
        );

        Self {
            source,
            schema,
            mode: DecodeMode::default(),
            sink,
            line_number: 0,
            stats: StreamStats::new(),
            finished: false,
        }
    }

    /// Sets how partially converted lines are handled.
    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Counters for the lines pulled so far
    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// Physical lines read from the source, header included
    pub fn lines_consumed(&self) -> u64 {
        self.source.lines_consumed()
    }

    fn finish(&mut self) {
        self.finished = true;
        log_event(Event::StreamExhausted, &self.stats.log_fields());
    }
}

impl<R: BufRead, S: DiagnosticSink> Iterator for RecordReader<R, S> {
    type Item = ReadResult<Option<Record>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let line_number = self.line_number + 1;

        match self.source.read_line() {
            Ok(Some(line)) => {
                self.line_number = line_number;
                self.stats.lines_read += 1;

                let decoded = decoder::decode(
                    &self.schema,
                    &split_line(&line),
                    line_number,
                    self.mode,
                    &self.sink,
                );

                self.stats.field_errors += decoded.field_errors;
                match &decoded.record {
                    Some(record) => {
                        self.stats.records += 1;
                        if !record.is_fully_converted() {
                            self.stats.partial_records += 1;
                        }
                    }
                    None => self.stats.null_markers += 1,
                }

                Some(Ok(decoded.record))
            }
            Ok(None) => {
                self.finish();
                None
            }
            Err(e) => {
                self.finished = true;
                log_event(
                    Event::SourceReadFailed,
                    &[("line", line_number.to_string()), ("cause", e.to_string())],
                );
                Some(Err(ReadError::read(line_number, e)))
            }
        }
    }
}

impl<R: BufRead, S: DiagnosticSink> FusedIterator for RecordReader<R, S> {}
