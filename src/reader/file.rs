//! Re-iterable record file
//!
//! A `RecordFile` only remembers where the data is and how to type it.
//! Each call to `records` opens the file again, so the same file can be
//! streamed any number of times while each stream stays single-pass.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::errors::ReadResult;
use super::stream::RecordReader;
use crate::decoder::DecodeMode;
use crate::observability::DiagnosticSink;
use crate::schema::TypeMapping;

#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
    mapping: TypeMapping,
    mode: DecodeMode,
}

impl RecordFile {
    /// A file typed with the parking-violations mapping, decoded leniently.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mapping: TypeMapping::parking_violations(),
            mode: DecodeMode::default(),
        }
    }

    pub fn with_mapping(mut self, mapping: TypeMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }

    /// Opens a fresh stream over the file.
    pub fn records<S: DiagnosticSink>(
        &self,
        sink: S,
    ) -> ReadResult<RecordReader<BufReader<File>, S>> {
        Ok(RecordReader::open(&self.path, &self.mapping, sink)?.with_mode(self.mode))
    }
}
