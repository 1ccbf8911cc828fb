//! Streaming record reader for rowstream
//!
//! Couples a line source with the decoder and exposes the result as an
//! `Iterator` of `ReadResult<Option<Record>>`.
//!
//! # Design Principles
//!
//! - One line read per item pulled, no read-ahead
//! - Output order is input order
//! - Malformed lines never end the stream; source failures do
//! - The file handle lives exactly as long as the reader

mod errors;
mod file;
mod source;
mod stream;

pub use errors::{ReadError, ReadResult};
pub use file::RecordFile;
pub use source::{decode_latin1, LineSource};
pub use stream::RecordReader;
