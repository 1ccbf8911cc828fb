//! Record decoder for rowstream
//!
//! Converts the tokens of one line into a typed `Record`, tolerating bad
//! fields and ragged lines.
//!
//! # Design Principles
//!
//! - Best-effort decode, never a hard failure for one line
//! - Failed fields stay visible as `FieldValue::Failed`
//! - Every problem goes to the injected `DiagnosticSink`

mod convert;
mod errors;
mod line;
mod record;
mod value;

pub use convert::{convert, parse_date, parse_int};
pub use errors::{ConversionError, DecodeError};
pub use line::{decode_line, decode_tokens, split_line, DecodeMode};
pub use record::Record;
pub use value::{FieldValue, Value};

pub(crate) use line::decode;
