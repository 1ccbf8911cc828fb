//! Record type builder for rowstream
//!
//! A schema is the ordered list of (field identifier, declared type) pairs
//! derived once per stream from the header line.
//!
//! # Design Principles
//!
//! - Field order follows the header
//! - Types come from an explicit mapping, never from the data
//! - Every header field must resolve to a type when the stream opens

mod builder;
mod errors;
mod mapping;
mod types;

pub use builder::{build_schema, normalize_field_name};
pub use errors::{SchemaError, SchemaResult};
pub use mapping::TypeMapping;
pub use types::{FieldDef, FieldType, Schema};
