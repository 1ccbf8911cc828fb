//! Record type builder
//!
//! Turns a header line into a `Schema` by normalizing each field name and
//! resolving its type through the mapping. Every header field must resolve;
//! an unknown field fails the stream before any data line is decoded.

use std::collections::HashSet;

use super::errors::{SchemaError, SchemaResult};
use super::mapping::TypeMapping;
use super::types::{FieldDef, Schema};

/// Normalizes a header name into a field identifier.
///
/// Surrounding whitespace is trimmed and every internal whitespace
/// character becomes `_`.
pub fn normalize_field_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Builds the schema for a stream from its header line.
pub fn build_schema(header_line: &str, mapping: &TypeMapping) -> SchemaResult<Schema> {
    let header = header_line.trim();
    if header.is_empty() {
        return Err(SchemaError::EmptyHeader);
    }

    let mut seen = HashSet::new();
    let mut fields = Vec::new();

    for raw in header.split(',') {
        let name = normalize_field_name(raw);

        if !seen.insert(name.clone()) {
            return Err(SchemaError::duplicate(name));
        }

        let field_type = mapping
            .get(&name)
            .ok_or_else(|| SchemaError::unmapped(name.as_str()))?;

        fields.push(FieldDef::new(name, field_type));
    }

    Ok(Schema::new(fields))
}
