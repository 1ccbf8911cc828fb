//! Decoded field values

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::schema::FieldType;

/// A successfully converted field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Int(_) => FieldType::Int,
            Value::Text(_) => FieldType::Text,
            Value::Date(_) => FieldType::Date,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
            Value::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Text(v) => serializer.serialize_str(v),
            Value::Date(v) => serializer.collect_str(&v.format("%Y-%m-%d")),
        }
    }
}

/// One positional slot of a record.
///
/// A field whose text could not be converted keeps its raw text and the
/// cause, and is never presented as its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Converted(Value),
    Failed { raw: String, cause: String },
}

impl FieldValue {
    /// The converted value, if conversion succeeded
    pub fn value(&self) -> Option<&Value> {
        match self {
            FieldValue::Converted(v) => Some(v),
            FieldValue::Failed { .. } => None,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, FieldValue::Converted(_))
    }
}

/// Renders the converted value, or the raw text of a failed field.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Converted(v) => write!(f, "{}", v),
            FieldValue::Failed { raw, .. } => f.write_str(raw),
        }
    }
}
