//! Decoded record

use std::sync::Arc;

use chrono::NaiveDate;

use super::value::{FieldValue, Value};
use crate::schema::Schema;

/// One decoded data line.
///
/// A record always carries exactly one value per schema field and is
/// immutable once built. Records compare equal when their schemas and
/// values are equal, whichever line they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<FieldValue>,
}

impl Record {
    /// Builds a record, or returns `None` when the value count does not
    /// match the schema arity.
    pub fn assemble(schema: Arc<Schema>, values: Vec<FieldValue>) -> Option<Self> {
        if values.len() != schema.arity() {
            return None;
        }
        Some(Self { schema, values })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Field slot by name, converted or not
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.schema.position(field).map(|i| &self.values[i])
    }

    /// Converted value by name
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.get(field).and_then(FieldValue::value)
    }

    pub fn int(&self, field: &str) -> Option<i64> {
        self.value(field).and_then(Value::as_int)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.value(field).and_then(Value::as_text)
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        self.value(field).and_then(Value::as_date)
    }

    /// (field name, slot) pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name.as_str())
            .zip(self.values.iter())
    }

    /// Names of fields that kept their raw text
    pub fn failed_fields(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, v)| !v.is_converted())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_fully_converted(&self) -> bool {
        self.values.iter().all(FieldValue::is_converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;

    fn schema() -> Arc<Schema> {
        Arc::new(Schema::new(vec![
            FieldDef::int("id"),
            FieldDef::text("name"),
            FieldDef::date("when"),
        ]))
    }

    fn values() -> Vec<FieldValue> {
        vec![
            FieldValue::Converted(Value::Int(1234567)),
            FieldValue::Converted(Value::Text("ABC123".into())),
            FieldValue::Converted(Value::Date(NaiveDate::from_ymd_opt(2023, 5, 15).unwrap())),
        ]
    }

    #[test]
    fn test_assemble_and_access_by_name() {
        let record = Record::assemble(schema(), values()).unwrap();
        assert_eq!(record.int("id"), Some(1234567));
        assert_eq!(record.text("name"), Some("ABC123"));
        assert_eq!(record.date("when"), NaiveDate::from_ymd_opt(2023, 5, 15));
        assert!(record.get("missing").is_none());
        assert!(record.is_fully_converted());
    }

    #[test]
    fn test_assemble_rejects_wrong_arity() {
        let mut short = values();
        short.pop();
        assert!(Record::assemble(schema(), short).is_none());

        let mut long = values();
        long.push(FieldValue::Converted(Value::Text("extra".into())));
        assert!(Record::assemble(schema(), long).is_none());
    }

    #[test]
    fn test_typed_accessor_does_not_expose_failed_field() {
        let mut vals = values();
        vals[0] = FieldValue::Failed {
            raw: "12X".into(),
            cause: "invalid integer".into(),
        };
        let record = Record::assemble(schema(), vals).unwrap();

        assert_eq!(record.int("id"), None);
        assert_eq!(record.get("id").unwrap().to_string(), "12X");
        assert_eq!(record.failed_fields(), vec!["id"]);
        assert!(!record.is_fully_converted());
    }

    #[test]
    fn test_iter_in_schema_order() {
        let record = Record::assemble(schema(), values()).unwrap();
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["id", "name", "when"]);
    }
}
