//! Field-to-type mapping
//!
//! The mapping is external configuration: it is never inferred from data.
//! It is either the built-in parking-violations table or a JSON object
//! loaded from disk:
//!
//! ```json
//! { "Summons_Number": "int", "Plate_ID": "text", "Issue_Date": "date" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::types::FieldType;

/// Mapping from normalized field identifier to declared type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMapping {
    types: BTreeMap<String, FieldType>,
}

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mapping for NYC parking-violation exports.
    pub fn parking_violations() -> Self {
        [
            ("Summons_Number", FieldType::Int),
            ("Plate_ID", FieldType::Text),
            ("Registration_State", FieldType::Text),
            ("Plate_Type", FieldType::Text),
            ("Issue_Date", FieldType::Date),
            ("Violation_Code", FieldType::Int),
            ("Vehicle_Body_Type", FieldType::Text),
            ("Vehicle_Make", FieldType::Text),
            ("Violation_Description", FieldType::Text),
        ]
        .into_iter()
        .collect()
    }

    /// Loads a mapping from a JSON file.
    pub fn load(path: &Path) -> SchemaResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed_mapping(
                path.display().to_string(),
                format!("failed to read file: {}", e),
            )
        })?;

        Self::from_json(&content)
            .map_err(|e| SchemaError::malformed_mapping(path.display().to_string(), e))
    }

    fn from_json(content: &str) -> Result<Self, String> {
        let mapping: TypeMapping =
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;

        if mapping.is_empty() {
            return Err("mapping declares no fields".into());
        }

        Ok(mapping)
    }

    /// Adds or replaces the type of one field.
    pub fn with(mut self, field: impl Into<String>, field_type: FieldType) -> Self {
        self.types.insert(field.into(), field_type);
        self
    }

    pub fn get(&self, field: &str) -> Option<FieldType> {
        self.types.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldType)> for TypeMapping {
    fn from_iter<I: IntoIterator<Item = (K, FieldType)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().map(|(k, t)| (k.into(), t)).collect(),
        }
    }
}
