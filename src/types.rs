//! Core types for tienda-backend

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Scalar value of one table cell, as surfaced in API responses.
///
/// Serialized untagged, so a record renders as a plain JSON object with
/// ordinary JSON scalars for values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

/// One row of the `products` table as an ordered column → value mapping.
///
/// The application enforces no schema: whatever columns the result set
/// carries pass through verbatim, in result-set order, as JSON keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRecord {
    fields: Vec<(String, FieldValue)>,
}

impl ProductRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(columns: usize) -> Self {
        Self {
            fields: Vec::with_capacity(columns),
        }
    }

    /// Append a column. Order of insertion is the order of serialization.
    pub fn push(&mut self, column: impl Into<String>, value: FieldValue) {
        self.fields.push((column.into(), value));
    }

    /// Value of the first column with the given name, if present.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in serialization order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for ProductRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ProductRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_values_serialize_as_json_scalars() {
        let values = vec![
            (FieldValue::Null, "null"),
            (FieldValue::Boolean(true), "true"),
            (FieldValue::Integer(-5), "-5"),
            (FieldValue::Unsigned(u64::MAX), "18446744073709551615"),
            (FieldValue::Float(9.99), "9.99"),
            (FieldValue::Text("pino".to_string()), "\"pino\""),
        ];

        for (value, expected) in values {
            assert_eq!(serde_json::to_string(&value).unwrap(), expected);
        }
    }

    #[test]
    fn record_preserves_column_order() {
        let mut record = ProductRecord::new();
        record.push("id", FieldValue::Integer(1));
        record.push("name", FieldValue::Text("Pine sapling".to_string()));
        record.push("price", FieldValue::Float(9.99));

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":1,"name":"Pine sapling","price":9.99}"#
        );
        assert_eq!(record.columns().collect::<Vec<_>>(), ["id", "name", "price"]);
    }

    #[test]
    fn record_lookup_by_column_name() {
        let record: ProductRecord = [
            ("stock".to_string(), FieldValue::Integer(12)),
            ("imagen".to_string(), FieldValue::Null),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.get("stock"), Some(&FieldValue::Integer(12)));
        assert_eq!(record.get("imagen"), Some(&FieldValue::Null));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
    }
}
