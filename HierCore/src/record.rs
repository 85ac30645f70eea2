//! Raw records as returned by a hierarchy fetch
//!
//! A record is an ordered JSON object: field name to scalar value, or to a
//! nested object for a traversed reference (`{"Parent": {"Name": "Acme"}}`).

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Field holding the unique record identifier.
pub const ID_FIELD: &str = "Id";
/// Field holding the record's display name.
pub const NAME_FIELD: &str = "Name";

/// One fetched entity instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter, mostly for tests and in-memory stores
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// The record's identifier as a lookup key, if it has a usable one
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.key(ID_FIELD)
    }

    /// Read `field` as a lookup key (see [`value_key`])
    #[must_use]
    pub fn key(&self, field: &str) -> Option<String> {
        self.0.get(field).and_then(value_key)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Read `record[object][field]` through a nested reference object
    #[must_use]
    pub fn get_nested(&self, object: &str, field: &str) -> Option<&Value> {
        self.0.get(object)?.as_object()?.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Parse a JSON array of record objects
    pub fn parse_list(json: &str) -> Result<Vec<Record>> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(map) => Ok(Record(map)),
                other => Err(Error::InvalidFormat(format!(
                    "record {index} is not a JSON object: {other}"
                ))),
            })
            .collect()
    }

    /// Read a JSON array of record objects from a file
    pub fn read_list<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_list(&content)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Whether a value counts as "present" when deciding links and parents.
///
/// `null`, `false`, `0`, and the empty string are empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render an identifier-like value as a lookup key.
///
/// Only truthy strings and numbers are keys.
#[must_use]
pub fn value_key(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_key() {
        assert_eq!(value_key(&json!("001")), Some("001".to_string()));
        assert_eq!(value_key(&json!(42)), Some("42".to_string()));
        assert_eq!(value_key(&json!("")), None);
        assert_eq!(value_key(&json!(0)), None);
        assert_eq!(value_key(&json!(null)), None);
        assert_eq!(value_key(&json!({"Id": "1"})), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!("A")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&Value::Null));
    }

    #[test]
    fn test_nested_lookup() {
        let record = Record::new()
            .with("Id", "2")
            .with("Parent", json!({"Name": "Acme"}));
        assert_eq!(record.get_nested("Parent", "Name"), Some(&json!("Acme")));
        assert_eq!(record.get_nested("Parent", "Missing"), None);
        assert_eq!(record.get_nested("Owner", "Name"), None);
    }

    #[test]
    fn test_parse_list_rejects_scalars() {
        let records = Record::parse_list(r#"[{"Id": "1"}, {"Id": "2", "ParentId": "1"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].key("ParentId"), Some("1".to_string()));

        let err = Record::parse_list(r#"[{"Id": "1"}, 7]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_list_preserves_field_order() {
        let records = Record::parse_list(r#"[{"Name": "A", "Id": "1", "ParentId": null}]"#).unwrap();
        let keys: Vec<&str> = records[0].fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Id", "ParentId"]);
    }
}
