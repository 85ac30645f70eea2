//! Object field metadata
//!
//! Mirrors the object-info shape returned by a metadata lookup: an object
//! API name plus a map of field API name to [`FieldDescriptor`]. Field order
//! is preserved as delivered.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

/// Data type of a field.
///
/// Only `Reference` changes column or tree behaviour; the rest are carried
/// for display and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldDataType {
    Reference,
    #[default]
    String,
    TextArea,
    Boolean,
    Int,
    Double,
    Currency,
    Percent,
    Date,
    DateTime,
    Picklist,
    Email,
    Phone,
    Url,
    Id,
    Other(String),
}

impl FieldDataType {
    /// Parse a data type name, ignoring case (`Reference`, `reference`, ...)
    #[must_use]
    pub fn from_name(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Self::Reference,
            "string" => Self::String,
            "textarea" => Self::TextArea,
            "boolean" => Self::Boolean,
            "int" => Self::Int,
            "double" => Self::Double,
            "currency" => Self::Currency,
            "percent" => Self::Percent,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "picklist" => Self::Picklist,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "url" => Self::Url,
            "id" => Self::Id,
            _ => Self::Other(s.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reference => "Reference",
            Self::String => "String",
            Self::TextArea => "TextArea",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Double => "Double",
            Self::Currency => "Currency",
            Self::Percent => "Percent",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Picklist => "Picklist",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Url => "Url",
            Self::Id => "Id",
            Self::Other(s) => s,
        }
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference)
    }
}

impl fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldDataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldDataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Metadata for one field of an entity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field API name (`ParentId`, `Custom__c`)
    pub api_name: String,
    /// Human-readable label, used as the column header
    pub label: String,
    pub data_type: FieldDataType,
    /// Relationship name for reference fields (`Parent` for `ParentId`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_name: Option<String>,
    /// Name field of the referenced entity, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_name_field: Option<String>,
    /// Entity types a reference field may point at
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_to: Vec<String>,
    /// Whether this is the entity's name field
    #[serde(default)]
    pub name_field: bool,
}

impl FieldDescriptor {
    /// Scalar field descriptor
    #[must_use]
    pub fn scalar(api_name: &str, label: &str, data_type: FieldDataType) -> Self {
        Self {
            api_name: api_name.to_string(),
            label: label.to_string(),
            data_type,
            ..Default::default()
        }
    }

    /// Reference field descriptor with its relationship name
    #[must_use]
    pub fn reference(api_name: &str, label: &str, relationship_name: &str) -> Self {
        Self {
            api_name: api_name.to_string(),
            label: label.to_string(),
            data_type: FieldDataType::Reference,
            relationship_name: Some(relationship_name.to_string()),
            related_name_field: Some("Name".to_string()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.data_type.is_reference()
    }
}

/// Field metadata for one entity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectInfo {
    pub api_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fields keyed by API name, in delivery order
    #[serde(default)]
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl ObjectInfo {
    #[must_use]
    pub fn new(api_name: &str) -> Self {
        Self {
            api_name: api_name.to_string(),
            ..Default::default()
        }
    }

    /// Add a field, keyed by its API name
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.insert(field.api_name.clone(), field);
        self
    }

    /// Look up a field by exact API name
    #[must_use]
    pub fn field(&self, api_name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(api_name)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load object info from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
