//! Grid configuration
//!
//! The inbound surface of the component: which record to start from, which
//! entity type and parent field to follow, and which fields to show. Loaded
//! from TOML and normalized once before first use.

use std::path::Path;

use hiercore::link::DeepLinker;
use hiercore::tree::DEFAULT_PARENT_FIELD;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::providers::HierarchyQuery;

/// Default grid title
pub const DEFAULT_TITLE: &str = "Record Hierarchy";

// Default value functions for serde
fn default_parent_field() -> String {
    DEFAULT_PARENT_FIELD.to_string()
}
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Requested fields, either as a list or one comma-delimited string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldList {
    List(Vec<String>),
    Delimited(String),
}

impl FieldList {
    /// Field names in order; delimited segments are trimmed and empty ones dropped
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::List(fields) => fields.clone(),
            Self::Delimited(s) => s
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// An empty delimited string counts as "not configured"
    fn is_unset(&self) -> bool {
        matches!(self, Self::Delimited(s) if s.trim().is_empty())
    }
}

impl From<&str> for FieldList {
    fn from(s: &str) -> Self {
        Self::Delimited(s.to_string())
    }
}

impl From<Vec<String>> for FieldList {
    fn from(fields: Vec<String>) -> Self {
        Self::List(fields)
    }
}

/// Component configuration, as written by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Identifier of the record the hierarchy is opened from
    #[serde(default)]
    pub record_id: Option<String>,
    /// Entity type API name (`Account`, `Custom__c`)
    #[serde(default)]
    pub object_api_name: Option<String>,
    #[serde(default = "default_parent_field")]
    pub parent_field_api_name: String,
    /// Display-only title
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub field_list: Option<FieldList>,
    /// Origin prepended to record ids to build deep links
    #[serde(default)]
    pub link_origin: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            record_id: None,
            object_api_name: None,
            parent_field_api_name: default_parent_field(),
            title: default_title(),
            field_list: None,
            link_origin: String::new(),
        }
    }
}

impl GridConfig {
    /// Config for one record of one entity type, everything else defaulted
    #[must_use]
    pub fn for_record(object_api_name: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            record_id: Some(record_id.into()),
            object_api_name: Some(object_api_name.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<FieldList>) -> Self {
        self.field_list = Some(fields.into());
        self
    }

    #[must_use]
    pub fn with_parent_field(mut self, parent_field: impl Into<String>) -> Self {
        self.parent_field_api_name = parent_field.into();
        self
    }

    #[must_use]
    pub fn with_link_origin(mut self, origin: impl Into<String>) -> Self {
        self.link_origin = origin.into();
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded grid config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Effective field list: defaulted when unset, parent field always included
    #[must_use]
    pub fn effective_fields(&self) -> Vec<String> {
        let mut fields = match &self.field_list {
            Some(list) if !list.is_unset() => list.to_vec(),
            _ => vec!["Name".to_string(), self.parent_field_api_name.clone()],
        };
        if !fields.contains(&self.parent_field_api_name) {
            fields.push(self.parent_field_api_name.clone());
        }
        fields
    }

    /// Validate and normalize into the form the component runs on
    pub fn normalize(&self) -> Result<EffectiveConfig> {
        let record_id = required(self.record_id.as_deref(), "record_id")?;
        let object_api_name = required(self.object_api_name.as_deref(), "object_api_name")?;
        let parent_field = required(Some(self.parent_field_api_name.as_str()), "parent_field_api_name")?;

        Ok(EffectiveConfig {
            record_id,
            object_api_name,
            parent_field,
            title: self.title.clone(),
            fields: self.effective_fields(),
            link_origin: self.link_origin.clone(),
        })
    }
}

fn required(value: Option<&str>, name: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::Config(format!("{name} must be set"))),
    }
}

/// Normalized configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    pub record_id: String,
    pub object_api_name: String,
    pub parent_field: String,
    pub title: String,
    /// Requested fields in order, parent field included
    pub fields: Vec<String>,
    pub link_origin: String,
}

impl EffectiveConfig {
    /// Record fetch request for this configuration
    #[must_use]
    pub fn query(&self) -> HierarchyQuery {
        HierarchyQuery {
            object_name: self.object_api_name.clone(),
            record_id: self.record_id.clone(),
            fields: self.fields.clone(),
            parent_field: self.parent_field.clone(),
        }
    }

    #[must_use]
    pub fn linker(&self) -> DeepLinker {
        DeepLinker::new(self.link_origin.clone())
    }
}
