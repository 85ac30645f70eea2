//! Column layout types produced by the column mapper

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::Error;
use crate::synthetic::{CURRENT_RECORD_ALT_TEXT, CURRENT_RECORD_FIELD, LINK_TARGET};

/// Reference to a record field by name, as the grid expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRef {
    pub field_name: String,
}

impl FieldRef {
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

/// Hyperlink rendering for a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlAttributes {
    /// Field holding the visible link text
    pub label: FieldRef,
    /// Field holding the link target
    pub url: FieldRef,
    pub target: String,
}

/// How a column renders its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "typeAttributes", rename_all = "lowercase")]
pub enum ColumnKind {
    /// Plain value
    Text,
    /// Hyperlink built from synthetic link fields
    Url(UrlAttributes),
}

/// Which side of the cell the leading icon sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

/// Leading status icon, read per row from [`CURRENT_RECORD_FIELD`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadingIcon {
    pub icon_name: FieldRef,
    pub icon_position: IconPosition,
    pub icon_alternative_text: String,
}

impl Default for LeadingIcon {
    fn default() -> Self {
        Self {
            icon_name: FieldRef::new(CURRENT_RECORD_FIELD),
            icon_position: IconPosition::Left,
            icon_alternative_text: CURRENT_RECORD_ALT_TEXT.to_string(),
        }
    }
}

/// One grid column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub label: String,
    /// Record key rendered in this column
    pub field_name: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
    /// Only ever set on the first requested column
    #[serde(rename = "cellAttributes", skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<LeadingIcon>,
}

impl ColumnSpec {
    #[must_use]
    pub fn text(label: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_name: field_name.into(),
            kind: ColumnKind::Text,
            leading_icon: None,
        }
    }

    /// Turn this column into a hyperlink.
    ///
    /// `field_name` becomes `value_field`; link text and target come from
    /// `label_field` and `url_field`.
    #[must_use]
    pub fn into_link(mut self, value_field: String, label_field: String, url_field: String) -> Self {
        self.field_name = value_field;
        self.kind = ColumnKind::Url(UrlAttributes {
            label: FieldRef::new(label_field),
            url: FieldRef::new(url_field),
            target: LINK_TARGET.to_string(),
        });
        self
    }

    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self.kind, ColumnKind::Url(_))
    }

    /// Field holding the link url, for link columns
    #[must_use]
    pub fn link_field_name(&self) -> Option<&str> {
        match &self.kind {
            ColumnKind::Url(attrs) => Some(&attrs.url.field_name),
            ColumnKind::Text => None,
        }
    }

    /// Field holding the link text, for link columns
    #[must_use]
    pub fn display_label_field_name(&self) -> Option<&str> {
        match &self.kind {
            ColumnKind::Url(attrs) => Some(&attrs.label.field_name),
            ColumnKind::Text => None,
        }
    }
}

/// Path to a display value through a reference: `Parent.Name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipPath {
    /// Key of the nested reference object on the record (`Parent`)
    pub relationship: String,
    /// Field read from the nested object (`Name`)
    pub field: String,
}

impl RelationshipPath {
    #[must_use]
    pub fn new(relationship: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            relationship: relationship.into(),
            field: field.into(),
        }
    }

    /// `<relationship>.Name`
    #[must_use]
    pub fn name_of(relationship: impl Into<String>) -> Self {
        Self::new(relationship, "Name")
    }
}

impl fmt::Display for RelationshipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.relationship, self.field)
    }
}

impl FromStr for RelationshipPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((relationship, field))
                if !relationship.is_empty() && !field.is_empty() && !field.contains('.') =>
            {
                Ok(Self::new(relationship, field))
            }
            _ => Err(Error::InvalidRelationshipPath {
                path: s.to_string(),
            }),
        }
    }
}

impl Serialize for RelationshipPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reference field name -> path to its display value, in column order
pub type ReferencePaths = IndexMap<String, RelationshipPath>;

/// Everything the column mapper derives from one metadata response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    pub columns: Vec<ColumnSpec>,
    /// Needed by the tree builder to fill link and label fields
    pub reference_paths: ReferencePaths,
}

impl ColumnLayout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header labels in column order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}
