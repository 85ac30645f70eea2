//! Synthetic field names shared by grid columns and tree nodes
//!
//! The column mapper points columns at these keys; the tree builder writes
//! them into every node. Both sides must agree, so they live here.

/// Suffix of the per-field deep-link key (`ParentId` -> `ParentId_link`).
pub const LINK_SUFFIX: &str = "_link";
/// Deep link to the record itself, shown as the `Name` column value.
pub const NAME_LINK_FIELD: &str = "Name_link";
/// Deep link to the record itself, used as the `Name` column url.
pub const RECORD_ID_LINK_FIELD: &str = "RecordId_link";
/// Field carrying the leading icon of the first column.
pub const CURRENT_RECORD_FIELD: &str = "isCurrentRecord";
/// Icon token marking the record the hierarchy was opened from.
pub const CURRENT_RECORD_ICON: &str = "standard:choice";
/// Alternative text for the current-record icon.
pub const CURRENT_RECORD_ALT_TEXT: &str = "Current Record";
/// Node key holding nested children.
pub const CHILDREN_KEY: &str = "_children";
/// Hyperlink target for all link columns.
pub const LINK_TARGET: &str = "_blank";

/// `<field>_link`
#[must_use]
pub fn link_field(field: &str) -> String {
    format!("{field}{LINK_SUFFIX}")
}

/// `<relationship>Name`, the denormalized display label of a reference
#[must_use]
pub fn relationship_label_field(relationship: &str) -> String {
    format!("{relationship}Name")
}
