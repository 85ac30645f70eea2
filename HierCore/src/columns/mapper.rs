//! Field metadata -> grid columns

use crate::metadata::{FieldDescriptor, ObjectInfo};
use crate::record::NAME_FIELD;
use crate::synthetic::{NAME_LINK_FIELD, RECORD_ID_LINK_FIELD, link_field, relationship_label_field};

use super::types::{ColumnLayout, ColumnSpec, LeadingIcon, ReferencePaths, RelationshipPath};

/// Derive grid columns for `requested` fields from object metadata.
///
/// Columns follow the requested order. Names without metadata are skipped
/// silently. The first requested field carries the current-record icon.
/// Reference fields and `Name` become hyperlink columns, and every linked
/// reference is recorded in [`ColumnLayout::reference_paths`].
pub fn map_columns<S: AsRef<str>>(info: &ObjectInfo, requested: &[S]) -> ColumnLayout {
    let mut layout = ColumnLayout::default();

    for (index, field_name) in requested.iter().enumerate() {
        let field_name = field_name.as_ref();
        let Some(field) = info.field(field_name) else {
            tracing::debug!("No metadata for field {} on {}, skipping column", field_name, info.api_name);
            continue;
        };

        let mut column = ColumnSpec::text(&field.label, field_name);
        if index == 0 {
            column.leading_icon = Some(LeadingIcon::default());
        }

        if field.is_reference() {
            column = reference_column(column, field_name, field, &mut layout.reference_paths);
        }

        if field_name.eq_ignore_ascii_case(NAME_FIELD) {
            column = column.into_link(
                NAME_LINK_FIELD.to_string(),
                NAME_FIELD.to_string(),
                RECORD_ID_LINK_FIELD.to_string(),
            );
        }

        layout.columns.push(column);
    }

    tracing::debug!(
        "Mapped {} of {} requested fields to columns ({} references)",
        layout.columns.len(),
        requested.len(),
        layout.reference_paths.len()
    );
    layout
}

fn reference_column(
    column: ColumnSpec,
    field_name: &str,
    field: &FieldDescriptor,
    paths: &mut ReferencePaths,
) -> ColumnSpec {
    let Some(relationship) = field.relationship_name.as_deref().filter(|r| !r.is_empty()) else {
        tracing::warn!("Reference field {} has no relationship name, rendering as text", field_name);
        return column;
    };

    paths.insert(field_name.to_string(), RelationshipPath::name_of(relationship));
    let link = link_field(field_name);
    column.into_link(link.clone(), relationship_label_field(relationship), link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnKind;
    use crate::metadata::FieldDataType;
    use pretty_assertions::assert_eq;

    fn account_info() -> ObjectInfo {
        ObjectInfo::new("Account")
            .with_field(FieldDescriptor::scalar("Name", "Account Name", FieldDataType::String))
            .with_field(FieldDescriptor::reference("ParentId", "Parent Account", "Parent"))
            .with_field(FieldDescriptor::reference("OwnerId", "Owner", "Owner"))
            .with_field(FieldDescriptor::scalar("Industry", "Industry", FieldDataType::Picklist))
    }

    #[test]
    fn test_columns_follow_requested_order() {
        let layout = map_columns(&account_info(), &["Industry", "Name", "ParentId"]);
        assert_eq!(layout.labels(), vec!["Industry", "Account Name", "Parent Account"]);
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let requested = ["Name", "Bogus__c", "ParentId", "AlsoMissing"];
        let layout = map_columns(&account_info(), &requested);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.columns[0].field_name, "Name_link");
        assert_eq!(layout.columns[1].field_name, "ParentId_link");
    }

    #[test]
    fn test_only_first_position_gets_icon() {
        let layout = map_columns(&account_info(), &["Industry", "Name", "ParentId"]);
        assert!(layout.columns[0].leading_icon.is_some());
        assert!(layout.columns[1..].iter().all(|c| c.leading_icon.is_none()));

        // icon belongs to requested position 0, not the first surviving column
        let layout = map_columns(&account_info(), &["Missing", "Name"]);
        assert_eq!(layout.len(), 1);
        assert!(layout.columns[0].leading_icon.is_none());
    }

    #[test]
    fn test_reference_column_links() {
        let layout = map_columns(&account_info(), &["Name", "ParentId", "OwnerId"]);

        let parent = &layout.columns[1];
        assert_eq!(parent.field_name, "ParentId_link");
        assert_eq!(parent.link_field_name(), Some("ParentId_link"));
        assert_eq!(parent.display_label_field_name(), Some("ParentName"));

        let owner = &layout.columns[2];
        assert_eq!(owner.field_name, "OwnerId_link");
        assert_eq!(owner.display_label_field_name(), Some("OwnerName"));

        let paths: Vec<String> = layout
            .reference_paths
            .iter()
            .map(|(field, path)| format!("{field}={path}"))
            .collect();
        assert_eq!(paths, vec!["ParentId=Parent.Name", "OwnerId=Owner.Name"]);
    }

    #[test]
    fn test_name_column_links_to_record() {
        let layout = map_columns(&account_info(), &["name"]);
        let name = &layout.columns[0];
        assert_eq!(name.field_name, "Name_link");
        assert_eq!(name.display_label_field_name(), Some("Name"));
        assert_eq!(name.link_field_name(), Some("RecordId_link"));
        assert!(layout.reference_paths.is_empty());
    }

    #[test]
    fn test_name_lookup_is_exact_but_link_rule_is_case_insensitive() {
        let info = ObjectInfo::new("Thing")
            .with_field(FieldDescriptor::scalar("NAME", "Thing Name", FieldDataType::String));
        let layout = map_columns(&info, &["NAME", "Name"]);
        assert_eq!(layout.len(), 1);
        assert!(layout.columns[0].is_link());
        assert_eq!(layout.columns[0].field_name, "Name_link");
    }

    #[test]
    fn test_reference_without_relationship_stays_text() {
        let mut broken = FieldDescriptor::reference("AccountId", "Account", "Account");
        broken.relationship_name = None;
        let info = ObjectInfo::new("Contact").with_field(broken);

        let layout = map_columns(&info, &["AccountId"]);
        assert_eq!(layout.columns[0].kind, ColumnKind::Text);
        assert_eq!(layout.columns[0].field_name, "AccountId");
        assert!(layout.reference_paths.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(map_columns(&account_info(), &none).is_empty());
        assert!(map_columns(&ObjectInfo::new("Account"), &["Name", "ParentId"]).is_empty());
    }
}
