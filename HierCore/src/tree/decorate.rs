//! Decoration pass: copy a record and inject display fields

use serde_json::{Map, Value};

use crate::columns::ReferencePaths;
use crate::link::DeepLinker;
use crate::record::{NAME_FIELD, Record, is_truthy};
use crate::synthetic::{
    CURRENT_RECORD_FIELD, CURRENT_RECORD_ICON, NAME_LINK_FIELD, RECORD_ID_LINK_FIELD, link_field,
    relationship_label_field,
};

/// Copy `record` and add link, label, and current-record fields.
///
/// Missing values become empty strings; nothing here fails.
pub(crate) fn decorate(
    record: &Record,
    paths: &ReferencePaths,
    linker: &DeepLinker,
    current_record_id: Option<&str>,
) -> Map<String, Value> {
    let mut fields = record.fields().clone();
    let id = record.id();

    for (field, path) in paths {
        let link = record
            .key(field)
            .map(|target| linker.link(&target))
            .unwrap_or_default();
        fields.insert(link_field(field), Value::String(link));

        let label = record
            .get_nested(&path.relationship, &path.field)
            .filter(|value| is_truthy(value))
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        fields.insert(relationship_label_field(&path.relationship), label);
    }

    if record.get(NAME_FIELD).is_some_and(is_truthy) {
        let self_link = linker.link(id.as_deref().unwrap_or_default());
        fields.insert(NAME_LINK_FIELD.to_string(), Value::String(self_link.clone()));
        fields.insert(RECORD_ID_LINK_FIELD.to_string(), Value::String(self_link));
    }

    if id.is_some() && id.as_deref() == current_record_id {
        fields.insert(
            CURRENT_RECORD_FIELD.to_string(),
            Value::String(CURRENT_RECORD_ICON.to_string()),
        );
    }

    fields
}
