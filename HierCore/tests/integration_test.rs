use hiercore::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashSet;
use std::io::Write;

fn account_info() -> ObjectInfo {
    ObjectInfo::new("Account")
        .with_field(FieldDescriptor::scalar("Name", "Account Name", FieldDataType::String))
        .with_field(FieldDescriptor::reference("ParentId", "Parent Account", "Parent"))
        .with_field(FieldDescriptor::scalar("Industry", "Industry", FieldDataType::Picklist))
}

fn records() -> Vec<Record> {
    Record::parse_list(
        r#"[
            {"Id": "1", "Name": "A", "ParentId": null},
            {"Id": "2", "Name": "B", "ParentId": "1", "Parent": {"Name": "A"}},
            {"Id": "3", "Name": "C", "ParentId": "1", "Parent": {"Name": "A"}},
            {"Id": "4", "Name": "D", "ParentId": "3", "Parent": {"Name": "C"}},
            {"Id": "5", "Name": "E", "ParentId": "999", "Parent": {"Name": "Elsewhere"}}
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_worked_example_end_to_end() {
    let layout = map_columns(&account_info(), &["Name", "ParentId"]);
    let records = Record::parse_list(
        r#"[
            {"Id": "1", "Name": "A", "ParentId": null},
            {"Id": "2", "Name": "B", "ParentId": "1", "Parent": {"Name": "A"}}
        ]"#,
    )
    .unwrap();

    let forest = TreeBuilder::new("ParentId")
        .current_record("1")
        .linker(DeepLinker::new("https://origin"))
        .reference_paths(layout.reference_paths)
        .build(&records);

    assert_eq!(forest.len(), 1);
    let root = &forest.roots()[0];
    assert_eq!(root.get_str("isCurrentRecord"), Some("standard:choice"));
    assert_eq!(root.get_str("Name_link"), Some("https://origin/1"));

    let child = &root.children()[0];
    assert_eq!(child.id().as_deref(), Some("2"));
    assert_eq!(child.get_str("ParentId_link"), Some("https://origin/1"));
    assert_eq!(child.get_str("ParentName"), Some("A"));
    assert_eq!(child.get_str("Name_link"), Some("https://origin/2"));
    assert!(!child.is_current_record());
    assert!(child.is_leaf());
}

#[test]
fn test_every_record_placed_exactly_once() {
    let records = records();
    let forest = TreeBuilder::default().current_record("1").build(&records);

    let placed: Vec<String> = forest
        .iter_depth_first()
        .map(|(_, node)| node.id().unwrap())
        .collect();
    let unique: HashSet<&String> = placed.iter().collect();
    assert_eq!(placed.len(), records.len());
    assert_eq!(unique.len(), records.len());

    // "5" points outside the fetch set
    let root_ids: Vec<String> = forest.roots().iter().map(|n| n.id().unwrap()).collect();
    assert_eq!(root_ids, vec!["1".to_string(), "5".to_string()]);
}

#[test]
fn test_children_attach_to_named_parent() {
    let forest = TreeBuilder::default().build(&records());
    for (_, node) in forest.iter_depth_first() {
        for child in node.children() {
            assert_eq!(child.get("ParentId"), node.get("Id"));
        }
    }
}

#[test]
fn test_only_current_record_is_marked() {
    let forest = TreeBuilder::default().current_record("3").build(&records());
    let marked: Vec<String> = forest
        .iter_depth_first()
        .filter(|(_, node)| node.is_current_record())
        .map(|(_, node)| node.id().unwrap())
        .collect();
    assert_eq!(marked, vec!["3".to_string()]);
}

#[test]
fn test_column_layout_json() {
    let layout = map_columns(&account_info(), &["Name", "ParentId", "Missing", "Industry"]);
    let value = serde_json::to_value(&layout).unwrap();

    assert_eq!(value["columns"].as_array().unwrap().len(), 3);
    assert_eq!(value["columns"][0]["typeAttributes"]["url"], json!({"fieldName": "RecordId_link"}));
    assert_eq!(value["columns"][1]["typeAttributes"]["label"], json!({"fieldName": "ParentName"}));
    assert_eq!(value["columns"][2]["type"], json!("text"));
    assert_eq!(value["referencePaths"], json!({"ParentId": "Parent.Name"}));
}

#[test]
fn test_load_inputs_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let meta_path = dir.path().join("account.json");
    let mut meta = std::fs::File::create(&meta_path).unwrap();
    write!(
        meta,
        r#"{{"apiName": "Account", "fields": {{
            "Name": {{"apiName": "Name", "label": "Account Name", "dataType": "String"}},
            "ParentId": {{"apiName": "ParentId", "label": "Parent", "dataType": "reference", "relationshipName": "Parent"}}
        }}}}"#
    )
    .unwrap();

    let records_path = dir.path().join("records.json");
    std::fs::write(&records_path, r#"[{"Id": "1", "Name": "A"}, {"Id": "2", "ParentId": "1"}]"#).unwrap();

    let info = ObjectInfo::from_json_file(&meta_path).unwrap();
    let layout = map_columns(&info, &["Name", "ParentId"]);
    assert_eq!(layout.reference_paths.len(), 1);

    let records = Record::read_list(&records_path).unwrap();
    let forest = TreeBuilder::default().build(&records);
    assert_eq!(forest.node_count(), 2);
    assert_eq!(forest.max_depth(), Some(1));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ObjectInfo::from_json_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
