//! In-memory collaborators backed by JSON files
//!
//! Used by the CLI and tests in place of a remote metadata service and
//! record store.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use hiercore::metadata::ObjectInfo;
use hiercore::record::Record;

use super::{HierarchyProvider, HierarchyQuery, ObjectInfoProvider};
use crate::error::{Error, Result};

/// Object metadata indexed by entity API name
#[derive(Debug, Clone, Default)]
pub struct MemoryObjectInfo {
    objects: HashMap<String, ObjectInfo>,
}

impl MemoryObjectInfo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata under its own API name
    pub fn insert(&mut self, info: ObjectInfo) {
        self.objects.insert(info.api_name.clone(), info);
    }

    #[must_use]
    pub fn with_object(mut self, info: ObjectInfo) -> Self {
        self.insert(info);
        self
    }

    /// Load one object-info JSON document
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let info = ObjectInfo::from_json_file(path)?;
        Ok(Self::new().with_object(info))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectInfoProvider for MemoryObjectInfo {
    async fn object_info(&self, object_api_name: &str) -> Result<Option<ObjectInfo>> {
        Ok(self.objects.get(object_api_name).cloned())
    }
}

/// Full record tables indexed by entity API name
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    tables: HashMap<String, Vec<Record>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_table(&mut self, object_name: impl Into<String>, records: Vec<Record>) {
        self.tables.insert(object_name.into(), records);
    }

    #[must_use]
    pub fn with_table(mut self, object_name: impl Into<String>, records: Vec<Record>) -> Self {
        self.insert_table(object_name, records);
        self
    }

    /// Load a JSON array of records as the table for `object_name`
    pub fn from_json_file<P: AsRef<Path>>(object_name: impl Into<String>, path: P) -> Result<Self> {
        let records = Record::read_list(path)?;
        Ok(Self::new().with_table(object_name, records))
    }
}

impl HierarchyProvider for MemoryRecordStore {
    async fn fetch_hierarchy(&self, query: &HierarchyQuery) -> Result<Option<Vec<Record>>> {
        let table = self
            .tables
            .get(&query.object_name)
            .ok_or_else(|| Error::Provider(format!("unknown object type {}", query.object_name)))?;

        let records = descendants(table, &query.record_id, &query.parent_field);
        match &records {
            Some(found) => tracing::debug!(
                "Fetched {} {} records under {}",
                found.len(),
                query.object_name,
                query.record_id
            ),
            None => tracing::debug!("No {} record with id {}", query.object_name, query.record_id),
        }
        Ok(records)
    }
}

/// Root record plus every transitive descendant over `parent_field`.
///
/// Breadth-first: the root, then each level in table order. Each table
/// row is returned at most once, so a cyclic table still terminates.
/// Returns `None` when no row carries `record_id`.
fn descendants(table: &[Record], record_id: &str, parent_field: &str) -> Option<Vec<Record>> {
    let root = table.iter().position(|r| r.id().as_deref() == Some(record_id))?;

    // parent id -> child positions, ascending
    let mut children_of: HashMap<String, Vec<usize>> = HashMap::new();
    for (position, record) in table.iter().enumerate() {
        if let Some(parent) = record.key(parent_field) {
            children_of.entry(parent).or_default().push(position);
        }
    }

    let mut taken = vec![false; table.len()];
    taken[root] = true;
    let mut result = vec![table[root].clone()];
    let mut frontier = HashSet::from([record_id.to_string()]);

    while !frontier.is_empty() {
        let mut level: Vec<usize> = frontier
            .iter()
            .filter_map(|id| children_of.get(id))
            .flatten()
            .copied()
            .filter(|&position| !taken[position])
            .collect();
        level.sort_unstable();
        level.dedup();

        frontier = HashSet::with_capacity(level.len());
        for position in level {
            taken[position] = true;
            result.push(table[position].clone());
            if let Some(id) = table[position].id() {
                frontier.insert(id);
            }
        }
    }

    Some(result)
}
