//! External collaborators of the grid
//!
//! The component never fetches anything itself. It asks an
//! [`ObjectInfoProvider`] for field metadata and a [`HierarchyProvider`] for
//! the records under the starting record; both calls are asynchronous and may
//! complete in either order.

mod memory;

pub use memory::{MemoryObjectInfo, MemoryRecordStore};

use hiercore::metadata::ObjectInfo;
use hiercore::record::Record;
use serde::Serialize;

use crate::error::Result;

/// Record fetch request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyQuery {
    /// Entity type to query
    pub object_name: String,
    /// Identifier of the starting (root) record
    pub record_id: String,
    /// Requested fields, parent field included
    pub fields: Vec<String>,
    /// Self-referencing parent field to follow
    pub parent_field: String,
}

/// Looks up field metadata for an entity type.
///
/// `Ok(None)` means "no metadata"; the grid logs it and renders without
/// columns.
#[allow(async_fn_in_trait)]
pub trait ObjectInfoProvider {
    async fn object_info(&self, object_api_name: &str) -> Result<Option<ObjectInfo>>;
}

/// Fetches the starting record and all of its descendants.
///
/// Traversal depth and ordering are the provider's business; the grid
/// assumes one complete response. `Ok(None)` leaves the grid empty.
#[allow(async_fn_in_trait)]
pub trait HierarchyProvider {
    async fn fetch_hierarchy(&self, query: &HierarchyQuery) -> Result<Option<Vec<Record>>>;
}
