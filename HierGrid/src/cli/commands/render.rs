//! CLI command for rendering the forest as JSON

use std::path::Path;

use futures::executor::block_on;
use hiercore::metadata::ObjectInfo;

use crate::component::HierarchyGrid;
use crate::config::GridConfig;
use crate::providers::{MemoryObjectInfo, MemoryRecordStore};

/// File inputs and overrides shared by `render` and `outline`
pub struct GridInputs<'a> {
    pub config: Option<&'a Path>,
    pub metadata: &'a Path,
    pub records: &'a Path,
    pub record_id: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub fields: Option<&'a str>,
}

/// Load everything and run one full grid load with the in-memory collaborators.
///
/// The entity type defaults to the metadata file's `apiName`.
pub fn load_grid(inputs: &GridInputs<'_>) -> anyhow::Result<HierarchyGrid> {
    let info = ObjectInfo::from_json_file(inputs.metadata)?;

    let mut config = match inputs.config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };
    if let Some(record_id) = inputs.record_id {
        config.record_id = Some(record_id.to_string());
    }
    if let Some(origin) = inputs.origin {
        config.link_origin = origin.to_string();
    }
    if let Some(fields) = inputs.fields {
        config = config.with_fields(fields);
    }
    let object_name = config
        .object_api_name
        .get_or_insert_with(|| info.api_name.clone())
        .clone();

    let metadata = MemoryObjectInfo::new().with_object(info);
    let store = MemoryRecordStore::from_json_file(object_name, inputs.records)?;

    let mut grid = HierarchyGrid::new(&config)?;
    block_on(grid.load(&metadata, &store));

    if let Some(err) = grid.error() {
        anyhow::bail!("Failed to fetch hierarchy: {err}");
    }
    Ok(grid)
}

pub fn execute(inputs: &GridInputs<'_>, pretty: bool) -> anyhow::Result<()> {
    let grid = load_grid(inputs)?;

    let json = if pretty {
        serde_json::to_string_pretty(grid.forest())?
    } else {
        serde_json::to_string(grid.forest())?
    };
    println!("{json}");
    Ok(())
}
