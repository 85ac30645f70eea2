//! CLI command for printing the column layout

use std::path::Path;

use hiercore::columns::map_columns;
use hiercore::metadata::ObjectInfo;

use crate::config::GridConfig;

pub fn execute(
    metadata: &Path,
    config: Option<&Path>,
    fields: Option<&str>,
    pretty: bool,
) -> anyhow::Result<()> {
    let info = ObjectInfo::from_json_file(metadata)?;

    let mut grid_config = match config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };
    if let Some(fields) = fields {
        grid_config = grid_config.with_fields(fields);
    }

    let requested = grid_config.effective_fields();
    let layout = map_columns(&info, &requested);
    tracing::info!(
        "{}: {} of {} fields mapped",
        info.api_name,
        layout.len(),
        requested.len()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{json}");
    Ok(())
}
