//! Command execution implementations

use super::Commands;
use super::render::GridInputs;
use super::{columns, outline, render};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if an input cannot be loaded or the fetch fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Columns {
                metadata,
                config,
                fields,
                pretty,
            } => columns::execute(metadata, config.as_deref(), fields.as_deref(), *pretty),
            Commands::Render {
                config,
                metadata,
                records,
                record_id,
                origin,
                fields,
                pretty,
            } => render::execute(
                &GridInputs {
                    config: config.as_deref(),
                    metadata,
                    records,
                    record_id: record_id.as_deref(),
                    origin: origin.as_deref(),
                    fields: fields.as_deref(),
                },
                *pretty,
            ),
            Commands::Outline {
                config,
                metadata,
                records,
                record_id,
                fields,
                collapsed,
            } => outline::execute(
                &GridInputs {
                    config: config.as_deref(),
                    metadata,
                    records,
                    record_id: record_id.as_deref(),
                    origin: None,
                    fields: fields.as_deref(),
                },
                *collapsed,
            ),
        }
    }
}
