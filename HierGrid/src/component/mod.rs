//! The hierarchy grid component
//!
//! [`HierarchyGrid`] is a state holder fed by two independent completions:
//! object metadata and the fetched records. Either may arrive first. Each
//! arrival re-derives the columns and the forest from whatever is on hand,
//! so records that land before their metadata still pick up reference links
//! once the metadata shows up.
//!
//! ```
//! use futures::executor::block_on;
//! use hiergrid::component::HierarchyGrid;
//! use hiergrid::config::GridConfig;
//! use hiergrid::hiercore::prelude::*;
//! use hiergrid::providers::{MemoryObjectInfo, MemoryRecordStore};
//!
//! let meta = MemoryObjectInfo::new().with_object(
//!     ObjectInfo::new("Account")
//!         .with_field(FieldDescriptor::scalar("Name", "Account Name", FieldDataType::String))
//!         .with_field(FieldDescriptor::reference("ParentId", "Parent Account", "Parent")),
//! );
//! let store = MemoryRecordStore::new().with_table(
//!     "Account",
//!     Record::parse_list(r#"[{"Id": "1", "Name": "A"}, {"Id": "2", "Name": "B", "ParentId": "1"}]"#)?,
//! );
//!
//! let mut grid = HierarchyGrid::new(&GridConfig::for_record("Account", "1"))?;
//! block_on(grid.load(&meta, &store));
//!
//! assert!(!grid.is_loading());
//! assert_eq!(grid.columns().len(), 2);
//! assert_eq!(grid.forest().node_count(), 2);
//! # Ok::<(), hiergrid::Error>(())
//! ```

mod toggle;
mod view;

pub use toggle::{ButtonVariant, ExpandState, ExpandToggle, TreeSurface};
pub use view::{DisplayRow, GridView};

use hiercore::columns::{map_columns, ColumnLayout, ColumnSpec};
use hiercore::metadata::ObjectInfo;
use hiercore::record::Record;
use hiercore::tree::{Forest, TreeBuilder};

use crate::config::{EffectiveConfig, GridConfig};
use crate::error::{Error, Result};
use crate::providers::{HierarchyProvider, ObjectInfoProvider};

/// State of one hierarchy grid instance
#[derive(Debug)]
pub struct HierarchyGrid {
    config: EffectiveConfig,
    object_info: Option<ObjectInfo>,
    layout: Option<ColumnLayout>,
    records: Option<Vec<Record>>,
    forest: Forest,
    error: Option<Error>,
    is_loading: bool,
    toggle: ExpandToggle,
}

impl HierarchyGrid {
    /// Create a grid for a normalized configuration. Starts in the loading state.
    pub fn new(config: &GridConfig) -> Result<Self> {
        let config = config.normalize()?;
        tracing::debug!(
            "Hierarchy grid for {} {} over {} ({} fields)",
            config.object_api_name,
            config.record_id,
            config.parent_field,
            config.fields.len()
        );
        Ok(Self {
            config,
            object_info: None,
            layout: None,
            records: None,
            forest: Forest::default(),
            error: None,
            is_loading: true,
            toggle: ExpandToggle::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Column definitions; empty until metadata arrives
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        self.layout
            .as_ref()
            .map(|layout| layout.columns.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn object_info(&self) -> Option<&ObjectInfo> {
        self.object_info.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ColumnLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.forest.is_empty()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Failure of the most recent record fetch
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Switch entity types. Drops the old metadata and rows; call
    /// [`Self::load`] again.
    pub fn set_object_api_name(&mut self, object_api_name: impl Into<String>) {
        self.config.object_api_name = object_api_name.into();
        self.object_info = None;
        self.layout = None;
        self.records = None;
        self.rebuild();
    }

    /// Metadata completion.
    ///
    /// A failed or empty lookup is logged and leaves the columns unset.
    pub fn on_object_info(&mut self, result: Result<Option<ObjectInfo>>) {
        match result {
            Ok(Some(info)) => {
                self.layout = Some(map_columns(&info, &self.config.fields));
                self.object_info = Some(info);
                self.rebuild();
            }
            Ok(None) => {
                tracing::warn!("No object info for {}", self.config.object_api_name);
            }
            Err(e) => {
                tracing::error!(
                    "Error retrieving object info for {}: {}",
                    self.config.object_api_name,
                    e
                );
            }
        }
    }

    /// Record fetch completion. Always ends the loading state.
    pub fn on_records(&mut self, result: Result<Option<Vec<Record>>>) {
        match result {
            Ok(records) => {
                self.error = None;
                self.records = records;
                self.rebuild();
            }
            Err(e) => {
                tracing::error!("Error fetching hierarchy for {}: {}", self.config.record_id, e);
                self.error = Some(e);
            }
        }
        self.is_loading = false;
    }

    /// Request metadata and records concurrently and apply both completions
    pub async fn load<M, H>(&mut self, metadata: &M, records: &H)
    where
        M: ObjectInfoProvider,
        H: HierarchyProvider,
    {
        self.is_loading = true;
        let query = self.config.query();
        let (info, fetched) = futures::join!(
            metadata.object_info(&self.config.object_api_name),
            records.fetch_hierarchy(&query)
        );
        self.on_object_info(info);
        self.on_records(fetched);
    }

    /// Re-fetch records only, keeping the current metadata
    pub async fn refresh_records<H: HierarchyProvider>(&mut self, records: &H) {
        self.is_loading = true;
        let fetched = records.fetch_hierarchy(&self.config.query()).await;
        self.on_records(fetched);
    }

    /// Re-derive the forest from the stored records and current layout.
    ///
    /// The forest is replaced, never appended to.
    pub fn rebuild(&mut self) {
        let Some(records) = &self.records else {
            self.forest.clear();
            return;
        };

        let paths = self
            .layout
            .as_ref()
            .map(|layout| layout.reference_paths.clone())
            .unwrap_or_default();

        self.forest = TreeBuilder::new(self.config.parent_field.clone())
            .current_record(self.config.record_id.clone())
            .linker(self.config.linker())
            .reference_paths(paths)
            .build(records);

        tracing::info!(
            "Built hierarchy: {} records, {} roots",
            records.len(),
            self.forest.len()
        );
    }

    #[must_use]
    pub fn toggle(&self) -> &ExpandToggle {
        &self.toggle
    }

    /// Expand or collapse every row of `surface`; no-op without one
    pub fn toggle_expand_all(&mut self, surface: Option<&mut dyn TreeSurface>) -> bool {
        self.toggle.toggle(surface)
    }

    #[must_use]
    pub fn button_label(&self) -> String {
        self.toggle.label()
    }

    #[must_use]
    pub fn button_variant(&self) -> ButtonVariant {
        self.toggle.variant()
    }

    /// Display rows for the current forest
    #[must_use]
    pub fn view(&self) -> GridView {
        GridView::new(&self.forest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiercore::metadata::{FieldDataType, FieldDescriptor};
    use pretty_assertions::assert_eq;

    fn info() -> ObjectInfo {
        ObjectInfo::new("Account")
            .with_field(FieldDescriptor::scalar("Name", "Account Name", FieldDataType::String))
            .with_field(FieldDescriptor::reference("ParentId", "Parent Account", "Parent"))
    }

    fn records() -> Vec<Record> {
        Record::parse_list(
            r#"[
                {"Id": "1", "Name": "A", "ParentId": null},
                {"Id": "2", "Name": "B", "ParentId": "1", "Parent": {"Name": "A"}}
            ]"#,
        )
        .unwrap()
    }

    fn grid() -> HierarchyGrid {
        HierarchyGrid::new(&GridConfig::for_record("Account", "1").with_link_origin("https://o")).unwrap()
    }

    #[test]
    fn test_new_requires_record_id() {
        let err = HierarchyGrid::new(&GridConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_initial_state() {
        let grid = grid();
        assert!(grid.is_loading());
        assert!(!grid.has_data());
        assert!(grid.columns().is_empty());
        assert!(grid.error().is_none());
        assert_eq!(grid.title(), "Record Hierarchy");
    }

    #[test]
    fn test_metadata_then_records() {
        let mut grid = grid();
        grid.on_object_info(Ok(Some(info())));
        grid.on_records(Ok(Some(records())));

        let child = &grid.forest().roots()[0].children()[0];
        assert_eq!(child.get_str("ParentId_link"), Some("https://o/1"));
        assert_eq!(child.get_str("ParentName"), Some("A"));
    }

    #[test]
    fn test_records_then_metadata() {
        let mut grid = grid();
        grid.on_records(Ok(Some(records())));
        let child = &grid.forest().roots()[0].children()[0];
        assert_eq!(child.get("ParentId_link"), None);
        assert_eq!(child.get_str("Name_link"), Some("https://o/2"));

        grid.on_object_info(Ok(Some(info())));
        let child = &grid.forest().roots()[0].children()[0];
        assert_eq!(child.get_str("ParentId_link"), Some("https://o/1"));
    }

    #[test]
    fn test_metadata_failure_is_soft() {
        let mut grid = grid();
        grid.on_object_info(Err(Error::Provider("down".to_string())));
        grid.on_records(Ok(Some(records())));
        assert!(grid.columns().is_empty());
        assert!(grid.error().is_none());
        assert!(grid.has_data());
    }

    #[test]
    fn test_fetch_failure_sets_error_and_clears_loading() {
        let mut grid = grid();
        grid.on_records(Err(Error::Provider("timeout".to_string())));
        assert!(!grid.is_loading());
        assert!(matches!(grid.error(), Some(Error::Provider(_))));
        assert!(!grid.has_data());

        grid.on_records(Ok(Some(records())));
        assert!(grid.error().is_none());
        assert!(grid.has_data());
    }

    #[test]
    fn test_empty_fetch_clears_forest() {
        let mut grid = grid();
        grid.on_records(Ok(Some(records())));
        grid.on_records(Ok(None));
        assert!(!grid.has_data());
        assert!(!grid.is_loading());
    }

    #[test]
    fn test_repeated_fetch_does_not_accumulate() {
        let mut grid = grid();
        grid.on_object_info(Ok(Some(info())));
        grid.on_records(Ok(Some(records())));
        let first = grid.forest().clone();
        grid.on_records(Ok(Some(records())));
        assert_eq!(grid.forest(), &first);
        assert_eq!(grid.forest().node_count(), 2);
    }

    #[test]
    fn test_changing_object_type_drops_columns() {
        let mut grid = grid();
        grid.on_object_info(Ok(Some(info())));
        assert_eq!(grid.columns().len(), 2);
        grid.on_records(Ok(Some(records())));
        assert!(grid.has_data());

        grid.set_object_api_name("Case");
        assert!(grid.columns().is_empty());
        assert!(!grid.has_data());
        assert!(grid.object_info().is_none());
        assert_eq!(grid.config().query().object_name, "Case");
    }

    #[test]
    fn test_toggle_through_component() {
        let mut grid = grid();
        grid.on_records(Ok(Some(records())));
        let mut view = grid.view();

        assert!(grid.toggle_expand_all(Some(&mut view)));
        assert_eq!(grid.button_label(), "Click Here to Collapse All Rows");
        assert_eq!(grid.button_variant(), ButtonVariant::Neutral);
        assert_eq!(view.visible_rows().count(), 2);

        assert!(grid.toggle_expand_all(Some(&mut view)));
        assert_eq!(grid.button_label(), "Click Here to Expand All Rows");
        assert_eq!(view.visible_rows().count(), 1);

        assert!(!grid.toggle_expand_all(None));
        assert_eq!(grid.toggle().state(), ExpandState::ExpandAll);
    }
}
