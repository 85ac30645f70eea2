//! HierGrid - Expandable tree grid for self-referencing record hierarchies
//!
//! Wraps the `hiercore` engine in a component: configuration, asynchronous
//! metadata and record collaborators, the grid state holder and the
//! expand/collapse toggle.

// Re-export hiercore
pub use hiercore;

pub mod component;
pub mod config;
pub mod error;
pub mod providers;

// Feature-gated modules
#[cfg(feature = "cli")]
pub mod cli;

pub use component::HierarchyGrid;
pub use config::{EffectiveConfig, FieldList, GridConfig};
pub use error::{Error, Result};
