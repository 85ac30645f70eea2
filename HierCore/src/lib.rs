//! # HierCore
//!
//! Engine for rendering a self-referencing record set as an expandable tree
//! grid.
//!
//! ## What it does
//!
//! - **Column mapping** - object field metadata plus a requested field list
//!   become ordered grid columns; reference fields and `Name` render as links
//! - **Tree building** - a flat list of fetched records becomes a forest,
//!   each record nested under the record its parent field names
//!
//! Both steps are pure and synchronous. Fetching metadata and records is the
//! caller's job (see the `hiergrid` crate).
//!
//! ## Quick Start
//!
//! ```
//! use hiercore::prelude::*;
//!
//! let info = ObjectInfo::new("Account")
//!     .with_field(FieldDescriptor::scalar("Name", "Account Name", FieldDataType::String))
//!     .with_field(FieldDescriptor::reference("ParentId", "Parent Account", "Parent"));
//!
//! let layout = map_columns(&info, &["Name", "ParentId"]);
//!
//! let records = Record::parse_list(r#"[
//!     {"Id": "1", "Name": "A", "ParentId": null},
//!     {"Id": "2", "Name": "B", "ParentId": "1", "Parent": {"Name": "A"}}
//! ]"#)?;
//!
//! let forest = TreeBuilder::new("ParentId")
//!     .current_record("1")
//!     .linker(DeepLinker::new("https://example.my.site.com"))
//!     .reference_paths(layout.reference_paths.clone())
//!     .build(&records);
//!
//! let child = &forest.roots()[0].children()[0];
//! assert_eq!(child.get_str("ParentName"), Some("A"));
//! # Ok::<(), hiercore::Error>(())
//! ```

pub mod error;
pub mod metadata;
pub mod record;
pub mod link;
pub mod synthetic;
pub mod columns;
pub mod tree;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::metadata::{FieldDataType, FieldDescriptor, ObjectInfo};
    pub use crate::record::Record;
    pub use crate::link::DeepLinker;
    pub use crate::columns::{
        map_columns, ColumnKind, ColumnLayout, ColumnSpec, ReferencePaths, RelationshipPath,
    };
    pub use crate::tree::{Forest, TreeBuilder, TreeNode, DEFAULT_PARENT_FIELD};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
