//! Column mapping for the hierarchy grid
//!
//! Turns object field metadata plus a requested field list into grid
//! columns, and records which columns are references so the tree builder can
//! fill their link and label fields.
//!
//! # Usage
//!
//! ```
//! use hiercore::columns::map_columns;
//! use hiercore::metadata::{FieldDataType, FieldDescriptor, ObjectInfo};
//!
//! let info = ObjectInfo::new("Account")
//!     .with_field(FieldDescriptor::scalar("Name", "Account Name", FieldDataType::String))
//!     .with_field(FieldDescriptor::reference("ParentId", "Parent Account", "Parent"));
//!
//! let layout = map_columns(&info, &["Name", "ParentId"]);
//! assert_eq!(layout.columns[1].field_name, "ParentId_link");
//! assert_eq!(layout.reference_paths["ParentId"].to_string(), "Parent.Name");
//! ```

mod mapper;
mod types;

pub use mapper::map_columns;
pub use types::*;
