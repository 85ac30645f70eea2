//! Tree building for the hierarchy grid
//!
//! Reshapes a flat list of records, related through a self-referencing
//! parent field, into a forest of decorated [`TreeNode`]s.
//!
//! # Usage
//!
//! ```
//! use hiercore::record::Record;
//! use hiercore::tree::TreeBuilder;
//!
//! let records = vec![
//!     Record::new().with("Id", "1").with("Name", "Acme"),
//!     Record::new().with("Id", "2").with("Name", "Acme East").with("ParentId", "1"),
//! ];
//!
//! let forest = TreeBuilder::new("ParentId").current_record("1").build(&records);
//! assert_eq!(forest.len(), 1);
//! assert_eq!(forest.roots()[0].children().len(), 1);
//! assert!(forest.roots()[0].is_current_record());
//! ```

mod builder;
mod decorate;
mod types;

pub use builder::{DEFAULT_PARENT_FIELD, TreeBuilder};
pub use types::{DepthFirst, Forest, MAX_SERIALIZE_DEPTH, TreeNode};
