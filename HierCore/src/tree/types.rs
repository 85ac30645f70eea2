//! Tree node and forest types

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::record::{ID_FIELD, value_key};
use crate::synthetic::CURRENT_RECORD_FIELD;

/// A decorated record with its nested children.
///
/// `children` is `None` for a leaf, never `Some(vec![])`, so the grid can
/// tell a leaf from an expandable row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeNode {
    /// Record fields plus synthetic link/label/marker fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(rename = "_children", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            children: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.fields.get(ID_FIELD).and_then(value_key)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// String value of `field`, if it is a string
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether this node carries the current-record icon
    #[must_use]
    pub fn is_current_record(&self) -> bool {
        self.fields.contains_key(CURRENT_RECORD_FIELD)
    }

    /// Append a child, creating the list on first use
    pub fn push_child(&mut self, child: TreeNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }
}

// Children are freed from a heap stack, not recursively.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let Some(mut stack) = self.children.take() else {
            return;
        };
        while let Some(mut node) = stack.pop() {
            if let Some(children) = node.children.take() {
                stack.extend(children);
            }
        }
    }
}

/// Number of tree levels [`Forest`] will serialize.
///
/// JSON output nests one level per tree level and is written recursively.
/// Deeper forests still build, iterate, and drop.
pub const MAX_SERIALIZE_DEPTH: usize = 256;

/// Root nodes of one fetch, in fetch order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    roots: Vec<TreeNode>,
}

impl Forest {
    #[must_use]
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self { roots }
    }

    #[must_use]
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    #[must_use]
    pub fn into_roots(self) -> Vec<TreeNode> {
        self.roots
    }

    /// Number of root nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn clear(&mut self) {
        self.roots.clear();
    }

    /// Number of nodes at every depth
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter_depth_first().count()
    }

    /// Pre-order walk yielding `(depth, node)`, roots at depth 0
    #[must_use]
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.roots.iter().rev().map(|node| (0, node)).collect(),
        }
    }

    /// Find a node anywhere in the forest by identifier
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        self.iter_depth_first()
            .map(|(_, node)| node)
            .find(|node| node.id().as_deref() == Some(id))
    }

    /// Depth of the deepest node (0 for a flat forest, `None` if empty)
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.iter_depth_first().map(|(depth, _)| depth).max()
    }

    /// Serialize as the JSON array handed to the grid
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Forest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(depth) = self.max_depth().filter(|&d| d >= MAX_SERIALIZE_DEPTH) {
            return Err(S::Error::custom(format!(
                "forest is {} levels deep, serialization supports at most {MAX_SERIALIZE_DEPTH}",
                depth + 1
            )));
        }
        self.roots.serialize(serializer)
    }
}

/// Iterator returned by [`Forest::iter_depth_first`]
#[derive(Debug)]
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
