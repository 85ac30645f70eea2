//! Flat record list -> forest

use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use crate::columns::ReferencePaths;
use crate::link::DeepLinker;
use crate::record::Record;

use super::decorate::decorate;
use super::types::{Forest, TreeNode};

/// Default parent-reference field.
pub const DEFAULT_PARENT_FIELD: &str = "ParentId";

/// Builds a [`Forest`] from one fetch of records.
///
/// Every call to [`TreeBuilder::build`] starts from scratch, so repeated
/// fetches never accumulate roots.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    parent_field: String,
    current_record_id: Option<String>,
    linker: DeepLinker,
    reference_paths: ReferencePaths,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PARENT_FIELD)
    }
}

impl TreeBuilder {
    #[must_use]
    pub fn new(parent_field: impl Into<String>) -> Self {
        Self {
            parent_field: parent_field.into(),
            current_record_id: None,
            linker: DeepLinker::default(),
            reference_paths: ReferencePaths::new(),
        }
    }

    /// Record that gets the current-record marker
    #[must_use]
    pub fn current_record(mut self, id: impl Into<String>) -> Self {
        self.current_record_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn linker(mut self, linker: DeepLinker) -> Self {
        self.linker = linker;
        self
    }

    /// Reference fields to link, as produced by the column mapper
    #[must_use]
    pub fn reference_paths(mut self, paths: ReferencePaths) -> Self {
        self.reference_paths = paths;
        self
    }

    #[must_use]
    pub fn parent_field(&self) -> &str {
        &self.parent_field
    }

    /// Decorate every record and nest each under its parent.
    ///
    /// A record is a root when its parent value is empty or names no record
    /// in `records`; otherwise it becomes a child of exactly that record.
    /// Each input record appears once in the result.
    #[must_use]
    pub fn build(&self, records: &[Record]) -> Forest {
        let mut slots: Vec<Option<TreeNode>> = records
            .iter()
            .map(|record| {
                Some(TreeNode::new(decorate(
                    record,
                    &self.reference_paths,
                    &self.linker,
                    self.current_record_id.as_deref(),
                )))
            })
            .collect();

        let index = index_by_id(records);
        let mut links = Links::resolve(records, &index, &self.parent_field);
        links.break_cycles();

        for idx in links.assembly_order().into_iter().rev() {
            let Some(mut node) = slots[idx].take() else {
                continue;
            };
            for &child in &links.children[idx] {
                if let Some(child_node) = slots[child].take() {
                    node.push_child(child_node);
                }
            }
            slots[idx] = Some(node);
        }

        let roots: Vec<TreeNode> = links.roots.iter().filter_map(|&idx| slots[idx].take()).collect();
        tracing::debug!("Built forest: {} records, {} roots", records.len(), roots.len());
        Forest::new(roots)
    }
}

/// Identifier -> position of the first record carrying it
fn index_by_id(records: &[Record]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let Some(id) = record.id() else {
            continue;
        };
        match index.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(slot) => {
                tracing::warn!("Duplicate record id {} at position {}, keeping first", slot.key(), position);
            }
        }
    }
    index
}

/// Parent/child edges between record positions
struct Links {
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

impl Links {
    fn resolve(records: &[Record], index: &HashMap<String, usize>, parent_field: &str) -> Self {
        let parents: Vec<Option<usize>> = records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                record
                    .key(parent_field)
                    .and_then(|parent_id| index.get(&parent_id).copied())
                    .filter(|&parent| parent != position)
            })
            .collect();

        let mut children = vec![Vec::new(); records.len()];
        let mut roots = Vec::new();
        for (position, parent) in parents.iter().enumerate() {
            match parent {
                Some(parent) => children[*parent].push(position),
                None => roots.push(position),
            }
        }

        Self {
            parents,
            children,
            roots,
        }
    }

    /// Promote one record of every parent cycle to a root.
    ///
    /// Records on a cycle, and everything below them, are unreachable from
    /// any root and would otherwise vanish from the forest. Only the cycle
    /// member listed first loses its parent edge; records hanging off the
    /// cycle keep theirs.
    fn break_cycles(&mut self) {
        let mut reached = vec![false; self.parents.len()];
        self.mark_reachable(&self.roots, &mut reached);

        for position in 0..self.parents.len() {
            if reached[position] {
                continue;
            }
            let Some(member) = self.first_cycle_member(position) else {
                continue;
            };
            if let Some(parent) = self.parents[member].take() {
                self.children[parent].retain(|&child| child != member);
            }
            tracing::warn!("Parent cycle at record position {}, promoting it to a root", member);
            self.roots.push(member);
            self.mark_reachable(&[member], &mut reached);
        }

        self.roots.sort_unstable();
    }

    /// Lowest position on the cycle that `start`'s ancestor chain ends in.
    fn first_cycle_member(&self, start: usize) -> Option<usize> {
        let mut seen = HashSet::new();
        let mut position = start;
        while seen.insert(position) {
            position = self.parents[position]?;
        }

        // `position` is on the cycle; walk it once to find its lowest member
        let mut lowest = position;
        let mut current = self.parents[position]?;
        while current != position {
            lowest = lowest.min(current);
            current = self.parents[current]?;
        }
        Some(lowest)
    }

    fn mark_reachable(&self, from: &[usize], reached: &mut [bool]) {
        let mut stack = from.to_vec();
        while let Some(position) = stack.pop() {
            if reached[position] {
                continue;
            }
            reached[position] = true;
            stack.extend(self.children[position].iter().copied());
        }
    }

    /// Pre-order positions over the whole forest; reversed, every node comes
    /// after all of its descendants.
    fn assembly_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.parents.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(position) = stack.pop() {
            order.push(position);
            stack.extend(self.children[position].iter().rev().copied());
        }
        order
    }
}
