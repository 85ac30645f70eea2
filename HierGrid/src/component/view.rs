//! Flattened row view over a forest
//!
//! A headless [`TreeSurface`]: every node becomes one display row carrying
//! its depth and expansion state, and only rows whose ancestors are all
//! expanded are visible. Starts fully collapsed, so only roots show.

use hiercore::tree::{Forest, TreeNode};

use super::toggle::TreeSurface;

/// One node of the forest as laid out for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: Option<String>,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GridView {
    rows: Vec<DisplayRow>,
    /// Parallel to `rows`
    nodes: Vec<TreeNode>,
}

impl GridView {
    #[must_use]
    pub fn new(forest: &Forest) -> Self {
        let mut view = Self::default();
        for (depth, node) in forest.iter_depth_first() {
            view.rows.push(DisplayRow {
                id: node.id(),
                depth,
                has_children: !node.is_leaf(),
                is_expanded: false,
                is_visible: depth == 0,
            });
            view.nodes.push(TreeNode::new(node.fields.clone()));
        }
        view
    }

    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Visible rows in display order, paired with their node fields
    pub fn visible_rows(&self) -> impl Iterator<Item = (&DisplayRow, &TreeNode)> {
        self.rows
            .iter()
            .zip(&self.nodes)
            .filter(|(row, _)| row.is_visible)
    }

    /// Flip one row open or closed. Returns `false` for unknown ids and leaves.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        let Some(row) = self
            .rows
            .iter_mut()
            .find(|row| row.id.as_deref() == Some(id) && row.has_children)
        else {
            return false;
        };
        row.is_expanded = !row.is_expanded;
        self.refresh_visibility();
        true
    }

    // A row is visible when every ancestor is expanded. Rows are in
    // pre-order, so the ancestor chain is a stack of open flags by depth.
    fn refresh_visibility(&mut self) {
        let mut open: Vec<bool> = Vec::new();
        for row in &mut self.rows {
            open.truncate(row.depth);
            row.is_visible = open.iter().all(|&o| o);
            open.push(row.is_expanded);
        }
    }
}

impl TreeSurface for GridView {
    fn expand_all(&mut self) {
        for row in &mut self.rows {
            row.is_expanded = row.has_children;
            row.is_visible = true;
        }
    }

    fn collapse_all(&mut self) {
        for row in &mut self.rows {
            row.is_expanded = false;
            row.is_visible = row.depth == 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiercore::record::Record;
    use hiercore::tree::TreeBuilder;
    use pretty_assertions::assert_eq;

    fn forest() -> Forest {
        let records = Record::parse_list(
            r#"[
                {"Id": "a", "Name": "A"},
                {"Id": "b", "Name": "B", "ParentId": "a"},
                {"Id": "c", "Name": "C", "ParentId": "b"},
                {"Id": "d", "Name": "D", "ParentId": "a"}
            ]"#,
        )
        .unwrap();
        TreeBuilder::default().build(&records)
    }

    fn visible_ids(view: &GridView) -> Vec<String> {
        view.visible_rows()
            .filter_map(|(row, _)| row.id.clone())
            .collect()
    }

    #[test]
    fn test_starts_collapsed() {
        let view = GridView::new(&forest());
        assert_eq!(view.rows().len(), 4);
        assert_eq!(visible_ids(&view), vec!["a"]);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut view = GridView::new(&forest());
        view.expand_all();
        assert_eq!(visible_ids(&view), vec!["a", "b", "c", "d"]);
        assert!(!view.rows()[2].is_expanded);

        view.collapse_all();
        assert_eq!(visible_ids(&view), vec!["a"]);
    }

    #[test]
    fn test_toggle_single_row() {
        let mut view = GridView::new(&forest());
        assert!(view.toggle_row("a"));
        assert_eq!(visible_ids(&view), vec!["a", "b", "d"]);

        assert!(view.toggle_row("b"));
        assert_eq!(visible_ids(&view), vec!["a", "b", "c", "d"]);

        // closing the root hides grandchildren even though "b" stays open
        assert!(view.toggle_row("a"));
        assert_eq!(visible_ids(&view), vec!["a"]);
        assert!(view.rows()[1].is_expanded);

        assert!(!view.toggle_row("c"));
        assert!(!view.toggle_row("zzz"));
    }

    #[test]
    fn test_rows_carry_fields_without_children() {
        let view = GridView::new(&forest());
        let (_, node) = view.visible_rows().next().unwrap();
        assert_eq!(node.get_str("Name"), Some("A"));
        assert!(node.is_leaf());
    }
}
